pub mod document;

pub use document::{
    export_configuration, import_configuration, restore_transform, CanvasRecord,
    ConfigurationDocument, PhotoRecord,
};

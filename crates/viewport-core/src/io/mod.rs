pub mod data_uri;
pub mod image_io;
pub mod media;

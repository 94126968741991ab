pub mod config;
pub mod consts;
pub mod error;
pub mod geometry;
pub mod io;
pub mod render;
pub mod session;
pub mod settings;
pub mod viewport;

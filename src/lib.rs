pub mod config;
pub mod core;
pub mod error;
pub mod geom;
pub mod material;
pub mod render;
pub mod scene;

pub use error::Error;

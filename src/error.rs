use thiserror::Error;

use crate::core::Vec3;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid ray: origin {origin}, direction {direction}")]
    InvalidRay { origin: Vec3<f64>, direction: Vec3<f64> },

    #[error("invalid sphere at {center}: radius {radius} must be positive and finite")]
    InvalidSphere { center: Vec3<f64>, radius: f64 },

    #[error("invalid material: {reason}")]
    InvalidMaterial { reason: String },

    #[error("invalid tuning: {reason}")]
    InvalidTuning { reason: String },

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse failure: {0}")]
    Json(#[from] serde_json::Error),

    #[error("image encode failure: {0}")]
    Image(#[from] image::ImageError),
}

impl Error {
    pub fn config<S: Into<String>>(reason: S) -> Error {
        Error::InvalidConfig { reason: reason.into() }
    }
}

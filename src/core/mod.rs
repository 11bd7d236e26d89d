mod camera;
pub use self::camera::{Camera, DEFAULT_FOV_Y_DEGREES};

mod math;
pub use self::math::*;

mod ray;
pub use self::ray::Ray;

mod vector;
pub use self::vector::Vec3;
pub type Vec = vector::Vec3<f64>;

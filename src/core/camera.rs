use crate::core;

pub const DEFAULT_FOV_Y_DEGREES: f64 = 90.0;

/** Pinhole camera looking down the negative Z-axis. */
#[derive(Clone, Debug)]
pub struct Camera {
    /** Position of the eye in world space. */
    pub position: core::Vec,
    /** Full vertical field of view, in degrees. */
    pub fov_y: f64,
    /** Horizontal to vertical ratio of the film. */
    pub aspect_ratio: f64,
}

impl Camera {
    pub fn new(position: core::Vec, fov_y: f64, aspect_ratio: f64) -> Camera {
        Camera {
            position: position,
            fov_y: fov_y,
            aspect_ratio: aspect_ratio,
        }
    }

    pub fn default() -> Camera {
        Camera::new(core::Vec::zero(), DEFAULT_FOV_Y_DEGREES, 1.0)
    }

    /**
     * Half-extents of the image window on the plane one unit in front of the eye.
     * A 90 degree field of view gives a vertical half-extent of exactly 1.
     */
    pub fn window_max(&self) -> (f64, f64) {
        let half_height = (0.5 * self.fov_y.to_radians()).tan();
        (half_height * self.aspect_ratio, half_height)
    }

    /**
     * Computes the ray starting at the viewpoint and extending through the given window position.
     * The window position is defined in normalized coordinates in [-1, 1] where (0, 0) is the
     * center, (-1, -1) is the lower-left, and (1, 1) is the upper-right.
     */
    pub fn compute_ray(&self, s: f64, t: f64) -> core::Ray {
        let window_max = self.window_max();
        let direction = core::Vec::new(window_max.0 * s, window_max.1 * t, -1.0).normalized();
        core::Ray::new(self.position, direction)
    }
}

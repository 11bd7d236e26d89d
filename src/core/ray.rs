use crate::core;
use crate::error::Error;

use std::fmt;
use std::fmt::Display;

#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: core::Vec,
    pub direction: core::Vec,
}

impl Ray {
    /// The direction need not be unit length, but it must not be zero. Use `try_new` for rays
    /// built from untrusted input.
    pub fn new(origin: core::Vec, direction: core::Vec) -> Ray {
        Ray {origin: origin, direction: direction}
    }

    pub fn try_new(origin: core::Vec, direction: core::Vec) -> Result<Ray, Error> {
        if !origin.is_finite() || !direction.is_finite() || direction.is_exactly_zero() {
            return Err(Error::InvalidRay {origin: origin, direction: direction});
        }
        Ok(Ray::new(origin, direction))
    }

    pub fn at(&self, k: f64) -> core::Vec {
        self.origin + k * self.direction
    }
}

impl Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Ray {{origin: {}, direction: {}}}", self.origin, self.direction)
    }
}

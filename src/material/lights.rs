use crate::core;

/// Single point light. Its position may change between frames but never during one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub position: core::Vec,
    pub color: core::Vec,
}

impl PointLight {
    pub fn new(position: core::Vec, color: core::Vec) -> PointLight {
        PointLight {position: position, color: color}
    }

    /// Unit direction from the light to the given point, i.e. the incident direction at that
    /// point.
    pub fn incident(&self, point: &core::Vec) -> core::Vec {
        (*point - self.position).normalized()
    }
}

use crate::core;

/// Result of intersecting a ray with one sphere or with a whole sphere list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intersection {
    Hit {
        /// Distance along the ray, in units of the ray direction. Always positive.
        dist: f64,
        position: core::Vec,
        /// Unit normal pointing away from the sphere center.
        normal: core::Vec,
        /// Index of the hit sphere in its list. Needed so shadow rays can skip it.
        sphere_index: usize,
    },
    NoHit,
}

impl Intersection {
    /// Distance to the hit, or `0.0` for `NoHit`. Zero is never a valid hit distance.
    pub fn dist(&self) -> f64 {
        match *self {
            Intersection::Hit {dist, ..} => dist,
            Intersection::NoHit => 0.0,
        }
    }

    pub fn is_hit(&self) -> bool {
        match *self {
            Intersection::Hit {..} => true,
            Intersection::NoHit => false,
        }
    }

    /// Whether this hit is strictly closer than `other`. Any hit is closer than `NoHit`.
    pub fn is_closer_than(&self, other: &Intersection) -> bool {
        match (self, other) {
            (&Intersection::Hit {dist: a, ..}, &Intersection::Hit {dist: b, ..}) => a < b,
            (&Intersection::Hit {..}, &Intersection::NoHit) => true,
            _ => false,
        }
    }
}

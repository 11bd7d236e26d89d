use crate::core;
use crate::geom::{Intersection, Sphere};

use std::ops::Index;

/// Ordered, runtime-length collection of spheres. Immutable once built; the order is the
/// tie-break order for equidistant hits.
#[derive(Clone, Debug, Default)]
pub struct SphereList {
    spheres: std::vec::Vec<Sphere>,
}

impl SphereList {
    pub fn new(spheres: std::vec::Vec<Sphere>) -> SphereList {
        SphereList {spheres: spheres}
    }

    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sphere> {
        self.spheres.iter()
    }

    /// Nearest hit with positive distance across every sphere.
    pub fn intersect(&self, ray: &core::Ray) -> Intersection {
        self.nearest(ray, None)
    }

    /// Nearest hit across every sphere except the one at `exclude`.
    pub fn intersect_excluding(&self, ray: &core::Ray, exclude: usize) -> Intersection {
        self.nearest(ray, Some(exclude))
    }

    fn nearest(&self, ray: &core::Ray, exclude: Option<usize>) -> Intersection {
        let mut closest = Intersection::NoHit;
        for (index, sphere) in self.spheres.iter().enumerate() {
            if exclude == Some(index) {
                continue;
            }
            let isect = match sphere.intersect(ray) {
                Intersection::Hit {dist, position, normal, ..} => Intersection::Hit {
                    dist: dist,
                    position: position,
                    normal: normal,
                    sphere_index: index,
                },
                Intersection::NoHit => continue,
            };
            // Strict comparison keeps the earlier sphere on an exact tie.
            if isect.is_closer_than(&closest) {
                closest = isect;
            }
        }
        closest
    }
}

impl Index<usize> for SphereList {
    type Output = Sphere;

    fn index(&self, i: usize) -> &Sphere {
        &self.spheres[i]
    }
}

impl<'a> IntoIterator for &'a SphereList {
    type Item = &'a Sphere;
    type IntoIter = std::slice::Iter<'a, Sphere>;

    fn into_iter(self) -> Self::IntoIter {
        self.spheres.iter()
    }
}

use crate::core;
use crate::error::Error;
use crate::geom::Intersection;
use crate::material;

#[derive(Clone, Debug)]
pub struct Sphere {
    center: core::Vec,
    radius: f64,
    mat: material::Material,
}

impl Sphere {
    pub fn new(center: core::Vec, radius: f64, material: material::Material)
        -> Result<Sphere, Error>
    {
        if !center.is_finite() || !radius.is_finite() || radius <= 0.0 {
            return Err(Error::InvalidSphere {center: center, radius: radius});
        }
        Ok(Sphere {
            center: center,
            radius: radius,
            mat: material,
        })
    }

    pub fn center(&self) -> &core::Vec {
        &self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn material(&self) -> &material::Material {
        &self.mat
    }

    /// Intersects the ray with this sphere and returns the nearer root if it lies in front of
    /// the ray origin. The ray direction need not be unit length.
    ///
    /// Only the nearer root is considered: when it is behind the origin the result is `NoHit`
    /// even if the farther root is ahead. An origin inside the sphere therefore never hits.
    /// `sphere_index` is left at 0; `SphereList` fills in the real index.
    pub fn intersect(&self, ray: &core::Ray) -> Intersection {
        let oc = ray.origin - self.center;
        let d = &ray.direction;

        // See Wikipedia:
        // <http://en.wikipedia.org/wiki/Line%E2%80%93sphere_intersection>
        let a = d.dot(d);
        if !a.is_normal() {
            return Intersection::NoHit;
        }
        let b = 2.0 * oc.dot(d);
        let c = oc.dot(&oc) - (self.radius * self.radius);

        let discriminant = (b * b) - (4.0 * a * c);
        if discriminant < 0.0 {
            return Intersection::NoHit;
        }

        let sqrt_discriminant = discriminant.sqrt();
        let t1 = (-b - sqrt_discriminant) / (2.0 * a);
        let t2 = (-b + sqrt_discriminant) / (2.0 * a);
        let t = f64::min(t1, t2);
        // NaN fails this too.
        if !(t > 0.0) {
            return Intersection::NoHit;
        }

        let position = ray.at(t);
        Intersection::Hit {
            dist: t,
            position: position,
            normal: (position - self.center).normalized(),
            sphere_index: 0,
        }
    }
}

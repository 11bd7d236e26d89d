pub mod presets;

use crate::core;
use crate::error::Error;
use crate::geom::{Intersection, SphereList};
use crate::material::PointLight;

use tracing::{trace, warn};

/// Constants of the bounce integrator and shadow test.
///
/// Each bounce accumulates `color = (color + bounce_weight * contribution) / bounce_normalizer`;
/// an occluded first hit multiplies the color by `shadow_attenuation`; a blocker only counts
/// when it sits more than `shadow_epsilon` in front of the shaded point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tuning {
    pub bounce_weight: f64,
    pub bounce_normalizer: f64,
    pub shadow_attenuation: f64,
    pub shadow_epsilon: f64,
}

impl Tuning {
    /// Dark shadows with a wide occluder margin. This is the default.
    pub const HARD_SHADOWS: Tuning = Tuning {
        bounce_weight: 0.5,
        bounce_normalizer: 1.5,
        shadow_attenuation: 0.2,
        shadow_epsilon: 1.0,
    };

    /// Light shadows with a tight occluder margin.
    pub const SOFT_SHADOWS: Tuning = Tuning {
        bounce_weight: 0.4,
        bounce_normalizer: 1.4,
        shadow_attenuation: 0.7,
        shadow_epsilon: 0.1,
    };

    pub fn validate(&self) -> Result<(), Error> {
        let values = [
            self.bounce_weight, self.bounce_normalizer, self.shadow_attenuation, self.shadow_epsilon];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(Error::InvalidTuning {reason: format!("non-finite value in {:?}", self)});
        }
        if self.bounce_normalizer <= 0.0 {
            return Err(Error::InvalidTuning {
                reason: format!("bounce normalizer {} must be positive", self.bounce_normalizer)
            });
        }
        if self.bounce_weight < 0.0 || self.shadow_attenuation < 0.0 || self.shadow_epsilon < 0.0 {
            return Err(Error::InvalidTuning {
                reason: format!("weights and epsilon must be non-negative in {:?}", self)
            });
        }
        Ok(())
    }
}

impl Default for Tuning {
    fn default() -> Tuning {
        Tuning::HARD_SHADOWS
    }
}

/// Everything a render reads. Immutable for the duration of a frame; per-frame changes produce
/// a new value through `with_light_position` or `with_camera_position`.
#[derive(Clone, Debug)]
pub struct Scene {
    pub spheres: SphereList,
    pub light: PointLight,
    pub camera_position: core::Vec,
    pub ambient_intensity: f64,
    pub bounce_limit: usize,
    pub shadows: bool,
    pub tuning: Tuning,
}

impl Scene {
    pub fn new(
        spheres: SphereList,
        light: PointLight,
        camera_position: core::Vec,
        ambient_intensity: f64,
        bounce_limit: usize,
        shadows: bool,
        tuning: Tuning) -> Result<Scene, Error>
    {
        tuning.validate()?;
        if !light.position.is_finite() || !light.color.is_finite() {
            return Err(Error::config("light position and color must be finite"));
        }
        if !camera_position.is_finite() {
            return Err(Error::config("camera position must be finite"));
        }
        if !ambient_intensity.is_finite() || ambient_intensity < 0.0 {
            return Err(Error::config(
                format!("ambient intensity {} must be finite and non-negative", ambient_intensity)));
        }
        if spheres.is_empty() {
            warn!("scene has no spheres; every ray will miss");
        }
        trace!(
            spheres = spheres.len(),
            bounce_limit = bounce_limit,
            shadows = shadows,
            "built scene");

        Ok(Scene {
            spheres: spheres,
            light: light,
            camera_position: camera_position,
            ambient_intensity: ambient_intensity,
            bounce_limit: bounce_limit,
            shadows: shadows,
            tuning: tuning,
        })
    }

    pub fn with_light_position(&self, position: core::Vec) -> Scene {
        let mut scene = self.clone();
        scene.light.position = position;
        scene
    }

    pub fn with_camera_position(&self, position: core::Vec) -> Scene {
        let mut scene = self.clone();
        scene.camera_position = position;
        scene
    }

    /// Whether another sphere blocks the light from reaching `point`.
    ///
    /// The shadow ray starts at the light and heads toward `point`. The sphere at `exclude` is
    /// skipped since `point` lies on its surface and would always block itself.
    pub fn is_occluded(&self, point: &core::Vec, exclude: usize) -> bool {
        let to_point = *point - self.light.position;
        if to_point.is_nearly_zero() {
            return false;
        }
        let dist_to_point = to_point.magnitude();
        let shadow_ray = core::Ray::new(self.light.position, to_point / dist_to_point);

        // Any blocker counts, not only the nearest hit along the shadow ray.
        self.spheres.iter().enumerate()
            .filter(|&(index, _)| index != exclude)
            .any(|(_, sphere)| {
                match sphere.intersect(&shadow_ray) {
                    Intersection::Hit {dist, ..} =>
                        dist_to_point - dist > self.tuning.shadow_epsilon,
                    Intersection::NoHit => false,
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Sphere;
    use crate::material::Material;

    fn matte_sphere(center: core::Vec, radius: f64) -> Sphere {
        Sphere::new(center, radius, Material::matte(0.7, core::Vec::splat(0.5)).unwrap()).unwrap()
    }

    fn scene_with(spheres: std::vec::Vec<Sphere>, tuning: Tuning) -> Scene {
        Scene::new(
            SphereList::new(spheres),
            PointLight::new(core::Vec::new(0.0, 10.0, 0.0), core::Vec::one()),
            core::Vec::new(0.0, 0.0, 5.0),
            1.0, 1, true, tuning).unwrap()
    }

    #[test]
    fn presets_pass_validation() {
        assert!(Tuning::HARD_SHADOWS.validate().is_ok());
        assert!(Tuning::SOFT_SHADOWS.validate().is_ok());
        assert_eq!(Tuning::default(), Tuning::HARD_SHADOWS);
    }

    #[test]
    fn rejects_zero_normalizer() {
        let tuning = Tuning {bounce_normalizer: 0.0, ..Tuning::HARD_SHADOWS};
        assert!(matches!(tuning.validate(), Err(Error::InvalidTuning {..})));
    }

    #[test]
    fn rejects_negative_ambient() {
        let result = Scene::new(
            SphereList::default(),
            PointLight::new(core::Vec::zero(), core::Vec::one()),
            core::Vec::zero(), -1.0, 1, false, Tuning::default());
        assert!(result.is_err());
    }

    #[test]
    fn blocker_between_light_and_point_occludes() {
        let scene = scene_with(
            vec![matte_sphere(core::Vec::zero(), 1.0), matte_sphere(core::Vec::new(0.0, 5.0, 0.0), 1.0)],
            Tuning::HARD_SHADOWS);
        let top_of_floor = core::Vec::new(0.0, 1.0, 0.0);
        assert!(scene.is_occluded(&top_of_floor, 0));
    }

    #[test]
    fn point_never_shadows_itself() {
        let scene = scene_with(vec![matte_sphere(core::Vec::zero(), 1.0)], Tuning::SOFT_SHADOWS);
        // The far side of the sphere is blocked by the sphere's own near side, but the sphere
        // is excluded.
        let bottom = core::Vec::new(0.0, -1.0, 0.0);
        assert!(!scene.is_occluded(&bottom, 0));
        assert!(scene.is_occluded(&bottom, usize::MAX));
    }

    #[test]
    fn blocker_within_epsilon_is_ignored() {
        // The blocker's near surface is 0.5 in front of the point: inside the hard-shadow margin
        // of 1.0 but outside the soft-shadow margin of 0.1.
        let spheres = vec![
            matte_sphere(core::Vec::zero(), 1.0),
            matte_sphere(core::Vec::new(0.0, 1.3, 0.0), 0.2)];
        let point = core::Vec::new(0.0, 1.0, 0.0);
        assert!(!scene_with(spheres.clone(), Tuning::HARD_SHADOWS).is_occluded(&point, 0));
        assert!(scene_with(spheres, Tuning::SOFT_SHADOWS).is_occluded(&point, 0));
    }

    #[test]
    fn with_light_position_leaves_original_untouched() {
        let scene = scene_with(vec![], Tuning::default());
        let moved = scene.with_light_position(core::Vec::new(3.0, 5.0, 5.0));
        assert_eq!(moved.light.position, core::Vec::new(3.0, 5.0, 5.0));
        assert_eq!(scene.light.position, core::Vec::new(0.0, 10.0, 0.0));
    }

    #[test]
    fn with_camera_position_leaves_original_untouched() {
        let scene = scene_with(vec![], Tuning::default());
        let moved = scene.with_camera_position(core::Vec::new(0.0, 1.0, 4.0));
        assert_eq!(moved.camera_position, core::Vec::new(0.0, 1.0, 4.0));
        assert_eq!(moved.light, scene.light);
        assert_ne!(scene.camera_position, moved.camera_position);
    }
}

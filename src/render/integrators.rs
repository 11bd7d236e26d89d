use crate::core;
use crate::geom;
use crate::material::phong;
use crate::scene::Scene;

// Sums the light reaching the eye by way of a given ray.
// Integrators only read the scene; one instance serves every worker thread.
pub trait Integrator : Sync + Send {
    fn integrate(&self, initial_ray: &core::Ray, scene: &Scene) -> core::Vec;
}

/// Flat material color of the nearest hit, black on a miss. Useful for checking scene layout.
pub struct DisplayColorIntegrator {
}

impl DisplayColorIntegrator {
    pub fn new() -> DisplayColorIntegrator {
        DisplayColorIntegrator {}
    }
}

impl Integrator for DisplayColorIntegrator {
    fn integrate(&self, initial_ray: &core::Ray, scene: &Scene) -> core::Vec {
        match scene.spheres.intersect(initial_ray) {
            geom::Intersection::Hit {sphere_index, ..} => {
                *scene.spheres[sphere_index].material().display_color()
            },
            geom::Intersection::NoHit => {
                core::Vec::zero()
            }
        }
    }
}

/// The distance to push the origin of each reflected ray along its direction, so that rounding
/// cannot make it hit the surface it leaves.
const RAY_PUSH_DIST: f64 = 1.0e-6;

/// Why a path stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    Miss,
    BounceLimitReached,
}

#[derive(Clone, Copy, Debug)]
pub struct PathTrace {
    pub color: core::Vec,
    /// Number of shading steps performed.
    pub bounces: usize,
    pub termination: Termination,
}

/// Bounded mirror-reflection tracer with Phong shading at every hit.
pub struct WhittedIntegrator {
}

impl WhittedIntegrator {
    pub fn new() -> WhittedIntegrator {
        WhittedIntegrator {}
    }

    /// Follows `initial_ray` through at most `scene.bounce_limit` hits.
    ///
    /// Each hit is shaded and folded into the running color with the scene's damping constants.
    /// Only the first hit is shadow tested; an occluded first hit attenuates the color gathered
    /// so far.
    pub fn trace(&self, initial_ray: &core::Ray, scene: &Scene) -> PathTrace {
        let tuning = &scene.tuning;
        let mut color = core::Vec::zero();

        let length = initial_ray.direction.magnitude();
        if !(length > 0.0 && length.is_finite()) {
            return PathTrace {color: color, bounces: 0, termination: Termination::Miss};
        }
        let mut current_ray = core::Ray::new(
                initial_ray.origin, initial_ray.direction / length);

        for depth in 0..scene.bounce_limit {
            let (position, normal, sphere_index) = match scene.spheres.intersect(&current_ray) {
                geom::Intersection::Hit {position, normal, sphere_index, ..} => {
                    (position, normal, sphere_index)
                },
                geom::Intersection::NoHit => {
                    return PathTrace {
                        color: color,
                        bounces: depth,
                        termination: Termination::Miss
                    };
                }
            };

            let material = scene.spheres[sphere_index].material();
            let incident = scene.light.incident(&position);
            let contribution = phong::shade(
                    material, &incident, &normal, &-current_ray.direction,
                    &scene.light.color, scene.ambient_intensity);

            color += contribution * tuning.bounce_weight;
            color /= tuning.bounce_normalizer;

            if depth == 0 && scene.shadows && scene.is_occluded(&position, sphere_index) {
                color *= tuning.shadow_attenuation;
            }

            current_ray = reflect_ray(&current_ray, &position, &normal);
        }

        PathTrace {
            color: color,
            bounces: scene.bounce_limit,
            termination: Termination::BounceLimitReached
        }
    }
}

impl Integrator for WhittedIntegrator {
    fn integrate(&self, initial_ray: &core::Ray, scene: &Scene) -> core::Vec {
        self.trace(initial_ray, scene).color
    }
}

/// Mirror reflection of `ray` off a surface at `position` with unit `normal`. The new ray starts
/// just off the surface and has a unit direction.
pub fn reflect_ray(ray: &core::Ray, position: &core::Vec, normal: &core::Vec) -> core::Ray {
    let outgoing = ray.direction.reflect(normal).normalized();
    core::Ray::new(*position + outgoing * RAY_PUSH_DIST, outgoing)
}

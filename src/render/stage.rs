use crate::core;
use crate::error::Error;
use crate::render::film;
use crate::render::integrators;
use crate::scene::Scene;

use rayon::prelude::*;
use tracing::debug;

/// Renders frames of one scene. Holds the sample buffer between frames so repeated traces do
/// not reallocate it.
pub struct Stage {
    scene: Scene,
    samples_per_pixel: usize,
    seed: u64,
    sample_storage: std::vec::Vec<film::FilmSample>
}

impl Stage {
    pub fn new(scene: Scene) -> Stage {
        Stage {
            scene: scene,
            samples_per_pixel: 1,
            seed: 0,
            sample_storage: vec![]
        }
    }

    pub fn with_sampling(mut self, samples_per_pixel: usize, seed: u64) -> Stage {
        self.samples_per_pixel = samples_per_pixel.max(1);
        self.seed = seed;
        self
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Pinhole camera at the scene's camera position, matched to the film's aspect ratio.
    pub fn camera(&self, fov_y: f64, film: &film::Film) -> core::Camera {
        core::Camera::new(self.scene.camera_position, fov_y, film.aspect_ratio())
    }

    /// Traces every sample of `film` in parallel and replaces the film contents with the result.
    pub fn trace(&mut self,
        camera: &core::Camera,
        integrator: &dyn integrators::Integrator,
        film: &mut film::Film)
    {
        film.compute_sample_points(&mut self.sample_storage, self.samples_per_pixel, self.seed);
        let scene = &self.scene;
        self.sample_storage.par_iter_mut().for_each(|sample| {
            let ray = camera.compute_ray(sample.s, sample.t);
            sample.color = integrator.integrate(&ray, scene);
        });
        film.report_samples(&self.sample_storage);

        debug!(
            width = film.width,
            height = film.height,
            samples = self.sample_storage.len(),
            "traced frame");
    }

    /// Traces one caller-built ray. Rays with a zero or non-finite direction are rejected.
    pub fn trace_ray(&self, integrator: &dyn integrators::Integrator, ray: &core::Ray)
        -> Result<core::Vec, Error>
    {
        let ray = core::Ray::try_new(ray.origin, ray.direction)?;
        Ok(integrator.integrate(&ray, &self.scene))
    }
}

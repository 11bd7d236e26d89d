use crate::core;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

#[derive(Clone, Debug)]
pub struct FilmSample {
    pub color: core::Vec,
    pub col: usize,
    pub row: usize,
    // Window position of the sample, in [-1, 1]. (-1, -1) is the lower-left corner.
    pub s: f64,
    pub t: f64,
}

impl FilmSample {
    pub fn zero() -> FilmSample {
        FilmSample {color: core::Vec::zero(), col: 0, row: 0, s: 0.0, t: 0.0}
    }
}

#[derive(Clone, Debug)]
pub struct FilmPixel {
    pub accum: core::Vec,
    pub weight: f64
}

impl FilmPixel {
    pub fn zero() -> FilmPixel {
        FilmPixel {accum: core::Vec::zero(), weight: 0.0}
    }

    pub fn color(&self) -> core::Vec {
        if self.weight > 0.0 {
            self.accum / self.weight
        }
        else {
            core::Vec::zero()
        }
    }
}

/// Accumulation buffer. Row 0 is the bottom row of the image.
pub struct Film {
    pub width: usize,
    pub height: usize,
    pub pixels: std::vec::Vec<FilmPixel>
}

impl Film {
    pub fn new(width: usize, height: usize) -> Film {
        Film {
            width: width,
            height: height,
            pixels: vec![FilmPixel::zero(); width * height]
        }
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    pub fn clear(&mut self) {
        for pixel in self.pixels.iter_mut() {
            *pixel = FilmPixel::zero();
        }
    }

    pub fn pixel(&self, col: usize, row: usize) -> core::Vec {
        self.pixels[core::index(row, col, self.width)].color()
    }

    /// Fills `samples` with `samples_per_pixel` window positions for every pixel.
    ///
    /// A single sample sits at the pixel center. More samples are jittered within the pixel by
    /// an RNG seeded from `seed` and the pixel index, so the same seed always gives the same
    /// positions no matter how the work is scheduled.
    pub fn compute_sample_points(&self, samples: &mut std::vec::Vec<FilmSample>,
        samples_per_pixel: usize, seed: u64)
    {
        let spp = samples_per_pixel.max(1);
        let width = self.width;
        let width_f = self.width as f64;
        let height_f = self.height as f64;

        samples.clear();
        samples.resize(self.width * self.height * spp, FilmSample::zero());
        samples.par_chunks_mut(spp).enumerate().for_each(|(i, pixel_samples)| {
            let (row, col) = core::row_col(i, width);
            let mut rng = SmallRng::seed_from_u64(
                    seed ^ (i as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));

            for sample in pixel_samples.iter_mut() {
                let (jitter_u, jitter_v) = if spp == 1 {
                    (0.5, 0.5)
                }
                else {
                    (rng.gen::<f64>(), rng.gen::<f64>())
                };
                sample.color = core::Vec::zero();
                sample.col = col;
                sample.row = row;
                sample.s = core::lerp(-1.0, 1.0, (col as f64 + jitter_u) / width_f);
                sample.t = core::lerp(-1.0, 1.0, (row as f64 + jitter_v) / height_f);
            }
        });
    }

    /// Replaces the film contents with the box-filtered average of `samples`.
    pub fn report_samples(&mut self, samples: &[FilmSample]) {
        self.clear();
        for sample in samples {
            let pixel = &mut self.pixels[core::index(sample.row, sample.col, self.width)];
            pixel.accum += sample.color;
            pixel.weight += 1.0;
        }
    }
}

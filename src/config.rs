use serde::Deserialize;
use std::path::Path;

use crate::core::{Vec3, DEFAULT_FOV_Y_DEGREES};
use crate::error::Error;
use crate::geom::{Sphere, SphereList};
use crate::material::{Material, PointLight};
use crate::render::{DisplayColorIntegrator, Integrator, WhittedIntegrator};
use crate::scene::presets::{self, Mode};
use crate::scene::{Scene, Tuning};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderFrameConfig {
    pub width: u32,
    pub height: u32,
    pub output_path: String,
    #[serde(default = "default_samples_per_pixel")]
    pub samples_per_pixel: u32,
    #[serde(default)]
    pub seed: u64,
    #[serde(default)]
    pub integrator: IntegratorKind,
    #[serde(default = "default_fov_y")]
    pub fov_y: f64,
    #[serde(default)]
    pub scene: Option<SceneConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderBatchConfig {
    pub frames: Vec<RenderFrameConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum IncomingConfig {
    Single(RenderFrameConfig),
    Batch(RenderBatchConfig),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IntegratorKind {
    #[default]
    Whitted,
    DisplayColor,
}

/// Scene description. With a `preset` the named scene is the starting point and every other
/// field present overrides it; without one the scene is built from `spheres` alone, and an
/// empty list renders black.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneConfig {
    pub preset: Option<String>,
    pub mode: Option<String>,
    #[serde(default)]
    pub spheres: Vec<SphereConfig>,
    pub light: Option<LightConfig>,
    pub camera_position: Option<[f64; 3]>,
    pub ambient_intensity: Option<f64>,
    pub bounce_limit: Option<usize>,
    pub shadows: Option<bool>,
    pub tuning: Option<TuningConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SphereConfig {
    pub center: [f64; 3],
    pub radius: f64,
    pub material: MaterialConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialConfig {
    pub diffuse: f64,
    pub specular: f64,
    pub shininess: f64,
    pub color: [f64; 3],
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightConfig {
    pub position: [f64; 3],
    #[serde(default = "default_light_color")]
    pub color: [f64; 3],
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TuningConfig {
    Preset(String),
    #[serde(rename_all = "camelCase")]
    Explicit {
        bounce_weight: f64,
        bounce_normalizer: f64,
        shadow_attenuation: f64,
        shadow_epsilon: f64,
    },
}

const fn default_samples_per_pixel() -> u32 {
    1
}

const fn default_fov_y() -> f64 {
    DEFAULT_FOV_Y_DEGREES
}

const fn default_light_color() -> [f64; 3] {
    [0.8, 0.8, 0.8]
}

/// Reads a single frame or a `{"frames": [...]}` batch.
pub fn parse(raw: &str) -> Result<Vec<RenderFrameConfig>, Error> {
    let frames = match serde_json::from_str::<IncomingConfig>(raw)? {
        IncomingConfig::Single(frame) => vec![frame],
        IncomingConfig::Batch(batch) => batch.frames,
    };
    if frames.is_empty() {
        return Err(Error::config("frames array must not be empty"));
    }
    Ok(frames)
}

pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<RenderFrameConfig>, Error> {
    let raw = std::fs::read_to_string(path)?;
    parse(&raw)
}

pub fn validate_config(config: &RenderFrameConfig) -> Result<(), Error> {
    if config.width == 0 || config.height == 0 {
        return Err(Error::config("width and height must be positive"));
    }
    if config.samples_per_pixel == 0 {
        return Err(Error::config("samplesPerPixel must be at least 1"));
    }
    if config.output_path.trim().is_empty() {
        return Err(Error::config("outputPath must be a non-empty path"));
    }
    if !config.fov_y.is_finite() || config.fov_y <= 0.0 || config.fov_y >= 180.0 {
        return Err(Error::config(format!("fovY {} must lie strictly between 0 and 180", config.fov_y)));
    }
    if let Some(scene) = &config.scene {
        if let Some(position) = scene.camera_position {
            if !is_finite_vec3(position) {
                return Err(Error::config("cameraPosition must contain finite values"));
            }
        }
        if let Some(light) = &scene.light {
            if !is_finite_vec3(light.position) || !is_finite_vec3(light.color) {
                return Err(Error::config("light vectors must contain finite values"));
            }
        }
    }
    Ok(())
}

impl RenderFrameConfig {
    /// 512x512 render of the showcase scene.
    pub fn showcase<S: Into<String>>(output_path: S) -> RenderFrameConfig {
        RenderFrameConfig {
            width: 512,
            height: 512,
            output_path: output_path.into(),
            samples_per_pixel: default_samples_per_pixel(),
            seed: 0,
            integrator: IntegratorKind::Whitted,
            fov_y: default_fov_y(),
            scene: None,
        }
    }

    pub fn build_scene(&self) -> Result<Scene, Error> {
        match &self.scene {
            Some(scene) => scene.build(),
            None => presets::showcase(Mode::Plain),
        }
    }

    pub fn build_integrator(&self) -> Box<dyn Integrator> {
        match self.integrator {
            IntegratorKind::Whitted => Box::new(WhittedIntegrator::new()),
            IntegratorKind::DisplayColor => Box::new(DisplayColorIntegrator::new()),
        }
    }
}

impl SceneConfig {
    pub fn build(&self) -> Result<Scene, Error> {
        let mode = match &self.mode {
            Some(name) => Mode::parse(name)
                .ok_or_else(|| Error::config(format!("unknown scene mode '{}'", name)))?,
            None => Mode::Plain,
        };
        let base = match &self.preset {
            Some(name) => Some(presets::by_name(name, mode)?),
            None => None,
        };

        let spheres = if self.spheres.is_empty() {
            match &base {
                Some(scene) => scene.spheres.clone(),
                None => SphereList::default(),
            }
        }
        else {
            let mut spheres = Vec::with_capacity(self.spheres.len());
            for sphere in &self.spheres {
                spheres.push(sphere.build()?);
            }
            SphereList::new(spheres)
        };

        let light = match &self.light {
            Some(light) => PointLight::new(Vec3::from(light.position), Vec3::from(light.color)),
            None => base.as_ref().map(|s| s.light).unwrap_or_else(|| PointLight::new(
                    Vec3::new(0.0, 5.0, 5.0), Vec3::from(default_light_color()))),
        };
        let camera_position = match self.camera_position {
            Some(position) => Vec3::from(position),
            None => base.as_ref().map(|s| s.camera_position)
                .unwrap_or_else(|| Vec3::new(0.0, 0.0, 3.2)),
        };
        let (mode_shadows, mode_bounces) = mode.settings();
        let tuning = match &self.tuning {
            Some(tuning) => tuning.build()?,
            None => base.as_ref().map(|s| s.tuning).unwrap_or_default(),
        };

        Scene::new(
            spheres,
            light,
            camera_position,
            self.ambient_intensity
                .or_else(|| base.as_ref().map(|s| s.ambient_intensity))
                .unwrap_or(1.0),
            self.bounce_limit.unwrap_or(mode_bounces),
            self.shadows.unwrap_or(mode_shadows),
            tuning)
    }
}

impl SphereConfig {
    pub fn build(&self) -> Result<Sphere, Error> {
        let m = &self.material;
        let material = Material::new(m.diffuse, m.specular, m.shininess, Vec3::from(m.color))?;
        Sphere::new(Vec3::from(self.center), self.radius, material)
    }
}

impl TuningConfig {
    pub fn build(&self) -> Result<Tuning, Error> {
        let tuning = match self {
            TuningConfig::Preset(name) => match name.to_ascii_lowercase().as_str() {
                "hardshadows" => Tuning::HARD_SHADOWS,
                "softshadows" => Tuning::SOFT_SHADOWS,
                _ => return Err(Error::InvalidTuning {
                    reason: format!("unknown tuning preset '{}'", name)
                }),
            },
            TuningConfig::Explicit {
                bounce_weight, bounce_normalizer, shadow_attenuation, shadow_epsilon
            } => Tuning {
                bounce_weight: *bounce_weight,
                bounce_normalizer: *bounce_normalizer,
                shadow_attenuation: *shadow_attenuation,
                shadow_epsilon: *shadow_epsilon,
            },
        };
        tuning.validate()?;
        Ok(tuning)
    }
}

fn is_finite_vec3(value: [f64; 3]) -> bool {
    value.iter().all(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SINGLE: &str = r#"{
        "width": 64,
        "height": 48,
        "outputPath": "out/frame.png",
        "scene": {
            "spheres": [
                {
                    "center": [0, 0, 0],
                    "radius": 1,
                    "material": {"diffuse": 0.7, "specular": 3, "shininess": 15, "color": [0, 1, 0]}
                }
            ],
            "light": {"position": [0, 5, 5]},
            "cameraPosition": [0, 0, 3],
            "shadows": true,
            "tuning": "softShadows"
        }
    }"#;

    #[test]
    fn parses_single_frame_with_defaults() {
        let frames = parse(SINGLE).unwrap();
        assert_eq!(frames.len(), 1);
        let frame = &frames[0];
        assert_eq!(frame.samples_per_pixel, 1);
        assert_eq!(frame.integrator, IntegratorKind::Whitted);
        assert_eq!(frame.fov_y, DEFAULT_FOV_Y_DEGREES);
        assert!(validate_config(frame).is_ok());

        let scene = frame.build_scene().unwrap();
        assert_eq!(scene.spheres.len(), 1);
        assert!(scene.shadows);
        assert_eq!(scene.bounce_limit, 1);
        assert_eq!(scene.tuning, Tuning::SOFT_SHADOWS);
        assert_eq!(scene.light.color, Vec3::new(0.8, 0.8, 0.8));
    }

    #[test]
    fn parses_batch_of_preset_frames() {
        let raw = r#"{"frames": [
            {"width": 8, "height": 8, "outputPath": "a.exr",
             "scene": {"preset": "showcase", "mode": "shadowsAndReflections"}},
            {"width": 8, "height": 8, "outputPath": "b.png", "integrator": "displayColor",
             "scene": {"preset": "showcase", "light": {"position": [3, 5, 5]}, "bounceLimit": 3}}
        ]}"#;
        let frames = parse(raw).unwrap();
        assert_eq!(frames.len(), 2);

        let first = frames[0].build_scene().unwrap();
        assert!(first.shadows);
        assert_eq!(first.bounce_limit, 2);
        assert_eq!(first.spheres.len(), 4);

        let second = frames[1].build_scene().unwrap();
        assert_eq!(frames[1].integrator, IntegratorKind::DisplayColor);
        assert_eq!(second.light.position, Vec3::new(3.0, 5.0, 5.0));
        assert_eq!(second.bounce_limit, 3);
    }

    #[test]
    fn explicit_tuning_is_validated() {
        let ok = TuningConfig::Explicit {
            bounce_weight: 0.3, bounce_normalizer: 1.3, shadow_attenuation: 0.5, shadow_epsilon: 0.2
        };
        assert!(ok.build().is_ok());
        let bad = TuningConfig::Explicit {
            bounce_weight: 0.3, bounce_normalizer: 0.0, shadow_attenuation: 0.5, shadow_epsilon: 0.2
        };
        assert!(bad.build().is_err());
        assert!(TuningConfig::Preset("medium".to_string()).build().is_err());
    }

    #[test]
    fn rejects_zero_size_and_bad_fov() {
        let mut frame = RenderFrameConfig::showcase("x.png");
        assert!(validate_config(&frame).is_ok());
        frame.width = 0;
        assert!(validate_config(&frame).is_err());
        frame.width = 10;
        frame.fov_y = 180.0;
        assert!(validate_config(&frame).is_err());
    }

    #[test]
    fn rejects_non_positive_radius_in_config() {
        let raw = SINGLE.replace("\"radius\": 1", "\"radius\": -1");
        let frames = parse(&raw).unwrap();
        assert!(matches!(frames[0].build_scene(), Err(Error::InvalidSphere {..})));
    }

    #[test]
    fn scene_without_spheres_is_allowed() {
        let raw = r#"{"width": 4, "height": 4, "outputPath": "empty.png", "scene": {"spheres": []}}"#;
        let frames = parse(raw).unwrap();
        assert!(validate_config(&frames[0]).is_ok());
        let scene = frames[0].build_scene().unwrap();
        assert!(scene.spheres.is_empty());
        assert_eq!(scene.tuning, Tuning::HARD_SHADOWS);
    }

    #[test]
    fn rejects_empty_batch() {
        assert!(parse(r#"{"frames": []}"#).is_err());
    }

    #[test]
    fn rejects_unknown_mode() {
        let scene = SceneConfig {
            preset: Some("showcase".to_string()),
            mode: Some("wireframe".to_string()),
            ..SceneConfig::default()
        };
        assert!(scene.build().is_err());
    }
}

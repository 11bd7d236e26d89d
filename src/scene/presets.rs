use crate::core;
use crate::error::Error;
use crate::geom::{Sphere, SphereList};
use crate::material::{Material, PointLight};
use crate::scene::{Scene, Tuning};

const DIFFUSE: f64 = 0.7;
const SPECULAR: f64 = 3.0;

/// Shadow and reflection toggles offered by the showcase scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Plain,
    Shadows,
    Reflections,
    ShadowsAndReflections,
}

impl Mode {
    pub fn parse(value: &str) -> Option<Mode> {
        match value.to_ascii_lowercase().as_str() {
            "plain" => Some(Mode::Plain),
            "shadows" => Some(Mode::Shadows),
            "reflections" => Some(Mode::Reflections),
            "shadowsandreflections" => Some(Mode::ShadowsAndReflections),
            _ => None,
        }
    }

    /// `(shadows, bounce_limit)` for this mode.
    pub fn settings(self) -> (bool, usize) {
        match self {
            Mode::Plain => (false, 1),
            Mode::Shadows => (true, 1),
            Mode::Reflections => (false, 2),
            Mode::ShadowsAndReflections => (true, 2),
        }
    }
}

/// Two small glossy spheres in front of a large red one, all resting above a huge grey sphere
/// that acts as the floor.
pub fn showcase(mode: Mode) -> Result<Scene, Error> {
    let spheres = vec![
        Sphere::new(
            core::Vec::new(-1.2, 0.3, 1.7), 0.7,
            Material::new(DIFFUSE, SPECULAR, 15.0, core::Vec::new(0.0, 1.0, 0.0))?)?,
        Sphere::new(
            core::Vec::new(0.0, 1.0, -1.0), 2.0,
            Material::new(DIFFUSE, SPECULAR, 5.0, core::Vec::new(1.0, 0.0, 0.0))?)?,
        Sphere::new(
            core::Vec::new(1.2, 0.3, 1.7), 0.7,
            Material::new(DIFFUSE, SPECULAR, 100.0, core::Vec::new(0.0, 0.0, 1.0))?)?,
        Sphere::new(
            core::Vec::new(0.0, -11.0, 0.0), 10.0,
            Material::new(DIFFUSE, 0.0, 5.0, core::Vec::splat(0.5))?)?,
    ];

    let (shadows, bounce_limit) = mode.settings();
    Scene::new(
        SphereList::new(spheres),
        PointLight::new(core::Vec::new(0.0, 5.0, 5.0), core::Vec::splat(0.8)),
        core::Vec::new(0.0, 0.0, 3.2),
        1.0,
        bounce_limit,
        shadows,
        Tuning::HARD_SHADOWS)
}

pub fn by_name(name: &str, mode: Mode) -> Result<Scene, Error> {
    if name.eq_ignore_ascii_case("showcase") {
        showcase(mode)
    }
    else {
        Err(Error::config(format!("unknown scene preset '{}'", name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn showcase_builds_four_spheres() {
        let scene = showcase(Mode::Plain).unwrap();
        assert_eq!(scene.spheres.len(), 4);
        assert_eq!(scene.bounce_limit, 1);
        assert!(!scene.shadows);
    }

    #[test]
    fn modes_toggle_shadows_and_bounces() {
        let scene = showcase(Mode::ShadowsAndReflections).unwrap();
        assert!(scene.shadows);
        assert_eq!(scene.bounce_limit, 2);
        assert_eq!(Mode::parse("Reflections"), Some(Mode::Reflections));
        assert_eq!(Mode::parse("mirror"), None);
    }

    #[test]
    fn unknown_preset_is_rejected() {
        assert!(by_name("aquarium", Mode::Plain).is_err());
        assert!(by_name("SHOWCASE", Mode::Plain).is_ok());
    }
}

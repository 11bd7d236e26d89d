use crate::core;
use crate::error::Error;

/// Phong surface description shared by every hit on a sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Diffuse coefficient (k_d).
    pub diffuse: f64,
    /// Specular coefficient (k_s).
    pub specular: f64,
    /// Specular exponent.
    pub shininess: f64,
    /// Base color, each channel in [0, 1].
    pub color: core::Vec,
}

impl Material {
    pub fn new(diffuse: f64, specular: f64, shininess: f64, color: core::Vec)
        -> Result<Material, Error>
    {
        if !diffuse.is_finite() || diffuse < 0.0 {
            return Err(Error::InvalidMaterial {
                reason: format!("diffuse coefficient {} must be finite and non-negative", diffuse)
            });
        }
        if !specular.is_finite() || specular < 0.0 {
            return Err(Error::InvalidMaterial {
                reason: format!("specular coefficient {} must be finite and non-negative", specular)
            });
        }
        if !shininess.is_finite() || shininess <= 0.0 {
            return Err(Error::InvalidMaterial {
                reason: format!("shininess {} must be finite and positive", shininess)
            });
        }
        let in_unit = |c: f64| c >= 0.0 && c <= 1.0;
        if !(in_unit(color.x) && in_unit(color.y) && in_unit(color.z)) {
            return Err(Error::InvalidMaterial {
                reason: format!("color {} must have every channel in [0, 1]", color)
            });
        }

        Ok(Material {
            diffuse: diffuse,
            specular: specular,
            shininess: shininess,
            color: color,
        })
    }

    /// Matte surface with no specular lobe.
    pub fn matte(diffuse: f64, color: core::Vec) -> Result<Material, Error> {
        Material::new(diffuse, 0.0, 1.0, color)
    }

    pub fn display_color(&self) -> &core::Vec {
        &self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_glossy_material() {
        let m = Material::new(0.7, 3.0, 15.0, core::Vec::new(0.0, 1.0, 0.0));
        assert!(m.is_ok());
    }

    #[test]
    fn rejects_negative_coefficients() {
        let color = core::Vec::splat(0.5);
        assert!(Material::new(-0.1, 1.0, 5.0, color).is_err());
        assert!(Material::new(0.7, -1.0, 5.0, color).is_err());
    }

    #[test]
    fn rejects_non_positive_shininess() {
        assert!(Material::new(0.7, 1.0, 0.0, core::Vec::splat(0.5)).is_err());
    }

    #[test]
    fn rejects_out_of_range_color() {
        let result = Material::new(0.7, 1.0, 5.0, core::Vec::new(1.2, 0.0, 0.0));
        assert!(matches!(result, Err(Error::InvalidMaterial {..})));
    }
}

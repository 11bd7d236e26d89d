use crate::core;
use crate::material::Material;

/// Local illumination at a surface point.
///
/// `incident` points from the light toward the surface and `view` from the surface toward the
/// viewer; both, and `normal`, are expected to be unit length. The result is not clamped.
pub fn shade(
    material: &Material,
    incident: &core::Vec,
    normal: &core::Vec,
    view: &core::Vec,
    light_color: &core::Vec,
    ambient_intensity: f64) -> core::Vec
{
    let ambient = material.color * ambient_intensity;

    let n_dot_l = f64::max(0.0, normal.dot(&-*incident));
    let diffuse = light_color.comp_mult(&material.color) * (material.diffuse * n_dot_l);

    // Mirror of the to-light direction, negated, so it leaves the surface on the viewer's side.
    let to_light = -*incident;
    let reflected = (-to_light.reflect(normal)).normalized();
    let r_dot_v = f64::max(0.0, reflected.dot(view));
    let specular = *light_color * (material.specular * r_dot_v.powf(material.shininess));

    diffuse + specular + ambient
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Material {
        Material::new(0.7, 3.0, 15.0, core::Vec::new(1.0, 0.0, 0.0)).unwrap()
    }

    fn close(a: &core::Vec, b: &core::Vec) -> bool {
        (*a - *b).magnitude() < 1e-9
    }

    #[test]
    fn head_on_light_gives_full_diffuse_and_specular() {
        let m = red();
        let normal = core::Vec::new(0.0, 0.0, 1.0);
        let incident = core::Vec::new(0.0, 0.0, -1.0);
        let view = normal;
        let white = core::Vec::one();
        let c = shade(&m, &incident, &normal, &view, &white, 0.0);
        // diffuse 0.7 on red, specular 3.0 on every channel
        assert!(close(&c, &core::Vec::new(3.7, 3.0, 3.0)));
    }

    #[test]
    fn light_behind_surface_leaves_only_ambient() {
        let m = red();
        let normal = core::Vec::new(0.0, 0.0, 1.0);
        let incident = core::Vec::new(0.0, 0.0, 1.0);
        let c = shade(&m, &incident, &normal, &normal, &core::Vec::one(), 0.25);
        assert!(close(&c, &core::Vec::new(0.25, 0.0, 0.0)));
    }

    #[test]
    fn highlight_sits_on_mirror_direction() {
        let m = Material::new(0.0, 1.0, 50.0, core::Vec::zero()).unwrap();
        let normal = core::Vec::new(0.0, 1.0, 0.0);
        let incident = core::Vec::new(1.0, -1.0, 0.0).normalized();
        let mirror = core::Vec::new(1.0, 1.0, 0.0).normalized();
        let opposite = core::Vec::new(-1.0, 1.0, 0.0).normalized();
        let white = core::Vec::one();

        let on_lobe = shade(&m, &incident, &normal, &mirror, &white, 0.0);
        let off_lobe = shade(&m, &incident, &normal, &opposite, &white, 0.0);
        assert!(close(&on_lobe, &core::Vec::one()));
        assert!(off_lobe.max_component() < 1e-9);
    }

    #[test]
    fn result_is_not_clamped() {
        let m = red();
        let normal = core::Vec::new(0.0, 0.0, 1.0);
        let incident = -normal;
        let c = shade(&m, &incident, &normal, &normal, &core::Vec::one(), 1.0);
        assert!(c.x > 1.0);
    }
}

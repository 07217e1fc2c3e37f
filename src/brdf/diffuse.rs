use super::fresnel::{f_schlick, schlick_weight};
use crate::utils::{lerp, saturate, Real, Rgb, Vec3, FRAC_1_PI};
use serde::Deserialize;

pub fn fd_lambert() -> Real {
    FRAC_1_PI
}

// Disney diffuse with retro-reflection and an energy normalization factor that
// darkens rough surfaces
pub fn fd_disney(n_dot_v: Real, n_dot_l: Real, l_dot_h: Real, roughness: Real) -> Real {
    let roughness = saturate(roughness);
    let energy_bias = lerp(0.0, 0.5, roughness);
    let energy_factor = lerp(1.0, 1.0 / 1.51, roughness);
    let fd90 = energy_bias + 2.0 * l_dot_h * l_dot_h * roughness;

    let light_scatter = lerp(1.0, fd90, schlick_weight(n_dot_l));
    let view_scatter = lerp(1.0, fd90, schlick_weight(n_dot_v));

    light_scatter * view_scatter * energy_factor * FRAC_1_PI
}

// Burley diffuse as used by Filament
pub fn fd_burley(n_dot_v: Real, n_dot_l: Real, l_dot_h: Real, roughness: Real) -> Real {
    let roughness = saturate(roughness);
    let f90 = 0.5 + 2.0 * roughness * l_dot_h * l_dot_h;

    let light_scatter = f_schlick(n_dot_l, 1.0, f90);
    let view_scatter = f_schlick(n_dot_v, 1.0, f90);

    light_scatter * view_scatter * FRAC_1_PI
}

pub fn simple_lambertian(light_dir: &Vec3, normal: &Vec3, diffuse_color: &Rgb) -> Rgb {
    diffuse_color * light_dir.dot(normal).max(0.0)
}

/// Diffuse reflectance model. All variants are on the same `1/π` scale, so the
/// result multiplies the albedo directly.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffuseModel {
    Lambertian,
    Disney,
    #[default]
    Burley,
}

impl DiffuseModel {
    pub fn evaluate(self, n_dot_v: Real, n_dot_l: Real, l_dot_h: Real, roughness: Real) -> Real {
        match self {
            DiffuseModel::Lambertian => fd_lambert(),
            DiffuseModel::Disney => fd_disney(n_dot_v, n_dot_l, l_dot_h, roughness),
            DiffuseModel::Burley => fd_burley(n_dot_v, n_dot_l, l_dot_h, roughness),
        }
    }
}

use crate::utils::{lerp_rgb, pow5, saturate, Real, Rgb};

/// Normal-incidence reflectance shared by all dielectrics.
pub const DIELECTRIC_F0: Real = 0.04;

// Schlick's grazing weight (1 - cos_theta)^5
pub fn schlick_weight(cos_theta: Real) -> Real {
    pow5(1.0 - saturate(cos_theta))
}

pub fn f_schlick(cos_theta: Real, f0: Real, f90: Real) -> Real {
    f0 + (f90 - f0) * schlick_weight(cos_theta)
}

// Fresnel-Schlick equation with f90 = 1
pub fn f_schlick_rgb(cos_theta: Real, f0: &Rgb) -> Rgb {
    f0 + (Rgb::repeat(1.0) - f0) * schlick_weight(cos_theta)
}

/// Reflectance at normal incidence. Metalness only enters the model here.
pub fn f0_from_metallic(base_color: &Rgb, metallic: Real) -> Rgb {
    lerp_rgb(&Rgb::repeat(DIELECTRIC_F0), base_color, saturate(metallic))
}

use super::{AlphaMode, ShadingConfig, SurfaceSample};
use crate::brdf::{f0_from_metallic, f_schlick_rgb};
use crate::core::Material;
use crate::lights::LightUniforms;
use crate::utils::{
    clamp_non_negative, direction_between, half_vector, normalize_or, saturate, Real, Rgb, Rgba,
    Vec3,
};

const LINEAR_ATTENUATION: Real = 0.35;
const QUADRATIC_ATTENUATION: Real = 0.84;

// Keeps n_dot_v off zero for the direction based entry point
const N_DOT_V_BIAS: Real = 1e-5;

/// Clamped cosines between the shading directions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cosines {
    pub n_dot_l: Real,
    pub n_dot_v: Real,
    pub n_dot_h: Real,
    pub l_dot_h: Real,
}

impl Cosines {
    pub fn new(normal: &Vec3, view_dir: &Vec3, light_dir: &Vec3, half_vec: &Vec3) -> Self {
        Self {
            n_dot_l: saturate(normal.dot(light_dir)),
            n_dot_v: saturate(normal.dot(view_dir)),
            n_dot_h: saturate(normal.dot(half_vec)),
            l_dot_h: saturate(light_dir.dot(half_vec)),
        }
    }
}

/// Diffuse and specular reflectance for one light, before radiance is applied.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DirectTerms {
    pub diffuse: Rgb,
    pub specular: Rgb,
}

impl DirectTerms {
    pub fn total(&self) -> Rgb {
        self.diffuse + self.specular
    }
}

pub fn attenuation(distance: Real) -> Real {
    let distance = distance.max(0.0);
    1.0 / (1.0 + LINEAR_ATTENUATION * distance + QUADRATIC_ATTENUATION * distance * distance)
}

pub fn direct_terms(
    config: &ShadingConfig,
    normal: &Vec3,
    half_vec: &Vec3,
    cosines: &Cosines,
    diffuse_color: &Rgb,
    f0: &Rgb,
    roughness: Real,
) -> DirectTerms {
    let d = config.distribution.evaluate(normal, half_vec, cosines.n_dot_h, roughness);
    let v = config.geometry.evaluate(cosines.n_dot_v, cosines.n_dot_l, roughness);
    let f = f_schlick_rgb(cosines.l_dot_h, f0);

    let fd = config.diffuse.evaluate(cosines.n_dot_v, cosines.n_dot_l, cosines.l_dot_h, roughness);

    DirectTerms {
        diffuse: diffuse_color * fd,
        specular: clamp_non_negative(&(f * (d * v))),
    }
}

/// Outgoing radiance at a surface point lit by a single light.
///
/// View and light directions are built from the positions, so nothing has to be
/// normalized up front except the surface normal. Shadowing only darkens the
/// direct term; the ambient term is `ambient * color * ambient_occlusion`.
pub fn shade(
    config: &ShadingConfig,
    surface: &SurfaceSample,
    material: &Material,
    uniforms: &LightUniforms,
) -> Rgba {
    let normal = surface.normal;
    debug_assert!(
        (normal.norm_squared() - 1.0).abs() < 1e-3,
        "surface normal must be unit length, got {:?}",
        normal
    );

    let color = material.color;
    let f0 = f0_from_metallic(&color, material.metalness);

    let view_dir = direction_between(&surface.position, &uniforms.view_position, &normal);
    let light_dir = direction_between(&surface.position, &uniforms.light.position, &normal);
    let half_vec = half_vector(&view_dir, &light_dir, &normal);

    let light_attenuation = if config.attenuate {
        let distance2 = (uniforms.light.position - surface.position).norm_squared();
        attenuation(distance2.sqrt())
    } else {
        1.0
    };

    let cosines = Cosines::new(&normal, &view_dir, &light_dir, &half_vec);
    let terms = direct_terms(config, &normal, &half_vec, &cosines, &color, &f0, material.roughness);

    let mut light_out = terms
        .total()
        .component_mul(&uniforms.light.get_radiance(light_attenuation));
    if config.cosine_weighted {
        light_out *= cosines.n_dot_l;
    }

    let lit = 1.0 - saturate(surface.shadow);
    let ambient = uniforms.ambient.get_color().component_mul(&color)
        * saturate(material.ambient_occlusion);

    let radiance = clamp_non_negative(&(light_out * lit + ambient + material.emission()));
    let alpha = match config.alpha {
        AlphaMode::Opaque => 1.0,
        AlphaMode::PassThrough => saturate(material.opacity),
    };

    Rgba::new(radiance.x, radiance.y, radiance.z, alpha)
}

/// Reflected radiance fraction for explicit directions, weighted by `n_dot_l`.
///
/// Unlike [`shade`] this takes directions rather than positions and uses
/// `|n·v|` biased away from zero, so back-facing views still shade.
pub fn evaluate_brdf(
    config: &ShadingConfig,
    view_dir: &Vec3,
    light_dir: &Vec3,
    normal: &Vec3,
    roughness: Real,
    f0: &Rgb,
    diffuse_color: &Rgb,
) -> Rgb {
    debug_assert!(
        (normal.norm_squared() - 1.0).abs() < 1e-3,
        "normal must be unit length, got {:?}",
        normal
    );

    let view_dir = normalize_or(view_dir, normal);
    let light_dir = normalize_or(light_dir, normal);
    let half_vec = half_vector(&view_dir, &light_dir, normal);

    let cosines = Cosines {
        n_dot_v: (normal.dot(&view_dir).abs() + N_DOT_V_BIAS).min(1.0),
        ..Cosines::new(normal, &view_dir, &light_dir, &half_vec)
    };
    let terms = direct_terms(config, normal, &half_vec, &cosines, diffuse_color, f0, roughness);

    terms.total() * cosines.n_dot_l
}

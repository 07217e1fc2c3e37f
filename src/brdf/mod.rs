mod diffuse;
mod distribution;
mod fresnel;
mod visibility;

pub use diffuse::{fd_burley, fd_disney, fd_lambert, simple_lambertian, DiffuseModel};
pub use distribution::{
    alpha_from_roughness, clamp_roughness, d_ggx, d_ggx_cross, DistributionModel, MIN_ALPHA,
    MIN_ROUGHNESS,
};
pub use fresnel::{f0_from_metallic, f_schlick, f_schlick_rgb, schlick_weight, DIELECTRIC_F0};
pub use visibility::{
    g_schlick_ggx, v_schlick_ggx, v_smith_ggx_correlated, v_smith_ggx_correlated_fast,
    GeometryModel, VISIBILITY_EPSILON,
};

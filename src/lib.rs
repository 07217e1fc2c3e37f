#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::too_many_arguments,
    clippy::wildcard_imports
)]

pub mod brdf;
mod core;
mod job;
mod lights;
mod shading;
pub mod utils;

pub use crate::core::Material;
pub use crate::job::{JobError, ShadingJob};
pub use crate::lights::{AmbientLight, LightUniforms, PointLight};
pub use crate::shading::{
    attenuation, direct_terms, evaluate_brdf, shade, shade_batch, AlphaMode, Cosines,
    DirectTerms, ShadingConfig, ShadingSample, SurfaceSample,
};
pub use crate::utils::{Real, Rgb, Rgba, Vec3};

mod batch;
mod config;
mod integrator;
mod sample;

pub use batch::shade_batch;
pub use config::{AlphaMode, ShadingConfig};
pub use integrator::{attenuation, direct_terms, evaluate_brdf, shade, Cosines, DirectTerms};
pub use sample::{ShadingSample, SurfaceSample};

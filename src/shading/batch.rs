use super::{ShadingConfig, ShadingSample};
use crate::utils::Rgba;
use rayon::prelude::*;

/// Shades independent samples in parallel. Output order matches `samples`.
pub fn shade_batch(config: &ShadingConfig, samples: &[ShadingSample]) -> Vec<Rgba> {
    samples
        .par_iter()
        .map(|sample| sample.shade(config))
        .collect()
}

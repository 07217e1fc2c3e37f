use crate::shading::{shade_batch, ShadingConfig, ShadingSample};
use crate::utils::{Real, Rgba};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use thiserror::Error;

// Normals further than this from unit length are renormalized on load
const NORMAL_LENGTH_TOLERANCE: Real = 1e-4;

#[derive(Debug, Error)]
pub enum JobError {
    #[error("unable to read shading job: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse shading job: {0}")]
    Json(#[from] serde_json::Error),
    #[error("sample {index} is invalid: {reason}")]
    InvalidSample { index: usize, reason: String },
}

/// A batch of samples shaded with one configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShadingJob {
    config: ShadingConfig,
    samples: Vec<ShadingSample>,
}

impl ShadingJob {
    pub fn new(config: ShadingConfig, samples: Vec<ShadingSample>) -> Result<Self, JobError> {
        let mut job = Self { config, samples };
        job.validate()?;
        Ok(job)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, JobError> {
        let job: Self = serde_json::from_reader(reader)?;
        Self::new(job.config, job.samples)
    }

    pub fn from_path(path: &Path) -> Result<Self, JobError> {
        log::info!("Loading shading job from {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn get_config(&self) -> &ShadingConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ShadingConfig) {
        self.config = config;
    }

    pub fn get_samples(&self) -> &[ShadingSample] {
        &self.samples
    }

    pub fn run(&self) -> Vec<Rgba> {
        shade_batch(&self.config, &self.samples)
    }

    fn validate(&mut self) -> Result<(), JobError> {
        for (index, sample) in self.samples.iter_mut().enumerate() {
            validate_sample(index, sample)?;
        }
        log::debug!(
            "Validated {} samples with {:?}",
            self.samples.len(),
            self.config
        );

        Ok(())
    }
}

fn invalid(index: usize, reason: String) -> JobError {
    JobError::InvalidSample { index, reason }
}

fn ensure_finite(index: usize, name: &str, values: &[Real]) -> Result<(), JobError> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(invalid(index, format!("{} must be finite, got {:?}", name, values)))
    }
}

fn clamp_to_range(index: usize, name: &str, value: &mut Real, min: Real, max: Real) {
    if *value < min || *value > max {
        let clamped = value.max(min).min(max);
        log::warn!(
            "Sample {}: {} = {} is outside [{}, {}], clamping to {}",
            index,
            name,
            value,
            min,
            max,
            clamped
        );
        *value = clamped;
    }
}

fn validate_sample(index: usize, sample: &mut ShadingSample) -> Result<(), JobError> {
    let ShadingSample {
        surface,
        material,
        light,
    } = sample;

    ensure_finite(index, "surface.position", surface.position.coords.as_slice())?;
    ensure_finite(index, "surface.normal", surface.normal.as_slice())?;
    ensure_finite(index, "material.color", material.color.as_slice())?;
    ensure_finite(index, "material.emissive", material.emissive.as_slice())?;
    ensure_finite(index, "light.light.position", light.light.position.coords.as_slice())?;
    ensure_finite(index, "light.light.color", light.light.color.as_slice())?;
    ensure_finite(index, "light.ambient.color", light.ambient.color.as_slice())?;
    ensure_finite(index, "light.view_position", light.view_position.coords.as_slice())?;
    ensure_finite(index, "surface.shadow", &[surface.shadow])?;
    ensure_finite(index, "light.light.power", &[light.light.power])?;
    for (name, value) in material.scalars().iter() {
        ensure_finite(index, name, &[*value])?;
    }

    let length = surface.normal.norm();
    if length == 0.0 {
        return Err(invalid(index, "surface.normal has zero length".to_string()));
    }
    if (length - 1.0).abs() > NORMAL_LENGTH_TOLERANCE {
        log::warn!(
            "Sample {}: surface.normal has length {}, renormalizing",
            index,
            length
        );
        surface.normal /= length;
    }

    clamp_to_range(index, "surface.shadow", &mut surface.shadow, 0.0, 1.0);
    clamp_to_range(index, "material.opacity", &mut material.opacity, 0.0, 1.0);
    clamp_to_range(index, "material.roughness", &mut material.roughness, 0.0, 1.0);
    clamp_to_range(index, "material.metalness", &mut material.metalness, 0.0, 1.0);
    clamp_to_range(
        index,
        "material.ambient_occlusion",
        &mut material.ambient_occlusion,
        0.0,
        1.0,
    );
    clamp_to_range(
        index,
        "material.emissive_intensity",
        &mut material.emissive_intensity,
        0.0,
        Real::INFINITY,
    );
    clamp_to_range(index, "light.light.power", &mut light.light.power, 0.0, Real::INFINITY);
    for channel in material.color.iter_mut() {
        clamp_to_range(index, "material.color", channel, 0.0, 1.0);
    }

    Ok(())
}

use super::{shade, ShadingConfig};
use crate::core::Material;
use crate::lights::LightUniforms;
use crate::utils::{Real, Rgba, Vec3};
use nalgebra::Point3;
use serde::Deserialize;

/// Interpolated surface values for one shading sample.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SurfaceSample {
    pub position: Point3<Real>,
    pub normal: Vec3,
    /// Shadow-map visibility, 0 fully lit and 1 fully shadowed.
    pub shadow: Real,
}

impl Default for SurfaceSample {
    fn default() -> Self {
        Self {
            position: Point3::origin(),
            normal: Vec3::z(),
            shadow: 0.0,
        }
    }
}

impl SurfaceSample {
    pub fn new(position: Point3<Real>, normal: Vec3, shadow: Real) -> Self {
        Self {
            position,
            normal,
            shadow,
        }
    }
}

/// Everything one invocation of [`shade`] consumes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShadingSample {
    pub surface: SurfaceSample,
    pub material: Material,
    pub light: LightUniforms,
}

impl ShadingSample {
    pub fn new(surface: SurfaceSample, material: Material, light: LightUniforms) -> Self {
        Self {
            surface,
            material,
            light,
        }
    }

    pub fn shade(&self, config: &ShadingConfig) -> Rgba {
        shade(config, &self.surface, &self.material, &self.light)
    }
}

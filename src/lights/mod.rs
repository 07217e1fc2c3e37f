mod ambient;
mod point;

use crate::utils::Real;
use nalgebra::Point3;
use serde::Deserialize;

pub use ambient::AmbientLight;
pub use point::PointLight;

/// Per-light values uploaded alongside every shading evaluation.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LightUniforms {
    pub light: PointLight,
    pub ambient: AmbientLight,
    pub view_position: Point3<Real>,
}

impl Default for LightUniforms {
    fn default() -> Self {
        Self {
            light: PointLight::default(),
            ambient: AmbientLight::default(),
            view_position: Point3::from([0.0, 0.0, 1.0]),
        }
    }
}

impl LightUniforms {
    pub fn new(light: PointLight, ambient: AmbientLight, view_position: Point3<Real>) -> Self {
        Self {
            light,
            ambient,
            view_position,
        }
    }
}

use crate::utils::{Real, Rgb};
use nalgebra::Point3;
use serde::Deserialize;

#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PointLight {
    pub position: Point3<Real>,
    pub color: Rgb,
    pub power: Real,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: Point3::from([0.0, 0.0, 1.0]),
            color: Rgb::from([1.0; 3]),
            power: 1.0,
        }
    }
}

impl PointLight {
    pub fn new(position: Point3<Real>, color: Rgb, power: Real) -> Self {
        Self {
            position,
            color,
            power,
        }
    }

    pub fn get_radiance(&self, attenuation: Real) -> Rgb {
        self.color * (attenuation * self.power.max(0.0))
    }
}

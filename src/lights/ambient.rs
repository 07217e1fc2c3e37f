use crate::utils::Rgb;
use num_traits::identities::Zero;
use serde::Deserialize;

#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AmbientLight {
    pub color: Rgb,
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self { color: Rgb::zero() }
    }
}

impl AmbientLight {
    pub fn new(color: Rgb) -> Self {
        Self { color }
    }

    pub fn get_color(&self) -> Rgb {
        self.color
    }
}

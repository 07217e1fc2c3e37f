use crate::utils::{Real, Rgb};
use nalgebra::Vector4;
use num_traits::identities::Zero;
use serde::Deserialize;

#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Material {
    pub color: Rgb,
    pub opacity: Real,
    pub roughness: Real,
    pub metalness: Real,
    pub ambient_occlusion: Real,
    pub emissive: Rgb,
    pub emissive_intensity: Real,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Rgb::repeat(1.0),
            opacity: 1.0,
            roughness: 0.5,
            metalness: 0.0,
            ambient_occlusion: 1.0,
            emissive: Rgb::zero(),
            emissive_intensity: 0.0,
        }
    }
}

impl Material {
    /// Builds a material from the packed `(roughness, metalness, unused, occlusion)`
    /// vector sampled from a material texture.
    pub fn from_packed(color: Rgb, packed: Vector4<Real>) -> Self {
        Self {
            color,
            roughness: packed.x,
            metalness: packed.y,
            ambient_occlusion: packed.w,
            ..Material::default()
        }
    }

    pub fn packed(&self) -> Vector4<Real> {
        Vector4::new(self.roughness, self.metalness, 0.0, self.ambient_occlusion)
    }

    pub fn emission(&self) -> Rgb {
        self.emissive * self.emissive_intensity
    }

    pub(crate) fn scalars(&self) -> [(&'static str, Real); 5] {
        [
            ("opacity", self.opacity),
            ("roughness", self.roughness),
            ("metalness", self.metalness),
            ("ambient_occlusion", self.ambient_occlusion),
            ("emissive_intensity", self.emissive_intensity),
        ]
    }
}

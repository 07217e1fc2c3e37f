use crate::brdf::{DiffuseModel, DistributionModel, GeometryModel};
use serde::Deserialize;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlphaMode {
    /// Output alpha is always 1.
    #[default]
    Opaque,
    /// Output alpha is the material opacity.
    PassThrough,
}

/// Policy selection for one pipeline configuration. Every sample shaded with
/// the same configuration uses the same terms.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShadingConfig {
    pub diffuse: DiffuseModel,
    pub geometry: GeometryModel,
    pub distribution: DistributionModel,
    /// Apply `1 / (1 + 0.35 d + 0.84 d²)` distance attenuation.
    pub attenuate: bool,
    /// Scale the direct term of [`shade`](super::shade) by `n_dot_l`.
    pub cosine_weighted: bool,
    pub alpha: AlphaMode,
}

impl ShadingConfig {
    /// The configuration used by Filament-style direction based shading.
    pub fn filament() -> Self {
        Self {
            diffuse: DiffuseModel::Burley,
            geometry: GeometryModel::SmithFast,
            distribution: DistributionModel::GgxCross,
            cosine_weighted: true,
            ..Self::default()
        }
    }
}

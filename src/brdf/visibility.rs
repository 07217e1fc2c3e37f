use super::distribution::{alpha_from_roughness, clamp_roughness};
use crate::utils::Real;
use serde::Deserialize;

/// Floor for the sum of the masking and shadowing partials before dividing.
pub const VISIBILITY_EPSILON: Real = 1e-5;

// Height-correlated Smith-GGX visibility, already divided by 4 * n_dot_v * n_dot_l
pub fn v_smith_ggx_correlated(n_dot_v: Real, n_dot_l: Real, alpha: Real) -> Real {
    let a2 = alpha * alpha;
    let ggx_l = n_dot_v * ((n_dot_l - n_dot_l * a2) * n_dot_l + a2).max(0.0).sqrt();
    let ggx_v = n_dot_l * ((n_dot_v - n_dot_v * a2) * n_dot_v + a2).max(0.0).sqrt();

    0.5 / (ggx_v + ggx_l).max(VISIBILITY_EPSILON)
}

// Linear approximation of the correlated term without square roots. Overestimates
// slightly at grazing angles for rough surfaces.
pub fn v_smith_ggx_correlated_fast(n_dot_v: Real, n_dot_l: Real, alpha: Real) -> Real {
    let ggx_v = n_dot_l * (n_dot_v * (1.0 - alpha) + alpha);
    let ggx_l = n_dot_v * (n_dot_l * (1.0 - alpha) + alpha);

    0.5 / (ggx_v + ggx_l).max(VISIBILITY_EPSILON)
}

fn schlick_k(roughness: Real) -> Real {
    let r = clamp_roughness(roughness) + 1.0;
    r * r / 8.0
}

// Smith's Schlick-GGX geometry function, not normalized
pub fn g_schlick_ggx(n_dot_v: Real, n_dot_l: Real, roughness: Real) -> Real {
    let k = schlick_k(roughness);

    let ggx1 = n_dot_v / (n_dot_v * (1.0 - k) + k);
    let ggx2 = n_dot_l / (n_dot_l * (1.0 - k) + k);

    ggx1 * ggx2
}

// g_schlick_ggx / (4 * n_dot_v * n_dot_l) with the cosines cancelled, so both
// factors of the denominator stay at or above k
pub fn v_schlick_ggx(n_dot_v: Real, n_dot_l: Real, roughness: Real) -> Real {
    let k = schlick_k(roughness);

    let denom_v = n_dot_v * (1.0 - k) + k;
    let denom_l = n_dot_l * (1.0 - k) + k;

    0.25 / (denom_v * denom_l)
}

/// Which masking-shadowing function evaluates the visibility term.
///
/// Every variant returns visibility normalized by `1 / (4 * n_dot_v * n_dot_l)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeometryModel {
    /// Schlick-GGX with `k = (roughness + 1)² / 8`.
    LegacyK,
    /// Exact height-correlated Smith-GGX.
    SmithExact,
    /// Square-root free approximation of [`GeometryModel::SmithExact`].
    #[default]
    SmithFast,
}

impl GeometryModel {
    pub fn evaluate(self, n_dot_v: Real, n_dot_l: Real, roughness: Real) -> Real {
        match self {
            GeometryModel::LegacyK => v_schlick_ggx(n_dot_v, n_dot_l, roughness),
            GeometryModel::SmithExact => {
                v_smith_ggx_correlated(n_dot_v, n_dot_l, alpha_from_roughness(roughness))
            }
            GeometryModel::SmithFast => {
                v_smith_ggx_correlated_fast(n_dot_v, n_dot_l, alpha_from_roughness(roughness))
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use more_asserts::{assert_ge, assert_le};
    use rand::Rng;

    const MODELS: [GeometryModel; 3] = [
        GeometryModel::LegacyK,
        GeometryModel::SmithExact,
        GeometryModel::SmithFast,
    ];

    #[test]
    fn it_normalizes_at_normal_incidence() {
        // With both cosines at 1 the masking is 1, leaving 1 / 4
        for &roughness in &[0.0, 0.2, 0.5, 1.0] {
            let alpha = alpha_from_roughness(roughness);
            assert_le!((v_smith_ggx_correlated(1.0, 1.0, alpha) - 0.25).abs(), 1e-5);
            assert_le!((v_smith_ggx_correlated_fast(1.0, 1.0, alpha) - 0.25).abs(), 1e-5);
            assert_le!((v_schlick_ggx(1.0, 1.0, roughness) - 0.25).abs(), 1e-5);
        }
    }

    #[test]
    fn it_cancels_the_legacy_normalization() {
        let mut rng = rand::thread_rng();
        for _ in 0..10_000 {
            let n_dot_v: Real = rng.gen_range(0.05..=1.0);
            let n_dot_l: Real = rng.gen_range(0.05..=1.0);
            let roughness: Real = rng.gen_range(0.0..=1.0);

            let g = g_schlick_ggx(n_dot_v, n_dot_l, roughness);
            let normalized = g / (4.0 * n_dot_v * n_dot_l);
            let v = v_schlick_ggx(n_dot_v, n_dot_l, roughness);
            assert_le!((normalized - v).abs() / v, 1e-4);
        }
    }

    #[test]
    fn it_approximates_the_exact_form() {
        let mut rng = rand::thread_rng();
        for _ in 0..10_000 {
            let n_dot_v: Real = rng.gen_range(0.1..=1.0);
            let n_dot_l: Real = rng.gen_range(0.1..=1.0);
            let alpha = alpha_from_roughness(rng.gen_range(0.0..=1.0));

            let exact = v_smith_ggx_correlated(n_dot_v, n_dot_l, alpha);
            let fast = v_smith_ggx_correlated_fast(n_dot_v, n_dot_l, alpha);
            assert_le!((exact - fast).abs() / exact, 0.5);
        }
    }

    #[test]
    fn it_limits_roughness_to_one() {
        for model in &MODELS {
            assert_eq!(model.evaluate(0.7, 0.4, 2.5), model.evaluate(0.7, 0.4, 1.0));
        }
    }

    #[test]
    fn it_guards_fully_grazing_configurations() {
        for model in &MODELS {
            for &roughness in &[0.0, 0.5, 1.0] {
                let v = model.evaluate(0.0, 0.0, roughness);
                assert!(v.is_finite(), "{:?} produced {}", model, v);
                assert_ge!(v, 0.0);
            }
        }
    }

    #[test]
    fn it_stays_finite_and_non_negative() {
        let mut rng = rand::thread_rng();
        for _ in 0..10_000 {
            let n_dot_v: Real = rng.gen_range(0.0..=1.0);
            let n_dot_l: Real = rng.gen_range(0.0..=1.0);
            let roughness: Real = rng.gen_range(0.0..=1.0);

            for model in &MODELS {
                let v = model.evaluate(n_dot_v, n_dot_l, roughness);
                assert!(v.is_finite(), "{:?} produced {}", model, v);
                assert_ge!(v, 0.0);
            }
        }
    }
}

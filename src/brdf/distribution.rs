use crate::utils::{saturate, Real, Vec3, FRAC_1_PI, PI};
use serde::Deserialize;

/// Smallest perceptual roughness any term will evaluate with.
pub const MIN_ROUGHNESS: Real = 1e-3;

/// Smallest GGX alpha, the square of [`MIN_ROUGHNESS`].
pub const MIN_ALPHA: Real = MIN_ROUGHNESS * MIN_ROUGHNESS;

// Perceptual roughness limited to [MIN_ROUGHNESS, 1]
pub fn clamp_roughness(roughness: Real) -> Real {
    saturate(roughness).max(MIN_ROUGHNESS)
}

// Perceptual roughness to GGX alpha (alpha = roughness²)
pub fn alpha_from_roughness(roughness: Real) -> Real {
    let roughness = clamp_roughness(roughness);
    roughness * roughness
}

// Trowbridge-Reitz GGX normal distribution function
//
// The denominator is never smaller than alpha², so it is floored there. This keeps
// n_dot_h = 1 finite when alpha² vanishes against 1.0 in single precision.
pub fn d_ggx(n_dot_h: Real, alpha: Real) -> Real {
    let a2 = alpha.max(MIN_ALPHA).powi(2);

    let n_dot_h2 = n_dot_h * n_dot_h;
    let denom = (n_dot_h2 * (a2 - 1.0) + 1.0).max(a2);
    let denom = PI * denom * denom;

    (a2 / denom).max(0.0)
}

// GGX evaluated with |n x h|² standing in for 1 - n_dot_h², which loses no precision
// when the half vector is close to the normal
pub fn d_ggx_cross(normal: &Vec3, half_vec: &Vec3, n_dot_h: Real, alpha: Real) -> Real {
    let alpha = alpha.max(MIN_ALPHA);

    let n_x_h = normal.cross(half_vec);
    let a = n_dot_h * alpha;
    let denom = (n_x_h.norm_squared() + a * a).max(alpha * alpha);
    let k = alpha / denom;

    (k * k * FRAC_1_PI).max(0.0)
}

/// Which GGX formulation evaluates the distribution term.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionModel {
    /// Cosine-parameterized GGX.
    #[default]
    Ggx,
    /// GGX driven by `cross(normal, half)`, steadier near the peak.
    GgxCross,
}

impl DistributionModel {
    pub fn evaluate(self, normal: &Vec3, half_vec: &Vec3, n_dot_h: Real, roughness: Real) -> Real {
        let alpha = alpha_from_roughness(roughness);
        match self {
            DistributionModel::Ggx => d_ggx(n_dot_h, alpha),
            DistributionModel::GgxCross => d_ggx_cross(normal, half_vec, n_dot_h, alpha),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::utils::{half_vector, saturate, uniform_sample_sphere};
    use more_asserts::{assert_ge, assert_gt, assert_le, assert_lt};
    use rand::Rng;

    fn relative_error(a: Real, b: Real) -> Real {
        (a - b).abs() / a.abs().max(b.abs()).max(1e-6)
    }

    #[test]
    fn it_maps_roughness_to_alpha() {
        assert_eq!(alpha_from_roughness(0.5), 0.25);
        assert_eq!(alpha_from_roughness(1.0), 1.0);
        assert_eq!(alpha_from_roughness(0.0), MIN_ALPHA);
        assert_eq!(alpha_from_roughness(-3.0), MIN_ALPHA);
        assert_eq!(alpha_from_roughness(1.5), 1.0);
        assert_eq!(clamp_roughness(Real::NEG_INFINITY), MIN_ROUGHNESS);
        assert_eq!(clamp_roughness(7.0), 1.0);
    }

    #[test]
    fn it_matches_the_closed_form_peak() {
        for &roughness in &[0.1, 0.25, 0.5, 0.75, 1.0] {
            let alpha = alpha_from_roughness(roughness);
            let expected = 1.0 / (PI * alpha * alpha);
            assert_le!(relative_error(d_ggx(1.0, alpha), expected), 1e-2);
        }
    }

    #[test]
    fn it_is_uniform_for_full_roughness() {
        for &n_dot_h in &[0.0, 0.3, 0.7, 1.0] {
            assert_le!((d_ggx(n_dot_h, 1.0) - FRAC_1_PI).abs(), 1e-5);
        }
    }

    #[test]
    fn it_peaks_when_the_half_vector_meets_the_normal() {
        let alpha = alpha_from_roughness(0.4);
        let peak = d_ggx(1.0, alpha);
        for &n_dot_h in &[0.0, 0.5, 0.9, 0.99] {
            assert_lt!(d_ggx(n_dot_h, alpha), peak);
        }
    }

    #[test]
    fn it_spikes_finitely_for_zero_roughness() {
        let normal = Vec3::z();
        for model in &[DistributionModel::Ggx, DistributionModel::GgxCross] {
            let d = model.evaluate(&normal, &normal, 1.0, 0.0);
            assert!(d.is_finite(), "{:?} produced {}", model, d);
            assert_gt!(d, 1e6);
        }
    }

    #[test]
    fn it_agrees_between_formulations() {
        let mut rng = rand::thread_rng();
        let normal = Vec3::z();
        for _ in 0..10_000 {
            let roughness: Real = rng.gen_range(0.2..=1.0);
            let view_dir = uniform_sample_sphere(&mut rng);
            let light_dir = uniform_sample_sphere(&mut rng);
            let half_vec = half_vector(&view_dir, &light_dir, &normal);
            let n_dot_h = saturate(normal.dot(&half_vec));

            let cosine = DistributionModel::Ggx.evaluate(&normal, &half_vec, n_dot_h, roughness);
            let cross =
                DistributionModel::GgxCross.evaluate(&normal, &half_vec, n_dot_h, roughness);

            // back-facing half vectors are clamped in the cosine but not in |n x h|
            if normal.dot(&half_vec) >= 0.0 {
                assert_le!(relative_error(cosine, cross), 1e-2);
            }
        }
    }

    #[test]
    fn it_stays_finite_and_non_negative() {
        let mut rng = rand::thread_rng();
        let normal = Vec3::z();
        for _ in 0..10_000 {
            let roughness: Real = rng.gen_range(0.0..=1.0);
            let half_vec = uniform_sample_sphere(&mut rng);
            let n_dot_h = saturate(normal.dot(&half_vec));

            for model in &[DistributionModel::Ggx, DistributionModel::GgxCross] {
                let d = model.evaluate(&normal, &half_vec, n_dot_h, roughness);
                assert!(d.is_finite(), "{:?} produced {}", model, d);
                assert_ge!(d, 0.0);
            }
        }
    }
}

mod directions;

use nalgebra::{Vector3, Vector4};
use num_traits::Float;

pub use directions::{direction_between, half_vector, normalize_or};

#[cfg(test)]
pub use directions::uniform_sample_sphere;

#[cfg(not(feature = "double-precision"))]
pub type Real = f32;
#[cfg(not(feature = "double-precision"))]
pub use std::f32::consts::{FRAC_1_PI, PI};

#[cfg(feature = "double-precision")]
pub type Real = f64;
#[cfg(feature = "double-precision")]
pub use std::f64::consts::{FRAC_1_PI, PI};

pub type Vec3 = Vector3<Real>;
pub type Rgb = Vector3<Real>;
pub type Rgba = Vector4<Real>;

/// Length at or below which a direction is treated as degenerate.
pub const MIN_DIRECTION_LENGTH: Real = 1e-6;

pub fn saturate<F: Float>(x: F) -> F {
    x.max(F::zero()).min(F::one())
}

// Exact at both ends: lerp(x0, x1, 0) == x0 and lerp(x0, x1, 1) == x1
pub fn lerp<F: Float>(x0: F, x1: F, t: F) -> F {
    x0 - x0 * t + x1 * t
}

pub fn pow5<F: Float>(x: F) -> F {
    let x2 = x * x;
    x2 * x2 * x
}

pub fn lerp_rgb(x0: &Rgb, x1: &Rgb, t: Real) -> Rgb {
    x0.zip_map(x1, |a, b| lerp(a, b, t))
}

pub fn clamp_non_negative(color: &Rgb) -> Rgb {
    color.map(|c| c.max(0.0))
}

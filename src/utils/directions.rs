use super::{Real, Vec3, MIN_DIRECTION_LENGTH};
use nalgebra::{Point3, Unit};

#[cfg(test)]
use rand::Rng;

// Normalize a direction, substituting the fallback when it has no usable length
pub fn normalize_or(direction: &Vec3, fallback: &Vec3) -> Vec3 {
    Unit::try_new(*direction, MIN_DIRECTION_LENGTH).map_or(*fallback, Unit::into_inner)
}

pub fn direction_between(from: &Point3<Real>, to: &Point3<Real>, fallback: &Vec3) -> Vec3 {
    normalize_or(&(to - from), fallback)
}

// Any unit vector orthogonal to a unit direction
fn orthogonal(direction: &Vec3) -> Vec3 {
    let axis = if direction.x.abs() < 0.9 { Vec3::x() } else { Vec3::y() };
    direction.cross(&axis).normalize()
}

// Opposing view and light directions have no half vector. The limit as they separate
// lies orthogonal to the view, so the fallback is taken in the tangent plane of the
// normal, which gives n_dot_h = 0 and l_dot_h = 0.
pub fn half_vector(view_dir: &Vec3, light_dir: &Vec3, normal: &Vec3) -> Vec3 {
    Unit::try_new(view_dir + light_dir, MIN_DIRECTION_LENGTH).map_or_else(
        || normalize_or(&normal.cross(view_dir), &orthogonal(normal)),
        Unit::into_inner,
    )
}

#[cfg(test)]
pub fn uniform_sample_sphere<R: Rng>(rng: &mut R) -> Vec3 {
    let z: Real = rng.gen_range(-1.0..=1.0);
    let phi: Real = rng.gen_range(0.0..(2.0 * super::PI));
    let r = (1.0 - z * z).max(0.0).sqrt();

    Vec3::new(r * phi.cos(), r * phi.sin(), z)
}

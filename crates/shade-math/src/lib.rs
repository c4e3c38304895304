pub mod aabb;
pub mod transform;

pub use glam::{DMat4, DVec3};
pub use aabb::Aabb3;
pub use transform::Transform;

pub type Point3 = DVec3;
pub type Vector3 = DVec3;

/// Linear interpolation between `a` and `b`, exact at `t = 0` and `t = 1`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

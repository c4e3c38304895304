//! Parametric surfaces of the lampshade.

mod body;
mod sleeve;
mod transition;

use std::f64::consts::TAU;

use shade_math::Point3;

pub use body::ShadeBody;
pub use sleeve::MountSleeve;
pub use transition::Transition;

/// Trait for the parametric surfaces the sampler walks.
///
/// `u` runs along the height of the surface, `v` is the angle around the
/// vertical axis. Surfaces are closed in `v`.
pub trait Surface: Send + Sync {
    /// Evaluate the surface at parameters `(u, v)`.
    fn point_at(&self, u: f64, v: f64) -> Point3;

    /// Return the u-parameter domain `(u_min, u_max)`.
    fn domain_u(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    /// Return the v-parameter domain `(v_min, v_max)`; `v_max` wraps to `v_min`.
    fn domain_v(&self) -> (f64, f64) {
        (0.0, TAU)
    }
}

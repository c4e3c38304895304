//! Decorated outer wall of the shade.

use shade_math::{lerp, Point3};
use serde::{Deserialize, Serialize};

use super::Surface;
use crate::{Pattern, Profile};

/// The shade body: profile radius plus pattern offset, centred on the origin.
///
/// `u = 0` is the top rim at `+height/2`, `u = 1` the bottom rim at `-height/2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShadeBody {
    pub profile: Profile,
    pub pattern: Pattern,
    pub height: f64,
}

impl ShadeBody {
    pub fn new(profile: Profile, pattern: Pattern, height: f64) -> Self {
        Self {
            profile,
            pattern,
            height,
        }
    }

    /// Radius at `(u, v)`, floored at zero.
    pub fn radius_at(&self, u: f64, v: f64) -> f64 {
        (self.profile.radius_at(u) + self.pattern.offset(u, v)).max(0.0)
    }

    pub fn height_at(&self, u: f64) -> f64 {
        lerp(self.height / 2.0, -self.height / 2.0, u)
    }

    pub fn top_height(&self) -> f64 {
        self.height_at(0.0)
    }

    /// Centre of the bottom opening, used as the bottom cap's fan point.
    pub fn bottom_center(&self) -> Point3 {
        Point3::new(0.0, self.height_at(1.0), 0.0)
    }
}

impl Surface for ShadeBody {
    fn point_at(&self, u: f64, v: f64) -> Point3 {
        let r = self.radius_at(u, v);
        Point3::new(r * v.cos(), self.height_at(u), r * v.sin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DesignMode, Interpolation};
    use std::f64::consts::TAU;

    fn plain_body() -> ShadeBody {
        ShadeBody::new(
            Profile::new(30.0, 70.0, 60.0, Interpolation::Bezier),
            Pattern::none(),
            80.0,
        )
    }

    #[test]
    fn test_body_heights() {
        let body = plain_body();
        assert_eq!(body.point_at(0.0, 0.0).y, 40.0);
        assert_eq!(body.point_at(1.0, 0.0).y, -40.0);
        assert_eq!(body.top_height(), 40.0);
        assert_eq!(body.bottom_center(), Point3::new(0.0, -40.0, 0.0));
    }

    #[test]
    fn test_body_plain_ring_is_round() {
        let body = plain_body();
        for j in 0..12 {
            let p = body.point_at(0.5, TAU * j as f64 / 12.0);
            let r = (p.x * p.x + p.z * p.z).sqrt();
            assert!((r - 35.0).abs() < 1e-9, "r = {r}");
        }
    }

    #[test]
    fn test_radius_never_negative() {
        let body = ShadeBody::new(
            Profile::new(2.0, 2.0, 2.0, Interpolation::Linear),
            Pattern::new(DesignMode::Weave, 3.0, 4.0),
            50.0,
        );
        for i in 0..=10 {
            for j in 0..16 {
                let r = body.radius_at(i as f64 / 10.0, TAU * j as f64 / 16.0);
                assert!(r >= 0.0);
            }
        }
    }
}

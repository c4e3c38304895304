//! Horizontal circle.

use shade_math::Point3;
use serde::{Deserialize, Serialize};

/// A circle around the vertical (Y) axis, parameterized over `[0, 2*PI)`.
///
/// `t = 0` lies on +X and the angle grows towards +Z, matching the angular
/// parameter of every shade surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub height: f64,
    pub radius: f64,
}

impl Circle {
    pub fn new(height: f64, radius: f64) -> Self {
        Self { height, radius }
    }

    pub fn point_at(&self, t: f64) -> Point3 {
        Point3::new(self.radius * t.cos(), self.height, self.radius * t.sin())
    }

    pub fn center(&self) -> Point3 {
        Point3::new(0.0, self.height, 0.0)
    }
}

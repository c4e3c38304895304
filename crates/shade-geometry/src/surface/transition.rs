//! Collar between the body's top rim and the mount sleeve.

use shade_math::{lerp, Point3};
use serde::{Deserialize, Serialize};

use super::{ShadeBody, Surface};
use crate::Circle;

/// Tapered collar rising from the body's `u = 0` ring to the mount circle.
///
/// At `t` in `[0, 1]` the horizontal position blends component-wise between
/// the rim vertex and the mount circle vertex at the same angle, while the
/// height blends independently between the two planes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub body: ShadeBody,
    pub mount: Circle,
}

impl Transition {
    /// `mount_radius` is placed `height` above the body's top rim.
    pub fn new(body: ShadeBody, mount_radius: f64, height: f64) -> Self {
        let mount = Circle::new(body.top_height() + height, mount_radius);
        Self { body, mount }
    }

    pub fn bottom_height(&self) -> f64 {
        self.body.top_height()
    }

    pub fn top_height(&self) -> f64 {
        self.mount.height
    }
}

impl Surface for Transition {
    fn point_at(&self, t: f64, v: f64) -> Point3 {
        let rim = self.body.point_at(0.0, v);
        let ring = self.mount.point_at(v);
        Point3::new(
            lerp(rim.x, ring.x, t),
            lerp(self.bottom_height(), self.top_height(), t),
            lerp(rim.z, ring.z, t),
        )
    }
}

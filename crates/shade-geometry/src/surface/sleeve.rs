//! Plain tube that slides onto the ornament mount.

use shade_math::{lerp, Point3};
use serde::{Deserialize, Serialize};

use super::Surface;
use crate::Circle;

/// Cylinder of fixed radius between two heights; no pattern is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MountSleeve {
    pub radius: f64,
    pub bottom_height: f64,
    pub top_height: f64,
}

impl MountSleeve {
    pub fn new(radius: f64, bottom_height: f64, length: f64) -> Self {
        Self {
            radius,
            bottom_height,
            top_height: bottom_height + length,
        }
    }

    /// Centre of the closed top end, used as the top cap's fan point.
    pub fn top_center(&self) -> Point3 {
        self.ring(1.0).center()
    }

    fn ring(&self, t: f64) -> Circle {
        Circle::new(lerp(self.bottom_height, self.top_height, t), self.radius)
    }
}

impl Surface for MountSleeve {
    fn point_at(&self, t: f64, v: f64) -> Point3 {
        self.ring(t).point_at(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sleeve_extent() {
        let sleeve = MountSleeve::new(6.5, 52.0, 5.5);
        assert_eq!(sleeve.point_at(0.0, 0.0), Point3::new(6.5, 52.0, 0.0));
        assert_eq!(sleeve.point_at(1.0, 0.0).y, 57.5);
        assert_eq!(sleeve.top_center(), Point3::new(0.0, 57.5, 0.0));
    }
}

//! Slider ranges an interactive front end offers.

use serde::{Deserialize, Serialize};
use shade_core::{Result, ShadeError};

use crate::constraints;
use crate::{DesignParameters, MountGeometry};

/// Closed interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterRanges {
    /// Minimum gap between the top diameter and the mount's outer diameter
    pub top_clearance: f64,
    pub top_diameter_max: f64,
    pub middle_diameter: Bounds,
    pub bottom_diameter: Bounds,
    pub cylinder_height: Bounds,
    pub feature_count: (u32, u32),
    pub detail: (usize, usize),
    pub overhang_angle: Bounds,
}

impl ParameterRanges {
    pub const DEFAULT: ParameterRanges = ParameterRanges {
        top_clearance: 3.0,
        top_diameter_max: 100.0,
        middle_diameter: Bounds::new(30.0, 120.0),
        bottom_diameter: Bounds::new(30.0, 120.0),
        cylinder_height: Bounds::new(50.0, 120.0),
        feature_count: (1, 10),
        detail: (25, 300),
        overhang_angle: Bounds::new(30.0, 80.0),
    };

    pub fn top_diameter(&self, mount: &MountGeometry) -> Bounds {
        Bounds::new(mount.outer_diameter + self.top_clearance, self.top_diameter_max)
    }

    /// Upper bound of the feature-depth slider for `params`.
    pub fn feature_depth(&self, params: &DesignParameters, mount: &MountGeometry) -> Bounds {
        Bounds::new(0.0, constraints::solve(params, mount).feature_depth_max)
    }

    /// Check every value against its slider range.
    pub fn check(&self, params: &DesignParameters, mount: &MountGeometry) -> Result<()> {
        let real = [
            ("top_diameter", params.top_diameter, self.top_diameter(mount)),
            ("middle_diameter", params.middle_diameter, self.middle_diameter),
            ("bottom_diameter", params.bottom_diameter, self.bottom_diameter),
            ("cylinder_height", params.cylinder_height, self.cylinder_height),
            ("overhang_angle", params.overhang_angle, self.overhang_angle),
            ("feature_depth", params.feature_depth, self.feature_depth(params, mount)),
        ];
        for (name, value, bounds) in real {
            if !bounds.contains(value) {
                return Err(out_of_range(name, value, bounds.min, bounds.max));
            }
        }
        let (lo, hi) = self.feature_count;
        if !(lo..=hi).contains(&params.feature_count) {
            return Err(out_of_range("feature_count", params.feature_count, lo, hi));
        }
        let (lo, hi) = self.detail;
        if !(lo..=hi).contains(&params.detail) {
            return Err(out_of_range("detail", params.detail, lo, hi));
        }
        Ok(())
    }
}

impl Default for ParameterRanges {
    fn default() -> Self {
        Self::DEFAULT
    }
}

fn out_of_range<T: std::fmt::Display>(name: &str, value: T, min: T, max: T) -> ShadeError {
    ShadeError::InvalidParameter(format!("{name} {value} is outside [{min}, {max}]"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOUNT: MountGeometry = MountGeometry::STAR_ORNAMENT;

    #[test]
    fn test_default_design_in_range() {
        ParameterRanges::DEFAULT
            .check(&DesignParameters::default(), &MOUNT)
            .unwrap();
    }

    #[test]
    fn test_top_range_follows_mount() {
        let bounds = ParameterRanges::DEFAULT.top_diameter(&MOUNT);
        assert_eq!(bounds, Bounds::new(16.0, 100.0));
    }

    #[test]
    fn test_out_of_range_values() {
        let ranges = ParameterRanges::DEFAULT;
        let base = DesignParameters::default();
        let cases = [
            (DesignParameters { top_diameter: 15.0, ..base }, "top_diameter"),
            (DesignParameters { middle_diameter: 121.0, ..base }, "middle_diameter"),
            (DesignParameters { detail: 4, ..base }, "detail"),
            (DesignParameters { feature_count: 11, ..base }, "feature_count"),
            (DesignParameters { overhang_angle: 85.0, ..base }, "overhang_angle"),
            (DesignParameters { feature_depth: 4.5, ..base }, "feature_depth"),
        ];
        for (params, field) in cases {
            let err = ranges.check(&params, &MOUNT).unwrap_err();
            assert!(err.to_string().contains(field), "{err}");
        }
    }
}

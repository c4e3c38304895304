use serde::{Deserialize, Serialize};
use shade_core::{Result, ShadeError};
use shade_geometry::surface::ShadeBody;
use shade_geometry::{DesignMode, Interpolation, Pattern, Profile};

use crate::constraints;
use crate::MountGeometry;

/// Smallest ring that still encloses area.
pub const MIN_DETAIL: usize = 3;

/// Snapshot of every independent design value for one generation pass.
///
/// Lengths are millimetres, angles degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignParameters {
    pub top_diameter: f64,
    pub middle_diameter: f64,
    pub bottom_diameter: f64,
    pub cylinder_height: f64,
    pub design_mode: DesignMode,
    pub feature_count: u32,
    pub feature_depth: f64,
    pub detail: usize,
    pub interpolation: Interpolation,
    pub overhang_angle: f64,
}

impl Default for DesignParameters {
    fn default() -> Self {
        Self {
            top_diameter: 30.0,
            middle_diameter: 70.0,
            bottom_diameter: 60.0,
            cylinder_height: 80.0,
            design_mode: DesignMode::Ripples,
            feature_count: 6,
            feature_depth: 2.0,
            detail: 120,
            interpolation: Interpolation::Bezier,
            overhang_angle: 30.0,
        }
    }
}

impl DesignParameters {
    pub fn profile(&self) -> Profile {
        Profile::new(
            self.top_diameter,
            self.middle_diameter,
            self.bottom_diameter,
            self.interpolation,
        )
    }

    pub fn pattern(&self) -> Pattern {
        Pattern::new(self.design_mode, f64::from(self.feature_count), self.feature_depth)
    }

    pub fn body(&self) -> ShadeBody {
        ShadeBody::new(self.profile(), self.pattern(), self.cylinder_height)
    }

    /// Reject values no geometry can be built from.
    ///
    /// Slider ranges are a separate, stricter check (see
    /// [`ParameterRanges::check`](crate::ParameterRanges::check)).
    pub fn validate(&self, mount: &MountGeometry) -> Result<()> {
        for (name, value) in [
            ("top_diameter", self.top_diameter),
            ("middle_diameter", self.middle_diameter),
            ("bottom_diameter", self.bottom_diameter),
            ("cylinder_height", self.cylinder_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ShadeError::InvalidParameter(format!(
                    "{name} must be a positive length, got {value}"
                )));
            }
        }
        if self.top_diameter < mount.outer_diameter {
            return Err(ShadeError::InvalidParameter(format!(
                "top_diameter {} is smaller than the mount outer diameter {}",
                self.top_diameter, mount.outer_diameter
            )));
        }
        if self.detail < MIN_DETAIL {
            return Err(ShadeError::InvalidParameter(format!(
                "detail must be at least {MIN_DETAIL}, got {}",
                self.detail
            )));
        }
        if self.feature_count == 0 {
            return Err(ShadeError::InvalidParameter(
                "feature_count must be at least 1".into(),
            ));
        }
        if !self.feature_depth.is_finite() || self.feature_depth < 0.0 {
            return Err(ShadeError::InvalidParameter(format!(
                "feature_depth must be non-negative, got {}",
                self.feature_depth
            )));
        }
        if !(0.0..90.0).contains(&self.overhang_angle) {
            return Err(ShadeError::InvalidParameter(format!(
                "overhang_angle must lie in [0, 90) degrees, got {}",
                self.overhang_angle
            )));
        }
        Ok(())
    }

    /// Copy with `feature_depth` clamped to what the diameters allow.
    pub fn clamped(&self, mount: &MountGeometry) -> Self {
        constraints::clamp_feature_depth(self, mount)
    }

    /// Replace the three diameters and re-clamp the feature depth.
    pub fn with_diameters(&self, top: f64, middle: f64, bottom: f64, mount: &MountGeometry) -> Self {
        let next = Self {
            top_diameter: top,
            middle_diameter: middle,
            bottom_diameter: bottom,
            ..*self
        };
        next.clamped(mount)
    }

    /// Deterministic name shared by exported meshes and saved designs.
    pub fn file_stem(&self) -> String {
        format!(
            "{}_{}_{}_{}_{}_{}_{:.2}_{}",
            self.design_mode.index(),
            self.top_diameter,
            self.middle_diameter,
            self.bottom_diameter,
            self.cylinder_height,
            self.feature_count,
            self.feature_depth,
            self.detail
        )
    }

    pub fn stl_file_name(&self) -> String {
        format!("{}.stl", self.file_stem())
    }

    pub fn design_file_name(&self) -> String {
        format!("{}.txt", self.file_stem())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOUNT: MountGeometry = MountGeometry::STAR_ORNAMENT;

    #[test]
    fn test_default_is_valid() {
        DesignParameters::default().validate(&MOUNT).unwrap();
    }

    #[test]
    fn test_file_name() {
        let params = DesignParameters::default();
        assert_eq!(params.stl_file_name(), "1_30_70_60_80_6_2.00_120.stl");
        let shards = DesignParameters {
            design_mode: DesignMode::Shards,
            feature_depth: 1.234,
            top_diameter: 42.5,
            ..params
        };
        assert_eq!(shards.file_stem(), "12_42.5_70_60_80_6_1.23_120");
        assert_eq!(shards.design_file_name(), "12_42.5_70_60_80_6_1.23_120.txt");
    }

    #[test]
    fn test_rejects_top_smaller_than_mount() {
        let params = DesignParameters {
            top_diameter: 12.0,
            ..Default::default()
        };
        let err = params.validate(&MOUNT).unwrap_err();
        assert!(matches!(err, ShadeError::InvalidParameter(_)));
        assert!(err.to_string().contains("mount outer diameter"));
    }

    #[test]
    fn test_rejects_degenerate_values() {
        let base = DesignParameters::default();
        let bad = [
            DesignParameters { detail: 2, ..base },
            DesignParameters { feature_count: 0, ..base },
            DesignParameters { feature_depth: -0.5, ..base },
            DesignParameters { cylinder_height: 0.0, ..base },
            DesignParameters { middle_diameter: f64::NAN, ..base },
            DesignParameters { overhang_angle: 90.0, ..base },
        ];
        for params in bad {
            assert!(params.validate(&MOUNT).is_err(), "{params:?}");
        }
    }

    #[test]
    fn test_with_diameters_reclamps_depth() {
        let params = DesignParameters {
            feature_depth: 4.0,
            ..Default::default()
        };
        let narrow = params.with_diameters(16.0, 70.0, 60.0, &MOUNT);
        assert_eq!(narrow.top_diameter, 16.0);
        assert!((narrow.feature_depth - 1.5).abs() < 1e-12);
    }
}

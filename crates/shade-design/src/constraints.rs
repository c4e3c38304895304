//! Geometry derived from the independent design values.
//!
//! Both rules are total: they never fail for validated parameters.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{DesignParameters, MountGeometry};

/// Absolute ceiling on the pattern amplitude (mm).
pub const FEATURE_DEPTH_MAX_MAX: f64 = 4.0;

/// Dependent values computed from one parameter snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedGeometry {
    /// Radial step from the top rim to the mount sleeve (mm)
    pub transition_width: f64,
    /// Vertical extent of the transition collar (mm)
    pub transition_height: f64,
    /// Largest pattern amplitude the diameters allow (mm)
    pub feature_depth_max: f64,
}

/// Radial distance the transition collar has to cover.
pub fn transition_width(top_diameter: f64, mount_outer_diameter: f64) -> f64 {
    (top_diameter - mount_outer_diameter) / 2.0
}

/// Height the collar needs so its slope stays at `overhang_angle` degrees.
pub fn transition_height(top_diameter: f64, mount_outer_diameter: f64, overhang_angle: f64) -> f64 {
    transition_width(top_diameter, mount_outer_diameter).max(0.0) * overhang_angle.to_radians().tan()
}

/// Pattern amplitude at which the narrowest ring would reach the mount radius.
pub fn feature_depth_max(
    top_diameter: f64,
    middle_diameter: f64,
    bottom_diameter: f64,
    mount_outer_diameter: f64,
) -> f64 {
    let smallest = top_diameter.min(middle_diameter).min(bottom_diameter);
    (smallest / 2.0 - mount_outer_diameter / 2.0)
        .max(0.0)
        .min(FEATURE_DEPTH_MAX_MAX)
}

pub fn solve(params: &DesignParameters, mount: &MountGeometry) -> DerivedGeometry {
    DerivedGeometry {
        transition_width: transition_width(params.top_diameter, mount.outer_diameter),
        transition_height: transition_height(
            params.top_diameter,
            mount.outer_diameter,
            params.overhang_angle,
        ),
        feature_depth_max: feature_depth_max(
            params.top_diameter,
            params.middle_diameter,
            params.bottom_diameter,
            mount.outer_diameter,
        ),
    }
}

/// Copy of `params` with `feature_depth` clamped into `[0, feature_depth_max]`.
pub fn clamp_feature_depth(params: &DesignParameters, mount: &MountGeometry) -> DesignParameters {
    let max = solve(params, mount).feature_depth_max;
    let depth = params.feature_depth.clamp(0.0, max);
    if depth != params.feature_depth {
        warn!(
            requested = params.feature_depth,
            clamped = depth,
            "feature depth limited by the narrowest diameter"
        );
    }
    DesignParameters {
        feature_depth: depth,
        ..*params
    }
}

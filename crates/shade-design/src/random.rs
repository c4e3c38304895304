//! Random designs inside the slider ranges.

use rand::Rng;
use shade_geometry::{DesignMode, Interpolation};

use crate::constraints;
use crate::{Bounds, DesignParameters, MountGeometry, ParameterRanges};

/// Draw a fresh design from `rng`.
///
/// Diameters, height, feature count, design mode (including
/// [`DesignMode::None`]) and interpolation are drawn uniformly; `detail` and
/// `overhang_angle` are kept from `base`. The feature depth is drawn last,
/// inside the bound the new diameters allow.
pub fn randomize<R: Rng + ?Sized>(
    base: &DesignParameters,
    rng: &mut R,
    ranges: &ParameterRanges,
    mount: &MountGeometry,
) -> DesignParameters {
    let mut params = DesignParameters {
        top_diameter: whole(rng, ranges.top_diameter(mount)),
        middle_diameter: whole(rng, ranges.middle_diameter),
        bottom_diameter: whole(rng, ranges.bottom_diameter),
        cylinder_height: whole(rng, ranges.cylinder_height),
        feature_count: rng.random_range(ranges.feature_count.0..=ranges.feature_count.1),
        design_mode: DesignMode::ALL[rng.random_range(0..DesignMode::ALL.len())],
        interpolation: Interpolation::ALL[rng.random_range(0..Interpolation::ALL.len())],
        ..*base
    };
    let max = constraints::solve(&params, mount).feature_depth_max;
    params.feature_depth = rng.random_range(0.0..=max);
    params
}

/// Whole millimetre inside `bounds`.
fn whole<R: Rng + ?Sized>(rng: &mut R, bounds: Bounds) -> f64 {
    let lo = bounds.min.ceil() as i64;
    let hi = (bounds.max.floor() as i64).max(lo);
    rng.random_range(lo..=hi) as f64
}

//! Single-line, comma-separated design files.
//!
//! Field order: `top_diameter, middle_diameter, bottom_diameter,
//! cylinder_height, feature_count, feature_depth, detail, overhang_angle,
//! design_mode[, interpolation]`. The trailing interpolation index is optional
//! on input; when absent the value from the base snapshot is kept.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use shade_core::{Result, ShadeError};
use shade_geometry::{DesignMode, Interpolation};
use tracing::info;

use crate::{DesignParameters, MountGeometry};

pub const FIELD_NAMES: [&str; 10] = [
    "topDiameter",
    "middleDiameter",
    "bottomDiameter",
    "cylinderHeight",
    "featureCount",
    "featureDepth",
    "detail",
    "overhangAngle",
    "designMode",
    "interpolation",
];

/// Fields a record must carry.
pub const REQUIRED_FIELDS: usize = 9;

/// Render `params` as one design record (without trailing newline).
///
/// Reals use Rust's shortest round-trip formatting, so parsing the line
/// reproduces every value bit for bit.
pub fn to_line(params: &DesignParameters) -> String {
    format!(
        "{},{},{},{},{},{},{},{},{},{}",
        params.top_diameter,
        params.middle_diameter,
        params.bottom_diameter,
        params.cylinder_height,
        params.feature_count,
        params.feature_depth,
        params.detail,
        params.overhang_angle,
        params.design_mode.index(),
        params.interpolation.index()
    )
}

/// Parse one record on top of `base`.
///
/// Either every field parses or nothing is applied. The feature depth is
/// clamped to what the loaded diameters allow.
pub fn parse_line(line: &str, base: &DesignParameters, mount: &MountGeometry) -> Result<DesignParameters> {
    let tokens: Vec<&str> = line.trim().split(',').map(str::trim).collect();
    if tokens.len() < REQUIRED_FIELDS {
        return Err(ShadeError::MalformedDesignFile(format!(
            "expected at least {REQUIRED_FIELDS} comma-separated fields, found {}",
            tokens.len()
        )));
    }

    let interpolation = match tokens.get(9) {
        Some(token) => {
            let index: u8 = field(&tokens, 9)?;
            Interpolation::from_index(index).ok_or_else(|| {
                ShadeError::MalformedDesignFile(format!(
                    "field 10 ({}): no interpolation with index '{token}'",
                    FIELD_NAMES[9]
                ))
            })?
        }
        None => base.interpolation,
    };

    let mode: u32 = field(&tokens, 8)?;
    let design_mode = u8::try_from(mode).map_or(DesignMode::None, DesignMode::from_index);

    let params = DesignParameters {
        top_diameter: field(&tokens, 0)?,
        middle_diameter: field(&tokens, 1)?,
        bottom_diameter: field(&tokens, 2)?,
        cylinder_height: field(&tokens, 3)?,
        feature_count: field(&tokens, 4)?,
        feature_depth: field(&tokens, 5)?,
        detail: field(&tokens, 6)?,
        overhang_angle: field(&tokens, 7)?,
        design_mode,
        interpolation,
    };
    Ok(params.clamped(mount))
}

fn field<T: FromStr>(tokens: &[&str], index: usize) -> Result<T> {
    let token = tokens[index];
    token.parse().map_err(|_| {
        ShadeError::MalformedDesignFile(format!(
            "field {} ({}): cannot parse '{}' as {}",
            index + 1,
            FIELD_NAMES[index],
            token,
            std::any::type_name::<T>()
        ))
    })
}

pub fn save(params: &DesignParameters, path: &Path) -> Result<()> {
    fs::write(path, format!("{}\n", to_line(params)))?;
    info!("Design saved to {:?}", path);
    Ok(())
}

/// Load the first non-empty line of `path` on top of `base`.
pub fn load(path: &Path, base: &DesignParameters, mount: &MountGeometry) -> Result<DesignParameters> {
    let text = fs::read_to_string(path)?;
    let line = text
        .lines()
        .find(|l| !l.trim().is_empty())
        .ok_or_else(|| ShadeError::MalformedDesignFile(format!("{:?} is empty", path)))?;
    let params = parse_line(line, base, mount)?;
    info!("Design loaded from {:?}", path);
    Ok(params)
}

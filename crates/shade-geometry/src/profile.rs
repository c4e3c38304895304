//! Radial profile of the shade body.

use std::fmt;
use std::str::FromStr;

use shade_math::lerp;
use serde::{Deserialize, Serialize};

/// How the three control diameters are blended along the height parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Interpolation {
    /// Quadratic Bezier whose control point is placed so the curve passes
    /// through the middle diameter at `u = 0.5`.
    ///
    /// With that control point the curve is the same polynomial as
    /// [`Interpolation::Lagrange`], so both produce identical meshes.
    #[default]
    Bezier,
    /// Quadratic Lagrange polynomial through `u = 0, 0.5, 1`.
    Lagrange,
    /// Straight segments top -> middle -> bottom.
    Linear,
}

impl Interpolation {
    pub const ALL: [Interpolation; 3] = [Self::Bezier, Self::Lagrange, Self::Linear];

    /// Index used in design files.
    pub fn index(self) -> u8 {
        match self {
            Self::Bezier => 0,
            Self::Lagrange => 1,
            Self::Linear => 2,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Bezier => "bezier",
            Self::Lagrange => "lagrange",
            Self::Linear => "linear",
        }
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Interpolation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        if let Ok(index) = key.parse::<u8>() {
            return Self::from_index(index).ok_or_else(|| format!("no interpolation with index {index}"));
        }
        Self::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(key))
            .ok_or_else(|| format!("unknown interpolation '{key}'"))
    }
}

/// Three control diameters (top at `u = 0`, middle at `u = 0.5`, bottom at `u = 1`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub top_diameter: f64,
    pub middle_diameter: f64,
    pub bottom_diameter: f64,
    pub interpolation: Interpolation,
}

impl Profile {
    pub fn new(
        top_diameter: f64,
        middle_diameter: f64,
        bottom_diameter: f64,
        interpolation: Interpolation,
    ) -> Self {
        Self {
            top_diameter,
            middle_diameter,
            bottom_diameter,
            interpolation,
        }
    }

    /// Radius of the unperturbed body at height parameter `u` in `[0, 1]`.
    pub fn radius_at(&self, u: f64) -> f64 {
        let (top, mid, bot) = (self.top_diameter, self.middle_diameter, self.bottom_diameter);
        let diameter = match self.interpolation {
            Interpolation::Bezier => {
                let control = 2.0 * mid - 0.5 * (top + bot);
                let s = 1.0 - u;
                s * s * top + 2.0 * s * u * control + u * u * bot
            }
            Interpolation::Lagrange => {
                2.0 * (u - 1.0) * (u - 0.5) * top - 4.0 * (u - 1.0) * u * mid
                    + 2.0 * u * (u - 0.5) * bot
            }
            Interpolation::Linear => {
                if u <= 0.5 {
                    lerp(top, mid, u / 0.5)
                } else {
                    lerp(mid, bot, (u - 0.5) / 0.5)
                }
            }
        };
        diameter / 2.0
    }
}

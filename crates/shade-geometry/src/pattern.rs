//! Radial surface patterns.
//!
//! A [`Pattern`] perturbs the profile radius as a function of the height
//! parameter `u` in `[0, 1]` and the angle `v` in `[0, 2*PI)`. All closed forms
//! are periodic in `v` for whole-number feature counts, so rings close without
//! a seam.

use std::f64::consts::{PI, TAU};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::noise::value_noise;

/// Bands of the shard field along the height.
const SHARD_ROWS: f64 = 10.0;
/// Sectors of the shard field around the circumference.
const SHARD_COLUMNS: f64 = 8.0;
/// Lattice spacing of the noise sampled per shard cell.
const SHARD_FREQUENCY: f64 = 0.37;
const SHARD_SEED: u32 = 0x5eed_1a3b;

/// Catalogue of surface patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DesignMode {
    /// Plain surface.
    None,
    #[default]
    Ripples,
    Spirals,
    Ridges,
    Crosshatch,
    DoubleSine,
    TwistedPulse,
    Weave,
    Moire,
    Michelin,
    MichelinSpitz,
    MichelinSpiral,
    /// Faceted noise.
    Shards,
}

impl DesignMode {
    pub const ALL: [DesignMode; 13] = [
        Self::None,
        Self::Ripples,
        Self::Spirals,
        Self::Ridges,
        Self::Crosshatch,
        Self::DoubleSine,
        Self::TwistedPulse,
        Self::Weave,
        Self::Moire,
        Self::Michelin,
        Self::MichelinSpitz,
        Self::MichelinSpiral,
        Self::Shards,
    ];

    /// Index used in design files and generated file names.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Look up a mode by index; unknown indices select [`DesignMode::None`].
    pub fn from_index(index: u8) -> Self {
        Self::ALL.get(usize::from(index)).copied().unwrap_or(Self::None)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Ripples => "ripples",
            Self::Spirals => "spirals",
            Self::Ridges => "ridges",
            Self::Crosshatch => "crosshatch",
            Self::DoubleSine => "double-sine",
            Self::TwistedPulse => "twisted-pulse",
            Self::Weave => "weave",
            Self::Moire => "moire",
            Self::Michelin => "michelin",
            Self::MichelinSpitz => "michelin-spitz",
            Self::MichelinSpiral => "michelin-spiral",
            Self::Shards => "shards",
        }
    }
}

impl fmt::Display for DesignMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DesignMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        if let Ok(index) = key.parse::<u8>() {
            return Ok(Self::from_index(index));
        }
        Self::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(key))
            .ok_or_else(|| format!("unknown design mode '{key}'"))
    }
}

/// A design mode with its repetition count and amplitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    pub mode: DesignMode,
    pub count: f64,
    pub depth: f64,
}

impl Pattern {
    pub fn new(mode: DesignMode, count: f64, depth: f64) -> Self {
        Self { mode, count, depth }
    }

    pub fn none() -> Self {
        Self::new(DesignMode::None, 1.0, 0.0)
    }

    /// Signed radial offset at `(u, v)`.
    ///
    /// Never below `-depth` and never above `2 * depth`.
    pub fn offset(&self, u: f64, v: f64) -> f64 {
        let fd = self.depth;
        let fc = self.count;
        match self.mode {
            DesignMode::None => 0.0,
            DesignMode::Ripples => fd * (fc * PI * u).sin() * (fc * v).cos(),
            DesignMode::Spirals => fd * (fc * (v + PI * u)).sin(),
            DesignMode::Ridges => fd * (fc * v).sin().abs(),
            DesignMode::Crosshatch => fd * ((fc * PI * u).sin().abs() + (fc * v).sin().abs()),
            DesignMode::DoubleSine => fd * (fc * (v + u)).sin() * (fc * (v - u)).sin(),
            DesignMode::TwistedPulse => fd * (fc * (v + 0.5 * (TAU * u).sin())).sin(),
            DesignMode::Weave => fd * ((fc * v).sin().abs() - (fc * PI * u).sin().abs()),
            DesignMode::Moire => fd * 0.5 * ((fc * v).sin() + ((fc + 1.0) * v + TAU * u).sin()),
            DesignMode::Michelin => fd * 0.7 * (fc * TAU * u).cos(),
            DesignMode::MichelinSpitz => {
                let phase = fc * u;
                fd * 0.8 * (2.0 * (phase - (phase + 0.5).floor())).abs()
            }
            DesignMode::MichelinSpiral => fd * 0.9 * (fc * PI * u + v).sin().abs(),
            DesignMode::Shards => fd * shard(u, v, fc),
        }
    }
}

/// Noise value in `[0, 1]` held constant over each cell of a
/// `SHARD_ROWS x SHARD_COLUMNS` grid; sectors wrap around the circumference.
fn shard(u: f64, v: f64, count: f64) -> f64 {
    let row = (u.clamp(0.0, 1.0) * SHARD_ROWS).floor().min(SHARD_ROWS - 1.0);
    let column = (v / TAU * SHARD_COLUMNS).floor().rem_euclid(SHARD_COLUMNS);
    let scale = SHARD_FREQUENCY * count.max(1.0);
    value_noise(row * scale + 0.5, column * scale + 0.5, SHARD_SEED)
}

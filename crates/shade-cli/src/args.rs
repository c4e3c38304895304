//! Building a parameter snapshot from the command line.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shade_design::{
    design_file, random, DesignMode, DesignParameters, Interpolation, MountGeometry,
    ParameterRanges,
};
use tracing::debug;

/// Design values, resolved as: defaults, then `--design`, then `--random`,
/// then the individual flags.
#[derive(Args, Debug, Clone, Default)]
pub struct DesignArgs {
    /// Start from a saved design file
    #[arg(long, value_name = "FILE")]
    pub design: Option<PathBuf>,

    /// Draw random diameters, height, count, mode and interpolation
    #[arg(long)]
    pub random: bool,

    /// Seed for --random
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,

    /// Top opening diameter (mm)
    #[arg(long)]
    pub top: Option<f64>,

    /// Diameter at mid height (mm)
    #[arg(long)]
    pub middle: Option<f64>,

    /// Bottom rim diameter (mm)
    #[arg(long)]
    pub bottom: Option<f64>,

    /// Body height (mm)
    #[arg(long)]
    pub height: Option<f64>,

    /// Surface pattern, by name or index (e.g. `spirals` or `2`)
    #[arg(long)]
    pub mode: Option<DesignMode>,

    /// Pattern repetitions
    #[arg(long)]
    pub count: Option<u32>,

    /// Pattern amplitude (mm); clamped to what the diameters allow
    #[arg(long)]
    pub depth: Option<f64>,

    /// Samples per ring and rings per grid
    #[arg(long)]
    pub detail: Option<usize>,

    /// Profile curve: bezier, lagrange or linear
    #[arg(long)]
    pub interpolation: Option<Interpolation>,

    /// Transition overhang angle (degrees)
    #[arg(long)]
    pub overhang: Option<f64>,

    /// Accept values outside the usual slider ranges
    #[arg(long)]
    pub no_range_check: bool,
}

impl DesignArgs {
    pub fn resolve(&self, mount: &MountGeometry) -> Result<DesignParameters> {
        let ranges = ParameterRanges::DEFAULT;
        let mut params = DesignParameters::default();

        if let Some(path) = &self.design {
            params = design_file::load(path, &params, mount)
                .with_context(|| format!("Failed to load design from {}", path.display()))?;
        }
        if self.random {
            let mut rng = match self.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            params = random::randomize(&params, &mut rng, &ranges, mount);
        }
        self.apply_overrides(&mut params);

        params.validate(mount)?;
        let params = params.clamped(mount);
        if !self.no_range_check {
            ranges
                .check(&params, mount)
                .context("Design is outside the slider ranges (pass --no-range-check to accept it)")?;
        }
        debug!(?params, "resolved design");
        Ok(params)
    }

    fn apply_overrides(&self, params: &mut DesignParameters) {
        if let Some(v) = self.top {
            params.top_diameter = v;
        }
        if let Some(v) = self.middle {
            params.middle_diameter = v;
        }
        if let Some(v) = self.bottom {
            params.bottom_diameter = v;
        }
        if let Some(v) = self.height {
            params.cylinder_height = v;
        }
        if let Some(v) = self.mode {
            params.design_mode = v;
        }
        if let Some(v) = self.count {
            params.feature_count = v;
        }
        if let Some(v) = self.depth {
            params.feature_depth = v;
        }
        if let Some(v) = self.detail {
            params.detail = v;
        }
        if let Some(v) = self.interpolation {
            params.interpolation = v;
        }
        if let Some(v) = self.overhang {
            params.overhang_angle = v;
        }
    }
}

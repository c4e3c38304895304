//! shade save: write the resolved design as a design file.

use std::path::Path;

use anyhow::Result;
use shade_design::{design_file, MountGeometry};

use crate::args::DesignArgs;
use crate::{output, Cli};

pub fn run(design: &DesignArgs, out: Option<&Path>, cli: &Cli) -> Result<()> {
    let params = design.resolve(&MountGeometry::STAR_ORNAMENT)?;
    let path = output::target_path(out, &params.design_file_name());
    design_file::save(&params, &path)?;

    if output::is_json(cli.format) {
        output::print_json(&serde_json::json!({ "path": path.display().to_string() }), cli.quiet)?;
    } else if !cli.quiet {
        println!("Saved {}", path.display());
    }
    Ok(())
}

//! shade generate: build the mesh and write it as ASCII STL.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use shade_design::MountGeometry;
use shade_mesh::{export, generate};

use crate::args::DesignArgs;
use crate::{output, Cli};

#[derive(Serialize)]
struct GenerateReport {
    path: String,
    name: String,
    facets: usize,
    detail: usize,
}

pub fn run(design: &DesignArgs, out: Option<&Path>, cli: &Cli) -> Result<()> {
    let mount = MountGeometry::STAR_ORNAMENT;
    let params = design.resolve(&mount)?;
    let mesh = generate(&params).context("Failed to generate lampshade")?;

    let path = output::target_path(out, &params.stl_file_name());
    export(&mesh, &path)?;

    let report = GenerateReport {
        path: path.display().to_string(),
        name: mesh.name.clone(),
        facets: mesh.facet_count(),
        detail: mesh.detail(),
    };
    if output::is_json(cli.format) {
        output::print_json(&report, cli.quiet)?;
    } else if !cli.quiet {
        println!("Wrote {} facets to {}", report.facets, report.path);
    }
    Ok(())
}

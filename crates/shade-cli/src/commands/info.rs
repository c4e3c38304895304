//! shade info: show the resolved design and what it produces.

use anyhow::Result;
use serde::Serialize;
use shade_core::traits::BoundingBox;
use shade_design::{constraints, DerivedGeometry, DesignParameters, MountGeometry};
use shade_math::Aabb3;
use shade_mesh::generate;

use crate::args::DesignArgs;
use crate::{output, Cli};

#[derive(Serialize)]
struct DesignInfo {
    file_name: String,
    params: DesignParameters,
    mount: MountGeometry,
    derived: DerivedGeometry,
    facets: usize,
    bounds: BoundsInfo,
}

#[derive(Serialize)]
struct BoundsInfo {
    min: [f64; 3],
    max: [f64; 3],
    center: [f64; 3],
    dimensions: [f64; 3],
    /// Where the shade's axis meets the bed
    axis: [f64; 2],
}

pub fn run(design: &DesignArgs, cli: &Cli) -> Result<()> {
    let mount = MountGeometry::STAR_ORNAMENT;
    let params = design.resolve(&mount)?;
    let mesh = generate(&params)?;
    let (min, max) = mesh.bounding_box();
    let bounds = Aabb3::new(min, max);

    let info = DesignInfo {
        file_name: params.stl_file_name(),
        params,
        mount,
        derived: constraints::solve(&params, &mount),
        facets: mesh.facet_count(),
        bounds: BoundsInfo {
            min: min.to_array(),
            max: max.to_array(),
            center: bounds.center().to_array(),
            dimensions: bounds.extents().to_array(),
            axis: mesh.axis_origin().truncate().to_array(),
        },
    };

    if output::is_json(cli.format) {
        return output::print_json(&info, cli.quiet);
    }
    if cli.quiet {
        return Ok(());
    }

    let p = &info.params;
    println!("Design {}", info.file_name);
    println!("  Diameters: top {} / middle {} / bottom {} mm", p.top_diameter, p.middle_diameter, p.bottom_diameter);
    println!("  Height: {} mm", p.cylinder_height);
    println!("  Pattern: {} x{} depth {:.2} mm", p.design_mode, p.feature_count, p.feature_depth);
    println!("  Profile: {}", p.interpolation);
    println!("  Detail: {}", p.detail);
    println!("  Overhang: {} deg", p.overhang_angle);
    println!("Derived");
    println!("  Transition width: {:.3} mm", info.derived.transition_width);
    println!("  Transition height: {:.3} mm", info.derived.transition_height);
    println!("  Max feature depth: {:.3} mm", info.derived.feature_depth_max);
    println!("Mesh");
    println!("  Facets: {}", info.facets);
    let [dx, dy, dz] = info.bounds.dimensions;
    println!("  Size: {dx:.2} x {dy:.2} x {dz:.2} mm");
    let [ax, ay] = info.bounds.axis;
    println!("  Axis at: ({ax:.2}, {ay:.2}) mm");
    Ok(())
}

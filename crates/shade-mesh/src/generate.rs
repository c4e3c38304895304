//! One-shot generation of the printable shell from a parameter snapshot.

use std::sync::atomic::AtomicBool;

use shade_core::traits::Validate;
use shade_core::Result;
use shade_design::{constraints, DesignParameters, MountGeometry};
use shade_geometry::surface::{MountSleeve, Transition};
use shade_geometry::{try_sample_grid, RowOrder};
use tracing::{debug, info};

use crate::LampshadeMesh;

/// Build the mesh for `params` around the star ornament mount.
pub fn generate(params: &DesignParameters) -> Result<LampshadeMesh> {
    generate_with(params, &MountGeometry::STAR_ORNAMENT, None)
}

/// Build the mesh for `params` around `mount`.
///
/// The feature depth is clamped before sampling. Setting `cancel` makes the
/// call return [`ShadeError::Cancelled`](shade_core::ShadeError::Cancelled)
/// at the next row boundary.
pub fn generate_with(
    params: &DesignParameters,
    mount: &MountGeometry,
    cancel: Option<&AtomicBool>,
) -> Result<LampshadeMesh> {
    params.validate(mount)?;
    let params = params.clamped(mount);
    let derived = constraints::solve(&params, mount);
    debug!(
        transition_width = derived.transition_width,
        transition_height = derived.transition_height,
        feature_depth_max = derived.feature_depth_max,
        "derived geometry"
    );

    let d = params.detail;
    let body = params.body();
    let transition = Transition::new(body, mount.outer_radius(), derived.transition_height);
    let sleeve = MountSleeve::new(mount.outer_radius(), transition.top_height(), mount.height);

    let body_grid = try_sample_grid(&body, d, d, RowOrder::TopDown, cancel)?;
    let transition_grid = try_sample_grid(&transition, d, d, RowOrder::BottomUp, cancel)?;
    let sleeve_grid = try_sample_grid(&sleeve, 1, d, RowOrder::BottomUp, cancel)?;

    let mesh = LampshadeMesh::new(
        params.file_stem(),
        body_grid,
        body.bottom_center(),
        transition_grid,
        sleeve_grid,
        sleeve.top_center(),
    );
    mesh.validate()?;

    info!(
        name = %mesh.name,
        mode = %params.design_mode,
        detail = d,
        facets = mesh.facet_count(),
        "lampshade generated"
    );
    Ok(mesh)
}

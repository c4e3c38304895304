use std::fs;

use shade_core::ShadeError;
use shade_design::{design_file, DesignMode, DesignParameters, Interpolation, MountGeometry};
use shade_mesh::{export, facet_count_for_detail, generate};

fn odd_design() -> DesignParameters {
    DesignParameters {
        top_diameter: 31.7,
        middle_diameter: 68.25,
        bottom_diameter: 57.125,
        cylinder_height: 77.5,
        design_mode: DesignMode::Spirals,
        feature_count: 5,
        feature_depth: 1.37,
        detail: 16,
        interpolation: Interpolation::Lagrange,
        overhang_angle: 42.5,
    }
}

#[test]
fn test_export_writes_named_solid() {
    let dir = tempfile::tempdir().unwrap();
    let params = DesignParameters {
        detail: 10,
        ..DesignParameters::default()
    };
    let mesh = generate(&params).unwrap();
    let path = dir.path().join(params.stl_file_name());
    export(&mesh, &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(path.ends_with("1_30_70_60_80_6_2.00_10.stl"));
    assert!(text.starts_with("solid 1_30_70_60_80_6_2.00_10\n"));
    assert!(text.ends_with("endsolid 1_30_70_60_80_6_2.00_10\n"));
    assert_eq!(text.matches("endfacet").count(), facet_count_for_detail(10));
}

#[test]
fn test_export_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shade.stl");
    fs::write(&path, "stale contents that are longer than nothing").unwrap();

    let mesh = generate(&DesignParameters {
        detail: 3,
        ..DesignParameters::default()
    })
    .unwrap();
    export(&mesh, &path).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert!(!text.contains("stale"));
    assert_eq!(text.matches("endfacet").count(), 48);
}

#[test]
fn test_export_reports_unwritable_path() {
    let dir = tempfile::tempdir().unwrap();
    let mesh = generate(&DesignParameters {
        detail: 3,
        ..DesignParameters::default()
    })
    .unwrap();

    // A directory cannot be opened as the output file.
    let err = export(&mesh, dir.path()).unwrap_err();
    assert!(matches!(err, ShadeError::ExportIo { .. }));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_design_round_trip_regenerates_same_mesh() {
    let dir = tempfile::tempdir().unwrap();
    let params = odd_design();
    let path = dir.path().join(params.design_file_name());

    let before: Vec<_> = generate(&params).unwrap().facets().collect();
    design_file::save(&params, &path).unwrap();
    let loaded = design_file::load(
        &path,
        &DesignParameters::default(),
        &MountGeometry::STAR_ORNAMENT,
    )
    .unwrap();
    assert_eq!(loaded, params);

    let after: Vec<_> = generate(&loaded).unwrap().facets().collect();
    assert_eq!(before, after);
}

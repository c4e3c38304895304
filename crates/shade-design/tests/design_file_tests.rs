use std::fs;

use shade_core::ShadeError;
use shade_design::{design_file, DesignMode, DesignParameters, Interpolation, MountGeometry};

const MOUNT: MountGeometry = MountGeometry::STAR_ORNAMENT;

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let params = DesignParameters {
        top_diameter: 44.5,
        design_mode: DesignMode::MichelinSpiral,
        interpolation: Interpolation::Linear,
        feature_depth: 3.25,
        ..DesignParameters::default()
    };
    let path = dir.path().join(params.design_file_name());
    design_file::save(&params, &path).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "44.5,70,60,80,6,3.25,120,30,11,2\n"
    );
    let loaded = design_file::load(&path, &DesignParameters::default(), &MOUNT).unwrap();
    assert_eq!(loaded, params);
}

#[test]
fn test_load_nine_field_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.txt");
    fs::write(&path, "\n40,90,80,100,4,1.5,60,45,3\n").unwrap();

    let base = DesignParameters {
        interpolation: Interpolation::Lagrange,
        ..DesignParameters::default()
    };
    let loaded = design_file::load(&path, &base, &MOUNT).unwrap();
    assert_eq!(loaded.top_diameter, 40.0);
    assert_eq!(loaded.detail, 60);
    assert_eq!(loaded.overhang_angle, 45.0);
    assert_eq!(loaded.design_mode, DesignMode::Ridges);
    assert_eq!(loaded.interpolation, Interpolation::Lagrange);
}

#[test]
fn test_load_clamps_depth() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deep.txt");
    fs::write(&path, "19.5,70,60,80,6,3.9,120,30,1,0").unwrap();

    let loaded = design_file::load(&path, &DesignParameters::default(), &MOUNT).unwrap();
    assert_eq!(loaded.feature_depth, 3.25);
}

#[test]
fn test_short_record_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.txt");
    fs::write(&path, "30,70,60,80,6,2,120,30").unwrap();

    let err = design_file::load(&path, &DesignParameters::default(), &MOUNT).unwrap_err();
    assert!(matches!(err, ShadeError::MalformedDesignFile(_)));
}

#[test]
fn test_bad_token_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(&path, "30,70,sixty,80,6,2,120,30,1").unwrap();

    match design_file::load(&path, &DesignParameters::default(), &MOUNT) {
        Err(ShadeError::MalformedDesignFile(msg)) => assert!(msg.contains("bottomDiameter")),
        other => panic!("expected MalformedDesignFile, got {other:?}"),
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = design_file::load(
        &dir.path().join("absent.txt"),
        &DesignParameters::default(),
        &MOUNT,
    )
    .unwrap_err();
    assert!(matches!(err, ShadeError::Io(_)));
}

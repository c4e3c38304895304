//! ASCII STL output.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use shade_core::{Result, ShadeError};
use tracing::info;

use crate::{Facet, LampshadeMesh};

fn write_facet<W: Write>(writer: &mut W, facet: &Facet) -> io::Result<()> {
    let n = facet.normal;
    writeln!(writer, "  facet normal {:.6e} {:.6e} {:.6e}", n.x, n.y, n.z)?;
    writeln!(writer, "    outer loop")?;
    for v in &facet.vertices {
        writeln!(writer, "      vertex {:.6e} {:.6e} {:.6e}", v.x, v.y, v.z)?;
    }
    writeln!(writer, "    endloop")?;
    writeln!(writer, "  endfacet")
}

/// Stream `mesh` as ASCII STL, returning the number of facets written.
///
/// Stops at the first write error.
pub fn write_stl<W: Write>(mesh: &LampshadeMesh, mut writer: W) -> io::Result<usize> {
    writeln!(writer, "solid {}", mesh.name)?;
    let mut count = 0;
    for facet in mesh.facets() {
        write_facet(&mut writer, &facet)?;
        count += 1;
    }
    writeln!(writer, "endsolid {}", mesh.name)?;
    Ok(count)
}

/// Write `mesh` to `path`, replacing any existing file.
pub fn export(mesh: &LampshadeMesh, path: &Path) -> Result<()> {
    let fail = |source: io::Error| ShadeError::ExportIo {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(fail)?;
    let mut writer = BufWriter::new(file);
    let facets = write_stl(mesh, &mut writer).map_err(fail)?;
    writer.flush().map_err(fail)?;

    info!(path = %path.display(), facets, "exported STL");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shade_design::DesignParameters;

    fn small_mesh() -> LampshadeMesh {
        let params = DesignParameters {
            detail: 4,
            ..DesignParameters::default()
        };
        crate::generate(&params).unwrap()
    }

    #[test]
    fn test_header_and_trailer() {
        let mesh = small_mesh();
        let mut buf = Vec::new();
        let count = write_stl(&mesh, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(count, 80);
        assert_eq!(lines[0], "solid 1_30_70_60_80_6_2.00_4");
        assert_eq!(*lines.last().unwrap(), "endsolid 1_30_70_60_80_6_2.00_4");
        assert_eq!(lines.len(), 2 + 7 * count);
        assert_eq!(text.matches("facet normal").count(), count);
        assert_eq!(text.matches("vertex ").count(), 3 * count);
    }

    #[test]
    fn test_facet_block_layout() {
        let mesh = small_mesh();
        let mut buf = Vec::new();
        write_stl(&mesh, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let block: Vec<&str> = text.lines().skip(1).take(7).collect();

        assert!(block[0].starts_with("  facet normal "));
        assert_eq!(block[1], "    outer loop");
        assert!(block[2..5].iter().all(|l| l.starts_with("      vertex ")));
        assert_eq!(block[5], "    endloop");
        assert_eq!(block[6], "  endfacet");
        let coords: Vec<f64> = block[2]
            .split_whitespace()
            .skip(1)
            .map(|s| s.parse().unwrap())
            .collect();
        assert_eq!(coords.len(), 3);
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_error_propagates() {
        let err = write_stl(&small_mesh(), FailingWriter).unwrap_err();
        assert_eq!(err.to_string(), "disk full");
    }

    #[test]
    fn test_export_to_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("shade.stl");
        match export(&small_mesh(), &path) {
            Err(ShadeError::ExportIo { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected ExportIo, got {other:?}"),
        }
    }
}

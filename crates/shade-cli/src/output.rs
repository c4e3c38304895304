use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;

use crate::OutputFormat;

/// Print `value` as pretty JSON unless `quiet`.
pub fn print_json<T: Serialize>(value: &T, quiet: bool) -> Result<()> {
    if !quiet {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

pub fn is_json(format: OutputFormat) -> bool {
    matches!(format, OutputFormat::Json)
}

/// Resolve `-o`: missing means `file_name` in the working directory, an
/// existing directory means `file_name` inside it.
pub fn target_path(output: Option<&Path>, file_name: &str) -> PathBuf {
    match output {
        Some(path) if path.is_dir() => path.join(file_name),
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(file_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_path() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(target_path(None, "a.stl"), PathBuf::from("a.stl"));
        assert_eq!(target_path(Some(dir.path()), "a.stl"), dir.path().join("a.stl"));
        let file = dir.path().join("b.stl");
        assert_eq!(target_path(Some(&file), "a.stl"), file);
    }
}

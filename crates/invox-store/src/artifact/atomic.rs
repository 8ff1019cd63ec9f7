//! Atomic publish primitives
//!
//! Artifacts become visible only through temp→rename, so no partial write is
//! ever observable at the final path. Staging and promotion are split: the
//! emitter stages on a worker thread and the coordinator promotes only after
//! it has observed a timely success.

#![allow(clippy::result_large_err)]

use crate::errors::{io_error, Result};
use std::fs;
use std::path::Path;

/// Write content to a staging path, creating the parent directory if needed
pub fn stage_write(temp_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = temp_path.parent() {
        fs::create_dir_all(parent).map_err(|e| io_error("create_artifact_dir", e))?;
    }

    fs::write(temp_path, content).map_err(|e| io_error("write_artifact_temp", e))?;

    Ok(())
}

/// Atomically rename a staged file to its final path
pub fn promote(temp_path: &Path, target_path: &Path) -> Result<()> {
    fs::rename(temp_path, target_path).map_err(|e| io_error("rename_artifact_temp", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_stage_then_promote() {
        let temp_dir = TempDir::new().unwrap();
        let staged = temp_dir.path().join("test.json.tmp");
        let target = temp_dir.path().join("test.json");

        stage_write(&staged, b"{}").unwrap();
        assert!(!target.exists());

        promote(&staged, &target).unwrap();

        let content = fs::read(&target).unwrap();
        assert_eq!(content, b"{}");
    }

    #[test]
    fn test_stage_write_creates_parent() {
        let temp_dir = TempDir::new().unwrap();
        let staged = temp_dir.path().join("subdir").join("test.json.tmp");

        stage_write(&staged, b"nested").unwrap();

        let content = fs::read(&staged).unwrap();
        assert_eq!(content, b"nested");
    }

    #[test]
    fn test_no_tmp_files_after_promote() {
        let temp_dir = TempDir::new().unwrap();
        let staged = temp_dir.path().join("test.json.tmp");
        let target = temp_dir.path().join("test.json");

        stage_write(&staged, b"clean").unwrap();
        promote(&staged, &target).unwrap();

        // Check no .tmp files remain
        let tmp_count = fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.file_name()
                    .to_str()
                    .map(|s| s.ends_with(".tmp"))
                    .unwrap_or(false)
            })
            .count();

        assert_eq!(tmp_count, 0);
    }

    #[test]
    fn test_promote_missing_staged_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let staged = temp_dir.path().join("missing.tmp");
        let target = temp_dir.path().join("test.json");

        let result = promote(&staged, &target);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().code(), "ERR_IO");
    }
}

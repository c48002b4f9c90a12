//! File system utilities.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Writes `content` to `path` through a sibling temp file and a rename.
///
/// An interrupted export never leaves a half-written file at `path`.
/// The temp file is removed again when the rename fails.
pub fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = temp_path_for(path);

    fs::write(&temp_path, content)?;

    if let Err(err) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }

    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path.file_name().unwrap_or_default().to_string_lossy();
    parent.join(format!(".{file_name}.tmp"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_replaces_previous_export() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("result.csv");

        fs::write(&file_path, "old,data\n").unwrap();
        atomic_write(&file_path, "Date,Close\n2024-01-02,185.64\n").unwrap();

        let content = fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "Date,Close\n2024-01-02,185.64\n");
        assert!(!temp_dir.path().join(".result.csv.tmp").exists());
    }

    #[test]
    fn test_atomic_write_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("missing").join("result.csv");

        assert!(atomic_write(&file_path, "x").is_err());
        assert!(!file_path.exists());
    }

    #[test]
    fn test_temp_path_for_bare_file_name() {
        assert_eq!(
            temp_path_for(Path::new("out.csv")),
            PathBuf::from("./.out.csv.tmp")
        );
    }
}

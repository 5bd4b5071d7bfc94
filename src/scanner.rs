use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{ExportError, Result};

/// List the files directly inside `dir` whose name ends with `suffix`.
///
/// Subdirectories are not descended into. Results are sorted by file name.
pub fn list_source_files(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            ExportError::Io {
                path,
                source: e.into(),
            }
        })?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        if !file_name.ends_with(suffix) {
            continue;
        }

        files.push(path.to_path_buf());
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_list_only_matching_suffix() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("A.java"), "public enum A {}").unwrap();
        fs::write(dir.path().join("B.java"), "public enum B {}").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let files = list_source_files(dir.path(), ".java").unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_not_recursive() {
        let dir = TempDir::new().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();

        fs::write(dir.path().join("A.java"), "public enum A {}").unwrap();
        fs::write(sub.join("B.java"), "public enum B {}").unwrap();

        let files = list_source_files(dir.path(), ".java").unwrap();
        assert_eq!(files, vec![dir.path().join("A.java")]);
    }

    #[test]
    fn test_sorted_by_file_name() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Zeta.java"), "").unwrap();
        fs::write(dir.path().join("Alpha.java"), "").unwrap();
        fs::write(dir.path().join("Mid.java"), "").unwrap();

        let names: Vec<_> = list_source_files(dir.path(), ".java")
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["Alpha.java", "Mid.java", "Zeta.java"]);
    }
}

//! Recursive discovery of `.html` inputs under an archive root.

use std::fs;
use std::path::{Path, PathBuf};

use postpress_shared::{PostpressError, Result};

/// Extension of the downloaded post files.
const HTML_EXTENSION: &str = "html";

/// Recursively collect every `*.html` file under `root`.
///
/// Ordering is filesystem-dependent and not significant; callers must not
/// rely on it. An unreadable directory fails discovery as a whole, since a
/// partial file list would silently undercount the batch.
pub(crate) fn discover_html_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    walk(root, &mut files)?;
    Ok(files)
}

fn walk(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir).map_err(|e| PostpressError::io(dir, e))? {
        let entry = entry.map_err(|e| PostpressError::io(dir, e))?;
        let path = entry.path();
        if path.is_dir() {
            walk(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == HTML_EXTENSION) {
            files.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_html_files_recursively() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("letters/compiler-weekly");
        fs::create_dir_all(&nested).unwrap();

        fs::write(dir.path().join("top.html"), "<html></html>").unwrap();
        fs::write(nested.join("issue-1.html"), "<html></html>").unwrap();
        fs::write(nested.join("issue-1.md"), "already converted").unwrap();
        fs::write(nested.join("notes.txt"), "ignore me").unwrap();

        let mut found = discover_html_files(dir.path()).unwrap();
        found.sort();

        assert_eq!(
            found,
            vec![
                nested.join("issue-1.html"),
                dir.path().join("top.html"),
            ]
        );
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("does-not-exist");
        assert!(discover_html_files(&gone).is_err());
    }
}

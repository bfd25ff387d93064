//! Source-tree scanning.
//!
//! Walks a root directory for `.js` files in a stable order, skipping
//! hidden entries and the directories that never contain module
//! declarations worth mapping (build output, vendored code, tests).

use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

/// Directory names never descended into.
const EXCLUDED_DIRS: &[&str] = &["node_modules", "build", "dist", "vendor", "test", "tests"];

/// Errors raised while scanning the source tree.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The scan root does not exist or is not a directory.
    #[error("scan root `{0}` is not a directory")]
    InvalidRoot(PathBuf),

    /// The walk itself failed partway.
    #[error("failed to walk source tree: {0}")]
    Walk(#[from] walkdir::Error),
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn is_excluded_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .map(|name| EXCLUDED_DIRS.contains(&name))
            .unwrap_or(false)
}

fn is_js_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file()
        && entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("js"))
            .unwrap_or(false)
}

/// Collects every `.js` file under `root`, sorted by file name at each
/// level so the scan order is independent of filesystem enumeration.
///
/// # Example
///
/// ```rust,no_run
/// use std::path::Path;
/// use modscope::scan::collect_files;
///
/// let files = collect_files(Path::new("src/js")).unwrap();
/// for file in &files {
///     println!("{}", file.display());
/// }
/// ```
pub fn collect_files(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::InvalidRoot(root.to_path_buf()));
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            entry.depth() == 0 || (!is_hidden(entry) && !is_excluded_dir(entry))
        });

    for entry in walker {
        let entry = entry?;
        if is_js_file(&entry) {
            files.push(entry.path().to_path_buf());
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "").unwrap();
    }

    fn relative_names(root: &Path, files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|f| {
                f.strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_collects_only_js_files() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("app.js"));
        touch(&dir.path().join("readme.md"));
        touch(&dir.path().join("style.css"));

        let files = collect_files(dir.path()).unwrap();
        assert_eq!(relative_names(dir.path(), &files), vec!["app.js"]);
    }

    #[test]
    fn test_descends_into_subdirectories() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("app.js"));
        touch(&dir.path().join("lib/player.js"));
        touch(&dir.path().join("lib/audio/engine.js"));

        let files = collect_files(dir.path()).unwrap();
        assert_eq!(
            relative_names(dir.path(), &files),
            vec!["app.js", "lib/audio/engine.js", "lib/player.js"]
        );
    }

    #[test]
    fn test_skips_excluded_directories() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("app.js"));
        touch(&dir.path().join("node_modules/dep/index.js"));
        touch(&dir.path().join("build/out.js"));
        touch(&dir.path().join("tests/app_test.js"));

        let files = collect_files(dir.path()).unwrap();
        assert_eq!(relative_names(dir.path(), &files), vec!["app.js"]);
    }

    #[test]
    fn test_skips_hidden_entries() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("app.js"));
        touch(&dir.path().join(".hidden.js"));
        touch(&dir.path().join(".git/hooks.js"));

        let files = collect_files(dir.path()).unwrap();
        assert_eq!(relative_names(dir.path(), &files), vec!["app.js"]);
    }

    #[test]
    fn test_sorted_order_within_each_level() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("zebra.js"));
        touch(&dir.path().join("alpha.js"));
        touch(&dir.path().join("mid.js"));

        let files = collect_files(dir.path()).unwrap();
        assert_eq!(
            relative_names(dir.path(), &files),
            vec!["alpha.js", "mid.js", "zebra.js"]
        );
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");

        let err = collect_files(&missing).unwrap_err();
        assert!(matches!(err, ScanError::InvalidRoot(_)));
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn test_file_root_is_an_error() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("app.js");
        touch(&file);

        assert!(matches!(
            collect_files(&file),
            Err(ScanError::InvalidRoot(_))
        ));
    }
}

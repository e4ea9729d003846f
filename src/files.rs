//! Discovery of root files and partial candidates
//!
//! The render core receives candidate sets pre-resolved; this module is the
//! collaborator that resolves them, expanding glob patterns under an input
//! directory and deriving each file's tag stem.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

/// Errors that can occur while discovering files
#[derive(Debug, Error)]
pub enum DiscoverError {
    /// The glob pattern itself is malformed
    #[error("invalid glob pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },

    /// A matched path could not be read while walking
    #[error("error walking files: {0}")]
    Walk(#[from] glob::GlobError),

    /// A matched path could not be resolved to a canonical path
    #[error("cannot resolve path {}: {source}", path.display())]
    Resolve { path: PathBuf, source: io::Error },
}

/// One file eligible to participate in a render
///
/// The stem is the base name up to the first `.`, so `card.partial.html`
/// answers to `<card>` tags. The path is canonical, which is what makes
/// self-exclusion and cycle tracking reliable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub path: PathBuf,
    pub stem: String,
}

impl FileInfo {
    /// Resolve `path` to its canonical form and derive the tag stem
    pub fn new(path: &Path) -> Result<Self, DiscoverError> {
        let canonical = path.canonicalize().map_err(|source| DiscoverError::Resolve {
            path: path.to_path_buf(),
            source,
        })?;
        let stem = tag_stem(&canonical);
        Ok(Self {
            path: canonical,
            stem,
        })
    }
}

fn tag_stem(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    name.split('.').next().unwrap_or("").to_string()
}

/// Expand `pattern` under `dir` and return a [`FileInfo`] for every
/// matching regular file whose canonical path is not in `exclude`.
pub fn discover(
    dir: &Path,
    pattern: &str,
    exclude: &[PathBuf],
) -> Result<Vec<FileInfo>, DiscoverError> {
    let full_pattern = format!("{}/{}", dir.display(), pattern);
    let paths = glob::glob(&full_pattern).map_err(|source| DiscoverError::Pattern {
        pattern: full_pattern.clone(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in paths {
        let path = entry?;
        if !path.is_file() {
            continue;
        }
        let file = FileInfo::new(&path)?;
        if exclude.contains(&file.path) {
            continue;
        }
        info!("found {}", file.path.display());
        files.push(file);
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_stem_is_name_up_to_first_dot() {
        assert_eq!(tag_stem(Path::new("/site/card.partial.html")), "card");
        assert_eq!(tag_stem(Path::new("/site/index.html")), "index");
        assert_eq!(tag_stem(Path::new("/site/plain")), "plain");
    }

    #[test]
    fn test_new_canonicalizes() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("nav.partial.html"), "<nav></nav>").unwrap();
        let relative = dir.path().join("./nav.partial.html");

        let file = FileInfo::new(&relative).unwrap();
        assert!(file.path.is_absolute());
        assert_eq!(file.stem, "nav");
    }

    #[test]
    fn test_new_missing_file_fails() {
        let result = FileInfo::new(Path::new("/definitely/not/here.html"));
        assert!(matches!(result, Err(DiscoverError::Resolve { .. })));
    }

    #[test]
    fn test_discover_matches_and_excludes() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "").unwrap();
        fs::write(dir.path().join("nav.partial.html"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        let index = FileInfo::new(&dir.path().join("index.html")).unwrap();
        let files = discover(dir.path(), "**/*.html", &[index.path.clone()]).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].stem, "nav");
    }

    #[test]
    fn test_discover_descends_into_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("widgets")).unwrap();
        fs::write(dir.path().join("widgets/button.html"), "").unwrap();
        fs::write(dir.path().join("index.html"), "").unwrap();

        let files = discover(dir.path(), "**/*.html", &[]).unwrap();
        let stems: Vec<&str> = files.iter().map(|f| f.stem.as_str()).collect();
        assert!(stems.contains(&"button"));
        assert!(stems.contains(&"index"));
    }

    #[test]
    fn test_discover_bad_pattern() {
        let dir = tempfile::tempdir().unwrap();
        let result = discover(dir.path(), "***", &[]);
        assert!(matches!(result, Err(DiscoverError::Pattern { .. })));
    }
}

//! html-stitcher - compose HTML documents from partial fragment files
//!
//! A directory of HTML fragments is stitched into complete documents by
//! treating custom tag names as inclusion points. A tag like
//! `<button label="Ok"></button>` pulls in `button.partial.html`, with the
//! tag's attributes substituted for `${label}`-style placeholders and the
//! tag's indentation re-applied to every included line.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use html_stitcher::{discover, stitch_to_string, FileInfo, StitchConfig};
//!
//! let config = StitchConfig::default();
//! let root = FileInfo::new(Path::new("site/index.html"))?;
//! let partials = discover(Path::new("site"), &config.partial_glob, &[root.path.clone()])?;
//!
//! let html = stitch_to_string(&root, &partials)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod error;
pub mod files;
pub mod output;
pub mod render;
pub mod scanner;

pub use config::{ConfigError, StitchConfig};
pub use error::ScanError;
pub use files::{discover, DiscoverError, FileInfo};
pub use output::{FileSink, OutputSink, StringSink};
pub use render::render;
pub use scanner::{Parameters, PartialTag};

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can abort a render tree
///
/// All of these are fatal to the current root file's render; bytes already
/// streamed to the sink are not rolled back.
#[derive(Debug, Error)]
pub enum StitchError {
    /// A structural scan error, with the file it occurred in
    #[error("{}: {source}", file.display())]
    Scan { file: PathBuf, source: ScanError },

    /// A matched tag name with no corresponding candidate file.
    ///
    /// The collector only searches for known candidate names, so this
    /// indicates an internal inconsistency rather than bad input.
    #[error("{}: no partial file matches <{name}>", file.display())]
    UnresolvedPartial { file: PathBuf, name: String },

    /// A file reached again while it is still being rendered
    #[error("cyclic inclusion: {}", format_chain(.chain))]
    CyclicInclusion { chain: Vec<PathBuf> },

    /// A read or write failure, with the file being rendered
    #[error("{}: {source}", file.display())]
    Io {
        file: PathBuf,
        source: std::io::Error,
    },
}

fn format_chain(chain: &[PathBuf]) -> String {
    chain
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Render `root` against `candidates` and return the composed document as
/// a string.
///
/// This is the main entry point for embedding. The CLI uses [`render`]
/// directly with a [`FileSink`] to stream to disk instead.
pub fn stitch_to_string(root: &FileInfo, candidates: &[FileInfo]) -> Result<String, StitchError> {
    let mut sink = StringSink::new();
    render(root, candidates, &mut sink)?;
    sink.close().map_err(|source| StitchError::Io {
        file: root.path.clone(),
        source,
    })?;
    Ok(sink.into_string())
}

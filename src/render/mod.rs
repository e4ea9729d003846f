//! Recursive composition of a root file with its partial includes
//!
//! Rendering one file is a single linear pass:
//!
//! 1. The file is read into a fresh in-memory buffer.
//! 2. (On recursion) the indentation string captured before the include tag
//!    is inserted after every newline, preserving nesting depth in the
//!    composed output.
//! 3. Each `${name}` parameter passed down from the parent occurrence is
//!    substituted into the buffer.
//! 4. The buffer is scanned for include tags named after the candidate
//!    files' stems. The file itself is excluded from that set, so its own
//!    tag is left as literal text.
//! 5. The occurrences are validated (no occurrence may start inside
//!    another's span) and ordered by position.
//! 6. Literal spans of the buffer are interleaved with recursively rendered
//!    partial output and streamed to the sink in document order.

pub mod buffer;
mod collect;

use std::path::PathBuf;

use tracing::{debug, info};

use crate::files::FileInfo;
use crate::output::OutputSink;
use crate::scanner::Parameters;
use crate::StitchError;

use buffer::FileBuffer;
pub use collect::{collect, validate};

/// Render `file`, resolving include tags against `candidates`, and stream
/// the composed document into `sink`.
///
/// The sink is left open; the caller closes it once the root invocation
/// returns. Bytes already written are not rolled back on error.
pub fn render(
    file: &FileInfo,
    candidates: &[FileInfo],
    sink: &mut dyn OutputSink,
) -> Result<(), StitchError> {
    let mut in_flight = Vec::new();
    render_partial(file, candidates, sink, &Parameters::new(), "", &mut in_flight)
}

fn render_partial(
    file: &FileInfo,
    candidates: &[FileInfo],
    sink: &mut dyn OutputSink,
    parameters: &Parameters,
    indent: &str,
    in_flight: &mut Vec<PathBuf>,
) -> Result<(), StitchError> {
    // Direct self-inclusion is blocked by the candidate set below; this
    // catches indirect cycles such as A -> B -> A before they recurse.
    if in_flight.contains(&file.path) {
        let mut chain = in_flight.clone();
        chain.push(file.path.clone());
        return Err(StitchError::CyclicInclusion { chain });
    }
    in_flight.push(file.path.clone());

    info!("rendering {}", file.path.display());
    debug!(?parameters, "substitution parameters");

    let mut buffer = FileBuffer::read(&file.path).map_err(|source| StitchError::Io {
        file: file.path.clone(),
        source,
    })?;
    buffer.apply_indent(indent);
    for (key, value) in parameters.iter() {
        buffer.substitute(key, value);
    }

    // A file is never a candidate for its own render; a tag matching the
    // file's own stem stays in the output as literal text.
    let recursion_set: Vec<&FileInfo> = candidates
        .iter()
        .filter(|candidate| candidate.path != file.path)
        .collect();

    let tags = collect(
        buffer.as_str(),
        recursion_set.iter().map(|candidate| candidate.stem.as_str()),
    )
    .map_err(|source| StitchError::Scan {
        file: file.path.clone(),
        source,
    })?;
    validate(&tags).map_err(|source| StitchError::Scan {
        file: file.path.clone(),
        source,
    })?;

    let mut resume = 0;
    for tag in &tags {
        let partial = recursion_set
            .iter()
            .copied()
            .find(|candidate| candidate.stem == tag.name)
            .ok_or_else(|| StitchError::UnresolvedPartial {
                file: file.path.clone(),
                name: tag.name.clone(),
            })?;

        sink.write(&buffer.as_str()[resume..tag.span.start])
            .map_err(|source| StitchError::Io {
                file: file.path.clone(),
                source,
            })?;
        render_partial(
            partial,
            candidates,
            sink,
            &tag.parameters,
            &tag.indent,
            in_flight,
        )?;
        resume = tag.span.end;
    }
    sink.write(&buffer.as_str()[resume..])
        .map_err(|source| StitchError::Io {
            file: file.path.clone(),
            source,
        })?;

    in_flight.pop();
    Ok(())
}

//! Collecting and validating partial occurrences within one buffer

use crate::error::ScanError;
use crate::scanner::{locate, PartialTag};

/// Find every occurrence of every candidate name in `buffer`, sorted
/// ascending by start offset.
///
/// For each name the search resumes just past the previous match's end, so
/// repeated includes of the same partial are all collected.
pub fn collect<'a, I>(buffer: &str, candidate_names: I) -> Result<Vec<PartialTag>, ScanError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut found = Vec::new();
    for name in candidate_names {
        let mut from = 0;
        while let Some(tag) = locate(buffer, name, from)? {
            from = tag.span.end;
            found.push(tag);
        }
    }
    found.sort_by_key(|tag| tag.span.start);
    Ok(found)
}

/// Reject any occurrence that starts strictly inside another occurrence's
/// span. Sibling occurrences, including directly adjacent ones, pass.
pub fn validate(tags: &[PartialTag]) -> Result<(), ScanError> {
    for outer in tags {
        for inner in tags {
            if inner.span.start > outer.span.start && inner.span.start < outer.span.end {
                return Err(ScanError::NestedPartial {
                    outer: outer.name.clone(),
                    outer_span: outer.span.clone(),
                    inner: inner.name.clone(),
                    inner_span: inner.span.clone(),
                });
            }
        }
    }
    Ok(())
}

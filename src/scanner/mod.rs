//! Locating partial include tags in buffer text
//!
//! A partial tag looks like `<name attr="value">inner</name>` where `name`
//! is the stem of a candidate file. The locator works on literal substring
//! matches for the open and close tokens; it is not an HTML parser and has
//! no notion of surrounding markup.

pub mod attrs;

use crate::error::{ScanError, Span};

/// Reserved parameter key holding the raw text between a tag's open and
/// close tokens.
pub const INNER_KEY: &str = "inner";

/// Insertion-ordered map of parameter names to string values.
///
/// Order matters: substitution applies each pair once, in this order,
/// which is the order the attributes were written in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    entries: Vec<(String, String)>,
}

impl Parameters {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any existing value for the same key
    pub fn set(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
    }

    /// Look up a parameter value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One located instance of a partial include tag
#[derive(Debug, Clone, PartialEq)]
pub struct PartialTag {
    /// Tag name, equal to the matched candidate file's stem
    pub name: String,
    /// Byte span of the full `<name ...>...</name>` element in the buffer
    pub span: Span,
    /// Attributes from the open tag plus the reserved `inner` entry
    pub parameters: Parameters,
    /// Whitespace (spaces and tabs) immediately preceding the open tag
    pub indent: String,
}

/// Search `buffer` from `from` for the next `<name ...>...</name>` element.
///
/// Returns `Ok(None)` when no open token exists past `from`. An open token
/// with no close token after it is a [`ScanError::MissingCloseTag`]; every
/// open occurrence must be closed.
pub fn locate(buffer: &str, name: &str, from: usize) -> Result<Option<PartialTag>, ScanError> {
    let open_token = format!("<{name}");
    let close_token = format!("</{name}>");

    let start = match buffer[from..].find(&open_token) {
        Some(offset) => from + offset,
        None => return Ok(None),
    };

    // The indentation string is the contiguous run of space/tab characters
    // directly before the open token. It is re-applied to every line of the
    // included file so nesting depth survives composition.
    let bytes = buffer.as_bytes();
    let mut ws_start = start;
    while ws_start > 0 && matches!(bytes[ws_start - 1], b' ' | b'\t') {
        ws_start -= 1;
    }
    let indent = buffer[ws_start..start].to_string();

    let close_offset =
        buffer[start..]
            .find(&close_token)
            .ok_or_else(|| ScanError::MissingCloseTag {
                name: name.to_string(),
                span: start..start + open_token.len(),
            })?;
    let end = start + close_offset + close_token.len();

    let element = &buffer[start..end];
    let close_start = element.len() - close_token.len();
    // The first '>' in the element ends the open tag. The close token
    // guarantees at least one exists.
    let open_end = element.find('>').map(|i| i + 1).unwrap_or(close_start);

    let inner = if open_end <= close_start {
        &element[open_end..close_start]
    } else {
        ""
    };
    let attr_region = if open_end > open_token.len() {
        &element[open_token.len()..open_end - 1]
    } else {
        ""
    };

    let mut parameters = attrs::parse_attributes(attr_region);
    parameters.set(INNER_KEY, inner);

    Ok(Some(PartialTag {
        name: name.to_string(),
        span: start..end,
        parameters,
        indent,
    }))
}

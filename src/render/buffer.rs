//! Mutable text buffer for one file during one render invocation

use std::io;
use std::path::Path;

/// Owns the text of one file occurrence while it is being rendered.
///
/// A fresh buffer is created per render invocation, even when the same
/// underlying file is rendered several times with different parameters.
#[derive(Debug)]
pub struct FileBuffer {
    contents: String,
}

impl FileBuffer {
    /// Read a file into a new buffer
    pub fn read(path: &Path) -> io::Result<Self> {
        Ok(Self {
            contents: std::fs::read_to_string(path)?,
        })
    }

    /// Create a buffer from text directly
    pub fn from_string(contents: String) -> Self {
        Self { contents }
    }

    pub fn as_str(&self) -> &str {
        &self.contents
    }

    /// Insert `indent` after every newline, so each line of an included
    /// file (except the first, which sits at the include tag's column
    /// already) inherits the column where the tag appeared.
    pub fn apply_indent(&mut self, indent: &str) {
        if indent.is_empty() {
            return;
        }
        self.contents = self.contents.replace('\n', &format!("\n{indent}"));
    }

    /// Replace every occurrence of `${key}` with `value`.
    ///
    /// A single pass per key: tokens inside `value` are emitted verbatim
    /// and not themselves resolved against `key`.
    pub fn substitute(&mut self, key: &str, value: &str) {
        let token = format!("${{{key}}}");
        self.contents = self.contents.replace(&token, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_apply_indent_after_each_newline() {
        let mut buffer = FileBuffer::from_string("line1\nline2\nline3".to_string());
        buffer.apply_indent("    ");
        assert_eq!(buffer.as_str(), "line1\n    line2\n    line3");
    }

    #[test]
    fn test_apply_empty_indent_is_noop() {
        let mut buffer = FileBuffer::from_string("line1\nline2".to_string());
        buffer.apply_indent("");
        assert_eq!(buffer.as_str(), "line1\nline2");
    }

    #[test]
    fn test_substitute_all_occurrences() {
        let mut buffer = FileBuffer::from_string("${name} and ${name}".to_string());
        buffer.substitute("name", "X");
        assert_eq!(buffer.as_str(), "X and X");
    }

    #[test]
    fn test_substitute_leaves_other_tokens() {
        let mut buffer = FileBuffer::from_string("${name} ${unset}".to_string());
        buffer.substitute("name", "X");
        assert_eq!(buffer.as_str(), "X ${unset}");
    }

    #[test]
    fn test_substitute_does_not_recurse_into_value() {
        let mut buffer = FileBuffer::from_string("${a}".to_string());
        buffer.substitute("a", "${a}");
        assert_eq!(buffer.as_str(), "${a}");
    }
}

//! Output sinks for composed documents
//!
//! The compositor streams output in document order through this trait, so
//! callers can direct a render at a file or collect it in memory without
//! the compositor knowing the difference.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Ordered consumer of rendered text
pub trait OutputSink {
    /// Append text to the sink
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Flush and finish the sink; called once after the root render returns
    fn close(&mut self) -> io::Result<()>;
}

/// Sink backed by a buffered file writer
pub struct FileSink {
    writer: BufWriter<File>,
}

impl FileSink {
    /// Create the target file, along with any missing parent directories
    pub fn create(path: &Path) -> io::Result<Self> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        Ok(Self {
            writer: BufWriter::new(File::create(path)?),
        })
    }
}

impl OutputSink for FileSink {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())
    }

    fn close(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Sink that accumulates output in memory, for embedding and tests
#[derive(Debug, Default)]
pub struct StringSink {
    contents: String,
}

impl StringSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.contents
    }

    pub fn into_string(self) -> String {
        self.contents
    }
}

impl OutputSink for StringSink {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.contents.push_str(text);
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_sink_accumulates_in_order() {
        let mut sink = StringSink::new();
        sink.write("one ").unwrap();
        sink.write("two").unwrap();
        sink.close().unwrap();
        assert_eq!(sink.as_str(), "one two");
    }

    #[test]
    fn test_file_sink_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/out.html");
        let mut sink = FileSink::create(&path).unwrap();
        sink.write("<html></html>").unwrap();
        sink.close().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<html></html>");
    }
}

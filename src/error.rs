//! Error types for partial tag scanning and validation

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in buffer text
pub type Span = std::ops::Range<usize>;

/// Structural errors found while scanning a buffer for partial tags
#[derive(Error, Debug)]
pub enum ScanError {
    /// An open tag with no matching close tag after it
    #[error("partial element <{name}> found without closing tag </{name}>")]
    MissingCloseTag { name: String, span: Span },

    /// A partial tag starting inside another partial tag's span
    #[error("partial <{outer}> cannot contain nested partial <{inner}>")]
    NestedPartial {
        outer: String,
        outer_span: Span,
        inner: String,
        inner_span: Span,
    },
}

impl ScanError {
    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        match self {
            ScanError::MissingCloseTag { name, span } => {
                Report::build(ReportKind::Error, filename, span.start)
                    .with_message(self.to_string())
                    .with_label(
                        Label::new((filename, span.clone()))
                            .with_message(format!("this <{}> is never closed", name))
                            .with_color(Color::Red),
                    )
                    .finish()
                    .write((filename, Source::from(source)), &mut buf)
                    .unwrap();
            }
            ScanError::NestedPartial {
                outer,
                outer_span,
                inner,
                inner_span,
            } => {
                Report::build(ReportKind::Error, filename, outer_span.start)
                    .with_message(self.to_string())
                    .with_label(
                        Label::new((filename, outer_span.clone()))
                            .with_message(format!("<{}> spans this range", outer))
                            .with_color(Color::Red),
                    )
                    .with_label(
                        Label::new((filename, inner_span.clone()))
                            .with_message(format!("<{}> starts inside it", inner))
                            .with_color(Color::Yellow),
                    )
                    .finish()
                    .write((filename, Source::from(source)), &mut buf)
                    .unwrap();
            }
        }
        String::from_utf8(buf).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_close_display() {
        let err = ScanError::MissingCloseTag {
            name: "frag".to_string(),
            span: 0..5,
        };
        assert_eq!(
            err.to_string(),
            "partial element <frag> found without closing tag </frag>"
        );
    }

    #[test]
    fn test_nested_display() {
        let err = ScanError::NestedPartial {
            outer: "outer".to_string(),
            outer_span: 0..30,
            inner: "inner".to_string(),
            inner_span: 7..22,
        };
        assert_eq!(
            err.to_string(),
            "partial <outer> cannot contain nested partial <inner>"
        );
    }

    #[test]
    fn test_format_produces_report() {
        let source = "<frag>\n";
        let err = ScanError::MissingCloseTag {
            name: "frag".to_string(),
            span: 0..5,
        };
        let report = err.format(source, "index.html");
        assert!(!report.is_empty());
    }
}

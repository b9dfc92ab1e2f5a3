//! Error types.
//!
//! Malformed markup is expected input, never an error: mismatched or missing
//! closers surface as unclosed events and residual stack entries. The only
//! fatal condition is asking the parser to scan past the end of the document.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ScanError {
    #[error("end line {end_line} is outside the document, which has {line_count} line(s)")]
    #[diagnostic(
        code(tagscan::scan::end_line_out_of_range),
        help("the end line is a zero-based inclusive bound; it must be less than the line count")
    )]
    EndLineOutOfRange { end_line: usize, line_count: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_both_bounds() {
        let err = ScanError::EndLineOutOfRange {
            end_line: 7,
            line_count: 3,
        };
        let text = err.to_string();
        assert!(text.contains('7'));
        assert!(text.contains('3'));
    }
}

//! Line-addressable document input.
//!
//! The parser never owns the text it scans; it reads lines through the
//! [`LineSource`] trait so editor buffers, ropes, or plain strings can all be
//! scanned without copying. [`TextDocument`] is the built-in implementation
//! over an owned string.

/// Read-only, line-addressable text. Line indices are zero-based.
pub trait LineSource {
    /// Total number of lines. A line is always present, even in an empty
    /// document (one empty line).
    fn line_count(&self) -> usize;

    /// The text of line `index`, without its terminator.
    ///
    /// Callers must keep `index < line_count()`.
    fn line(&self, index: usize) -> &str;
}

/// An owned text buffer with a precomputed line table.
#[derive(Debug, Clone)]
pub struct TextDocument {
    text: String,
    // Byte range of each line's content, terminator excluded.
    lines: Vec<(usize, usize)>,
}

impl TextDocument {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let lines = line_table(&text);
        Self { text, lines }
    }

    /// The full underlying text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// True if the caret sitting after `prefix_chars` characters of this
    /// document is inside an unterminated tag.
    pub fn caret_in_tag(&self, prefix_chars: usize) -> bool {
        let end = self
            .text
            .char_indices()
            .nth(prefix_chars)
            .map(|(b, _)| b)
            .unwrap_or(self.text.len());
        crate::caret::is_inside_tag(&self.text[..end])
    }
}

impl From<&str> for TextDocument {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl LineSource for TextDocument {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, index: usize) -> &str {
        let (start, end) = self.lines[index];
        &self.text[start..end]
    }
}

fn line_table(text: &str) -> Vec<(usize, usize)> {
    let mut lines = Vec::new();
    let mut start = 0;
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\n' {
            let end = if i > start && bytes[i - 1] == b'\r' {
                i - 1
            } else {
                i
            };
            lines.push((start, end));
            start = i + 1;
        }
        i += 1;
    }
    lines.push((start, text.len()));
    lines
}

//! The open-tag stack.
//!
//! An ordered sequence of the tags currently open at the scan position,
//! outermost first. The parser pushes on every opening tag and pops during
//! matching and mismatch recovery; whatever remains after a scan is the
//! document's structural context at the end line.

use serde::Serialize;

use crate::location::TextLocation;

/// An opening tag and where its name starts in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagRecord {
    pub name: String,
    pub line: usize,
    pub column: usize,
}

impl TagRecord {
    pub fn new(name: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            name: name.into(),
            line,
            column,
        }
    }

    /// Position of the first character of the tag name.
    pub fn start(&self) -> TextLocation {
        TextLocation::new(self.line, self.column)
    }

    /// Position just past the last character of the tag name.
    pub fn end(&self) -> TextLocation {
        TextLocation::new(self.line, self.column + self.name.chars().count())
    }

    /// Name equality as used for tag matching. An empty recorded name matches
    /// only an empty query; everything else is exact, case-sensitive string
    /// equality.
    pub fn matches(&self, name: &str) -> bool {
        if self.name.is_empty() {
            name.is_empty()
        } else {
            self.name == name
        }
    }
}

/// Stack of currently open tags, innermost last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagStack {
    records: Vec<TagRecord>,
}

impl TagStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a tag: appends a record at the innermost end.
    pub fn push(&mut self, name: impl Into<String>, line: usize, column: usize) {
        self.records.push(TagRecord::new(name, line, column));
    }

    /// Removes and returns the innermost record.
    pub fn pop(&mut self) -> Option<TagRecord> {
        self.records.pop()
    }

    /// The innermost record, if any.
    pub fn peek(&self) -> Option<&TagRecord> {
        self.records.last()
    }

    /// Whether any open tag matches `name`, searching innermost to outermost.
    ///
    /// The direction matters: matching must find the *nearest* same-named open
    /// tag, which is also the first one a linear scan from the innermost end
    /// encounters.
    pub fn contains(&self, name: &str) -> bool {
        self.records.iter().rev().any(|record| record.matches(name))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates outermost to innermost, in nesting order.
    pub fn iter(&self) -> impl Iterator<Item = &TagRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a TagStack {
    type Item = &'a TagRecord;
    type IntoIter = std::slice::Iter<'a, TagRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

//! tagscan: a line-oriented tag-matching parser for XML-like markup.
//!
//! Scans a document up to a given line, pairs opening tags with closing tags
//! (including tags spanning multiple lines), reports complete and unclosed
//! tags through a sink, and returns the hierarchy of tags still open at the
//! scan boundary. Built for editor features such as code folding and
//! scope-aware completion, where the markup is frequently malformed mid-edit
//! and the parser must recover rather than reject.
//!
//! This is not a validating XML parser: no DTDs, entities, namespaces, or
//! attribute parsing beyond the tag name.

pub use crate::caret::is_inside_tag;
pub use crate::document::{LineSource, TextDocument};
pub use crate::errors::ScanError;
pub use crate::location::TextLocation;
pub use crate::parser::{parse_tags, TagCollector, TagEvent, TagEventKind, TagSink};
pub use crate::stack::{TagRecord, TagStack};

pub mod caret;
pub mod cli;
pub mod document;
pub mod errors;
pub mod location;
pub mod parser;
pub mod rules;
pub mod stack;

//! The tag-matching parser.
//!
//! [`parse_tags`] scans a document from its first line up to an inclusive end
//! line, pairing opening tags with closing tags and recovering from mismatched
//! nesting without losing synchronization. Events are delivered synchronously
//! through a [`TagSink`] while the scan runs; the returned [`TagStack`] holds
//! every tag still open at the boundary, outermost first.
//!
//! The parser is stateless across calls. Callers re-parse from the document
//! start on each request; bounding `end_line` (for example to the visible
//! viewport) is the caller's responsibility on large documents.

use std::borrow::Cow;

use serde::Serialize;
use tracing::{debug, trace};

use crate::caret::is_inside_tag;
use crate::document::LineSource;
use crate::errors::ScanError;
use crate::location::TextLocation;
use crate::rules::{tag_bodies, tag_name_at};
use crate::stack::TagStack;

/// Receiver for tag events during a scan.
///
/// Both methods default to no-ops, so an implementation can listen to either
/// event class alone. `()` discards everything; [`TagCollector`] buffers the
/// events as values.
pub trait TagSink {
    /// A matched open/close pair. `start` is the opening tag's name position,
    /// `end` the closing tag's content position.
    fn complete_tag(&mut self, name: &str, start: TextLocation, end: TextLocation) {
        let _ = (name, start, end);
    }

    /// An open tag discarded while recovering from a mismatched closer, or
    /// otherwise abandoned. The span covers the tag's name.
    fn unclosed_tag(&mut self, name: &str, start: TextLocation, end: TextLocation) {
        let _ = (name, start, end);
    }
}

/// Discards all events.
impl TagSink for () {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TagEventKind {
    Complete,
    Unclosed,
}

/// A buffered tag event, as collected by [`TagCollector`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagEvent {
    pub kind: TagEventKind,
    pub name: String,
    pub start: TextLocation,
    pub end: TextLocation,
}

/// A sink that buffers every event in document order.
#[derive(Debug, Default)]
pub struct TagCollector {
    pub events: Vec<TagEvent>,
}

impl TagCollector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TagSink for TagCollector {
    fn complete_tag(&mut self, name: &str, start: TextLocation, end: TextLocation) {
        self.events.push(TagEvent {
            kind: TagEventKind::Complete,
            name: name.to_string(),
            start,
            end,
        });
    }

    fn unclosed_tag(&mut self, name: &str, start: TextLocation, end: TextLocation) {
        self.events.push(TagEvent {
            kind: TagEventKind::Unclosed,
            name: name.to_string(),
            start,
            end,
        });
    }
}

/// Parses tags from the document start through line `end_line` inclusive.
///
/// Complete and unclosed tags are reported through `sink` as they are
/// resolved; the returned stack holds the tags opened but never closed within
/// the range, in nesting order. Malformed markup is not an error: stray
/// closers are ignored and mismatches surface as unclosed events. The only
/// failure is an `end_line` at or past the document's line count, which
/// parses nothing.
pub fn parse_tags<L, S>(doc: &L, end_line: usize, sink: &mut S) -> Result<TagStack, ScanError>
where
    L: LineSource + ?Sized,
    S: TagSink + ?Sized,
{
    let line_count = doc.line_count();
    if end_line >= line_count {
        return Err(ScanError::EndLineOutOfRange {
            end_line,
            line_count,
        });
    }

    let mut stack = TagStack::new();
    let mut i = 0;
    while i <= end_line {
        let start_line = i;
        let mut text = Cow::Borrowed(doc.line(i));
        if !text.contains('<') {
            i += 1;
            continue;
        }

        if is_inside_tag(&text) {
            // The line ends inside an open tag: merge following lines until
            // the buffer's tag closes or the scan range runs out. Tags in the
            // merged region are reported on the starting line, with columns
            // in merged-buffer coordinates.
            let mut merged = text.into_owned();
            while is_inside_tag(&merged) && i < end_line {
                i += 1;
                merged.push_str(doc.line(i));
            }
            trace!(start_line, last_line = i, "merged multi-line tag");
            text = Cow::Owned(merged);
        }

        for body in tag_bodies(&text) {
            let trimmed = body.text.trim();
            let (name_offset, name) = tag_name_at(body.text);
            if trimmed.starts_with('/') {
                close_tag(&mut stack, name, start_line, body.offset, sink);
            } else if !trimmed.ends_with('/') {
                stack.push(name, start_line, body.offset + name_offset);
            }
            // Self-closing tags are neither pushed nor reported.
        }
        i += 1;
    }

    debug!(end_line, still_open = stack.len(), "tag scan finished");
    Ok(stack)
}

fn close_tag<S>(stack: &mut TagStack, name: &str, line: usize, body_offset: usize, sink: &mut S)
where
    S: TagSink + ?Sized,
{
    // A closer with no matching open anywhere in the stack is a stray:
    // no event, no state change.
    if !stack.contains(name) {
        return;
    }

    // Drain the opens this closer skips over, innermost first, then report
    // the match. Never the reverse: the closer always wins over intervening
    // opens. The contains check above guarantees the loop ends at a match.
    while let Some(record) = stack.pop() {
        if record.matches(name) {
            sink.complete_tag(
                &record.name,
                record.start(),
                TextLocation::new(line, body_offset),
            );
            break;
        }
        sink.unclosed_tag(&record.name, record.start(), record.end());
    }
}

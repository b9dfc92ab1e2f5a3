//! Text-scanning rules for tag extraction.
//!
//! Two small, pure rules replace what a single opaque regular expression would
//! do: [`tag_bodies`] finds the `<...>` occurrences in a chunk of text, and
//! [`tag_name_at`] picks the name token out of a body. Keeping them separate
//! keeps each auditable on its own, independent of the line-merging logic in
//! the parser.
//!
//! Offsets produced here count characters, matching the column coordinate
//! space of [`TextLocation`](crate::TextLocation).

/// A tag body: the text between `<` and `>`, and the character offset of its
/// first character within the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagBody<'a> {
    pub text: &'a str,
    pub offset: usize,
}

/// Iterates over the tag bodies in `text`.
///
/// A body starts right after a `<` whose next character is neither `!`
/// (comments and declarations are never tags) nor `>`, and runs up to the next
/// `>`. A trailing `<fragment` with no closing `>` yields nothing.
pub fn tag_bodies(text: &str) -> TagBodies<'_> {
    TagBodies {
        text,
        chars: text.char_indices(),
        pos: 0,
    }
}

pub struct TagBodies<'a> {
    text: &'a str,
    chars: std::str::CharIndices<'a>,
    // Character position of the next char `chars` will yield.
    pos: usize,
}

impl<'a> Iterator for TagBodies<'a> {
    type Item = TagBody<'a>;

    fn next(&mut self) -> Option<TagBody<'a>> {
        loop {
            // Advance to the next '<'.
            loop {
                let (_, c) = self.chars.next()?;
                self.pos += 1;
                if c == '<' {
                    break;
                }
            }

            let (start, first) = self.chars.next()?;
            self.pos += 1;
            if first == '!' || first == '>' {
                continue;
            }
            let offset = self.pos - 1;

            // Scan to the closing '>'. Running out of text means an
            // unterminated fragment, from which no tag is extracted.
            loop {
                let (end, c) = self.chars.next()?;
                self.pos += 1;
                if c == '>' {
                    return Some(TagBody {
                        text: &self.text[start..end],
                        offset,
                    });
                }
            }
        }
    }
}

/// The name token of a tag body and its character offset within the body.
///
/// The name is the first run starting at a character that is not `!`, `/`, or
/// whitespace, continuing while characters are neither `/` nor whitespace.
/// Bodies like `///` or whitespace-only carry no name token; those return an
/// empty name at offset 0.
pub fn tag_name_at(body: &str) -> (usize, &str) {
    let mut start: Option<(usize, usize)> = None; // (byte, char) of name start
    for (char_pos, (byte_pos, c)) in body.char_indices().enumerate() {
        match start {
            None => {
                if c != '!' && c != '/' && !c.is_whitespace() {
                    start = Some((byte_pos, char_pos));
                }
            }
            Some((start_byte, start_char)) => {
                if c == '/' || c.is_whitespace() {
                    return (start_char, &body[start_byte..byte_pos]);
                }
            }
        }
    }
    match start {
        Some((start_byte, start_char)) => (start_char, &body[start_byte..]),
        None => (0, ""),
    }
}

/// The name token of a tag body, offset discarded.
pub fn tag_name(body: &str) -> &str {
    tag_name_at(body).1
}

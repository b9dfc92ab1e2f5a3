//! Caret-in-tag predicate.

/// True iff text ending at the caret leaves a tag unterminated: the last `<`
/// in `prefix` occurs after the last `>`, or a `<` exists and `>` never does.
///
/// A pure function of the prefix text; no tag names are resolved. Used by
/// editors to suppress completions while the caret sits inside a tag.
pub fn is_inside_tag(prefix: &str) -> bool {
    match (prefix.rfind('<'), prefix.rfind('>')) {
        (Some(open), Some(close)) => open > close,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::is_inside_tag;

    #[test]
    fn inside_an_open_tag() {
        assert!(is_inside_tag("<fo"));
        assert!(is_inside_tag("text <config attr=\"v"));
        assert!(is_inside_tag("<a>text<b"));
    }

    #[test]
    fn outside_after_a_closed_tag() {
        assert!(!is_inside_tag("<foo>"));
        assert!(!is_inside_tag("<a>text</a> more"));
    }

    #[test]
    fn no_brackets_at_all() {
        assert!(!is_inside_tag(""));
        assert!(!is_inside_tag("plain text"));
        assert!(!is_inside_tag("ends with close >"));
    }
}

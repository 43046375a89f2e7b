//! Sanitization of feed-supplied text.
//!
//! Every displayable field coming off the feed passes through here before it
//! reaches the terminal. This is a rendering-boundary invariant: deal titles
//! are scraped from arbitrary pages and must not be able to emit control
//! sequences into the user's terminal.

/// Replace control characters (including ESC) with spaces.
pub fn sanitize_display(input: &str) -> String {
    input
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(sanitize_display("50% off wireless mouse"), "50% off wireless mouse");
    }

    #[test]
    fn test_escape_sequences_are_defused() {
        let hostile = "deal\x1b[2Jtitle";
        let clean = sanitize_display(hostile);
        assert!(!clean.contains('\x1b'));
        assert_eq!(clean, "deal [2Jtitle");
    }

    #[test]
    fn test_newlines_and_tabs_become_spaces() {
        assert_eq!(sanitize_display("a\nb\tc\r"), "a b c ");
    }

    #[test]
    fn test_unicode_is_preserved() {
        assert_eq!(sanitize_display("caf\u{e9} ☕"), "caf\u{e9} ☕");
    }
}

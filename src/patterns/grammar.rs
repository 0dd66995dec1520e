use regex::Regex;
use std::sync::OnceLock;

/// One terminal escape sequence: CSI, OSC (BEL or ST terminated), charset
/// selection (`ESC ( B`), or a two-byte cursor/keypad form (`ESC 7`, `ESC M`).
///
/// A lone ESC before ordinary text is not a sequence; the control pass drops
/// the ESC and the text after it survives.
pub const ESCAPE_SEQUENCE: &str =
    r"(?:\x1b\[[0-?]*[ -/]*[@-~]|\x1b\][^\x07\x1b]*(?:\x07|\x1b\\)|\x1b(?:[ -/]+[0-~]|[78=>DEHMZ]))";

/// C0/C1 control characters other than tab and newline.
const CONTROL_CHARS: &str = r"[\x00-\x08\x0b-\x1f\x7f-\x9f]";

/// Zero or more escape sequences. Inserted between literal characters so a
/// matcher survives arbitrary recoloring of the text it looks for.
pub fn gap() -> String {
    format!("{ESCAPE_SEQUENCE}*")
}

/// Whitespace that may be interleaved with escape sequences.
pub fn blank(include_newlines: bool) -> String {
    let ws = if include_newlines { r"\s" } else { r"[ \t]" };
    format!("(?:{ESCAPE_SEQUENCE}|{ws})*")
}

/// Escape `text` for use in a regex, allowing escape sequences between
/// every pair of characters.
pub fn literal(text: &str) -> String {
    let gap = gap();
    text.chars()
        .map(|c| regex::escape(c.encode_utf8(&mut [0u8; 4])))
        .collect::<Vec<_>>()
        .join(&gap)
}

fn escape_regex() -> &'static Regex {
    static ESCAPES: OnceLock<Regex> = OnceLock::new();
    ESCAPES.get_or_init(|| Regex::new(ESCAPE_SEQUENCE).expect("escape grammar is valid"))
}

fn control_regex() -> &'static Regex {
    static CONTROLS: OnceLock<Regex> = OnceLock::new();
    CONTROLS.get_or_init(|| Regex::new(CONTROL_CHARS).expect("control grammar is valid"))
}

/// Remove escape sequences, then any remaining control characters.
///
/// Newlines and tabs survive so multi-line responses keep their shape.
pub fn strip_escapes(text: &str) -> String {
    let without_sequences = escape_regex().replace_all(text, "");
    control_regex()
        .replace_all(&without_sequences, "")
        .into_owned()
}

/// Byte offset where the last `n` lines of `text` begin.
///
/// A single trailing newline does not count as an extra empty line, matching
/// how `tmux capture-pane -S -N` reports history.
pub fn tail_offset(text: &str, n: usize) -> usize {
    if n == 0 {
        return text.len();
    }
    let body = text.strip_suffix('\n').unwrap_or(text);
    body.rmatch_indices('\n')
        .nth(n - 1)
        .map(|(i, _)| i + 1)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_removes_sgr_codes() {
        let text = "\x1b[36mColored text\x1b[39m normal text";
        assert_eq!(strip_escapes(text), "Colored text normal text");
    }

    #[test]
    fn strip_removes_private_mode_and_erase_sequences() {
        let text = "\x1b[?25lhidden cursor\x1b[2K\x1b[?25h";
        assert_eq!(strip_escapes(text), "hidden cursor");
    }

    #[test]
    fn strip_removes_osc_title_sequences() {
        let text = "\x1b]0;copilot\x07before\x1b]2;title\x1b\\after";
        assert_eq!(strip_escapes(text), "beforeafter");
    }

    #[test]
    fn strip_removes_bell_and_null_but_keeps_layout() {
        let text = "Response\x07with\x1bcontrol\x00chars\n\tindented\r";
        assert_eq!(strip_escapes(text), "Responsewithcontrolchars\n\tindented");
    }

    #[test]
    fn strip_removes_two_byte_cursor_sequences() {
        assert_eq!(strip_escapes("\x1b7saved\x1b8\x1bMup\x1b="), "savedup");
    }

    #[test]
    fn strip_removes_charset_selection() {
        assert_eq!(strip_escapes("\x1b(Bplain\x1b)0"), "plain");
    }

    #[test]
    fn strip_preserves_unicode() {
        let text = "\x1b[1m日本語 café naïve 🚀\x1b[0m";
        assert_eq!(strip_escapes(text), "日本語 café naïve 🚀");
    }

    #[test]
    fn literal_tolerates_interleaved_escapes() {
        let re = Regex::new(&literal("[developer]")).unwrap();
        assert!(re.is_match("[developer]"));
        assert!(re.is_match("[dev\x1b[1melop\x1b[0mer]"));
        assert!(!re.is_match("[reviewer]"));
    }

    #[test]
    fn literal_escapes_regex_metacharacters() {
        let re = Regex::new(&literal("a.b?")).unwrap();
        assert!(re.is_match("a.b?"));
        assert!(!re.is_match("axb"));
    }

    #[test]
    fn tail_offset_selects_last_lines() {
        let text = "one\ntwo\nthree\n";
        assert_eq!(&text[tail_offset(text, 1)..], "three\n");
        assert_eq!(&text[tail_offset(text, 2)..], "two\nthree\n");
        assert_eq!(&text[tail_offset(text, 10)..], text);
    }

    #[test]
    fn tail_offset_without_trailing_newline() {
        let text = "one\ntwo\nthree";
        assert_eq!(&text[tail_offset(text, 1)..], "three");
        assert_eq!(&text[tail_offset(text, 3)..], text);
    }

    #[test]
    fn tail_offset_zero_lines_is_empty() {
        let text = "one\ntwo";
        assert_eq!(&text[tail_offset(text, 0)..], "");
    }
}

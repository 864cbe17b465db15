//! Emphasis tokenizer for the generated text.
//!
//! The model decorates its output with `*emphasis*` spans, `"quoted"` spans,
//! and `Heading:` lines. The tokenizer splits on the non-greedy pattern
//! `(\*.*?\*|".*?")` keeping the captured spans interleaved with the plain
//! text around them, then classifies each token. It is stateless and
//! idempotent per call; unbalanced delimiters are not repaired, only a
//! dangling leading or trailing one is trimmed.

use std::sync::OnceLock;

use crossterm::style::Stylize;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Plain,
    /// `*...*` span
    Emphasis,
    /// `"..."` span
    Quoted,
    /// Plain token ending in `:`
    Label,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub text: String,
}

impl Segment {
    fn new(kind: SegmentKind, text: &str) -> Self {
        Self {
            kind,
            text: text.to_string(),
        }
    }
}

fn span_regex() -> &'static Regex {
    static SPAN: OnceLock<Regex> = OnceLock::new();
    SPAN.get_or_init(|| Regex::new(r#"(\*.*?\*|".*?")"#).expect("span pattern compiles"))
}

/// Splits `text` into classified segments, delimiter spans interleaved with
/// the plain text between them (which may be empty at the edges).
pub fn tokenize(text: &str) -> Vec<Segment> {
    let mut parts: Vec<&str> = Vec::new();
    let mut last = 0;
    for m in span_regex().find_iter(text) {
        parts.push(&text[last..m.start()]);
        parts.push(m.as_str());
        last = m.end();
    }
    parts.push(&text[last..]);

    parts.into_iter().map(classify).collect()
}

fn classify(part: &str) -> Segment {
    let starts_star = part.starts_with('*');
    let ends_star = part.ends_with('*');
    let starts_quote = part.starts_with('"');
    let ends_quote = part.ends_with('"');

    if starts_star && ends_star {
        Segment::new(SegmentKind::Emphasis, strip_both(part))
    } else if starts_quote && ends_quote {
        Segment::new(SegmentKind::Quoted, strip_both(part))
    } else if starts_star || starts_quote {
        Segment::new(SegmentKind::Plain, &part[1..])
    } else if ends_star || ends_quote {
        Segment::new(SegmentKind::Plain, &part[..part.len() - 1])
    } else if part.ends_with(':') {
        Segment::new(SegmentKind::Label, part)
    } else {
        Segment::new(SegmentKind::Plain, part)
    }
}

// Both delimiters are single ASCII bytes; a lone delimiter strips to empty.
fn strip_both(part: &str) -> &str {
    if part.len() >= 2 {
        &part[1..part.len() - 1]
    } else {
        ""
    }
}

/// Renders segments with ANSI styling for the terminal.
pub fn render_ansi(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment.kind {
            SegmentKind::Plain => out.push_str(&segment.text),
            SegmentKind::Emphasis => {
                out.push_str(&segment.text.as_str().dark_magenta().bold().to_string())
            }
            SegmentKind::Quoted => {
                out.push_str(&segment.text.as_str().magenta().bold().to_string())
            }
            SegmentKind::Label => out.push_str(&segment.text.as_str().bold().to_string()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> Segment {
        Segment::new(SegmentKind::Plain, text)
    }

    #[test]
    fn splits_emphasis_quotes_and_trailing_colon() {
        let segments = tokenize("The *Quick* Brown \"Fox\":");
        assert_eq!(
            segments,
            vec![
                plain("The "),
                Segment::new(SegmentKind::Emphasis, "Quick"),
                plain(" Brown "),
                Segment::new(SegmentKind::Quoted, "Fox"),
                Segment::new(SegmentKind::Label, ":"),
            ]
        );
    }

    #[test]
    fn is_idempotent_on_undecorated_text() {
        let input = "Just plain words, nothing else here.";
        let segments = tokenize(input);
        assert_eq!(segments, vec![plain(input)]);
        let joined: String = segments.into_iter().map(|s| s.text).collect();
        assert_eq!(joined, input);
    }

    #[test]
    fn non_greedy_matching_keeps_spans_minimal() {
        let segments = tokenize("*a* and *b*");
        assert_eq!(
            segments,
            vec![
                plain(""),
                Segment::new(SegmentKind::Emphasis, "a"),
                plain(" and "),
                Segment::new(SegmentKind::Emphasis, "b"),
                plain(""),
            ]
        );
    }

    #[test]
    fn dangling_trailing_delimiter_is_trimmed_not_repaired() {
        let segments = tokenize("*a* tail*");
        assert_eq!(
            segments,
            vec![plain(""), Segment::new(SegmentKind::Emphasis, "a"), plain(" tail")]
        );
    }

    #[test]
    fn unmatched_delimiter_inside_a_token_is_left_alone() {
        let segments = tokenize("an un*balanced middle");
        assert_eq!(segments, vec![plain("an un*balanced middle")]);
    }

    #[test]
    fn label_lines_keep_their_colon() {
        let segments = tokenize("Verdict:");
        assert_eq!(segments, vec![Segment::new(SegmentKind::Label, "Verdict:")]);
    }
}

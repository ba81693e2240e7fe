//! Directive detection in free-form model output
//!
//! A directive is the pattern `CallTool: name(argument)` embedded anywhere in
//! model text. Matching is case-sensitive, single-shot, first match only;
//! this is deliberately not a grammar. Replies are cleaned (marker split,
//! markup-tag strip, trim) before any interpretation.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::tools::ToolKind;

/// Reply prefix that short-circuits tool dispatch
pub const DIRECT_ANSWER_PREFIX: &str = "Direct Answer:";

/// Prompt marker; everything up to and including its last occurrence is
/// dropped from raw model output
pub const RESPONSE_MARKER: &str = "Response:";

static DIRECTIVE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"CallTool:\s*(calculator|search)\((.*?)\)").unwrap());

static MARKUP_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

/// A parsed tool-invocation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub tool: ToolKind,
    pub argument: String,
}

/// Extract the first tool directive from model text, if any.
///
/// The argument is whitespace-trimmed and stripped of one matching pair of
/// surrounding straight or curly quotes.
pub fn parse_directive(text: &str) -> Option<Directive> {
    let captures = DIRECTIVE_RE.captures(text)?;
    let tool = ToolKind::from_token(captures.get(1)?.as_str())?;
    let argument = strip_quote_pair(captures.get(2)?.as_str().trim()).to_string();

    Some(Directive { tool, argument })
}

const QUOTE_PAIRS: &[(char, char)] = &[('"', '"'), ('\'', '\''), ('\u{201C}', '\u{201D}'), ('\u{2018}', '\u{2019}')];

/// Strip one matching pair of leading+trailing quotes (pure function).
fn strip_quote_pair(s: &str) -> &str {
    let mut chars = s.chars();
    let (Some(first), Some(last)) = (chars.next(), chars.next_back()) else {
        return s;
    };

    if QUOTE_PAIRS
        .iter()
        .any(|&(open, close)| first == open && last == close)
    {
        &s[first.len_utf8()..s.len() - last.len_utf8()]
    } else {
        s
    }
}

/// Clean raw model output before interpretation: keep only what follows the
/// last `Response:` marker, strip angle-bracket markup tags, trim.
///
/// Idempotent: cleaning already-cleaned text is a no-op.
pub fn clean_reply(raw: &str) -> String {
    let tail = match raw.rfind(RESPONSE_MARKER) {
        Some(idx) => &raw[idx + RESPONSE_MARKER.len()..],
        None => raw,
    };

    MARKUP_TAG_RE.replace_all(tail, "").trim().to_string()
}

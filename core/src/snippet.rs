//! Result presentation helpers: snippets, highlighting and score formatting.
//!
//! These work on the literal query words, not on stems, so a snippet points at
//! text the user actually typed.

use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

pub const SNIPPET_LENGTH: usize = 150;
const ELLIPSIS: &str = "...";

lazy_static! {
    static ref NON_WORD: Regex = Regex::new(r"\W+").expect("valid regex");
}

/// Lowercased query words split on non-word runs, empties dropped.
pub fn literal_terms(query: &str) -> Vec<String> {
    NON_WORD
        .split(&query.to_lowercase())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// A window of [`SNIPPET_LENGTH`] characters centered on the earliest
/// case-insensitive occurrence of any literal query term, or the head of the
/// text when no term occurs. Cut edges are marked with `...`.
pub fn snippet(text: &str, query: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let lowered = fold_case(&chars);

    // Fold the raw query words char by char too, so both sides agree on
    // characters whose full lowercase mapping is longer than one char.
    let first = NON_WORD
        .split(query)
        .filter(|t| !t.is_empty())
        .filter_map(|term| find_chars(&lowered, &fold_case(&term.chars().collect::<Vec<_>>())))
        .min();

    let (start, end) = match first {
        Some(pos) => (pos.saturating_sub(SNIPPET_LENGTH / 2), (pos + SNIPPET_LENGTH / 2).min(chars.len())),
        None => (0, SNIPPET_LENGTH.min(chars.len())),
    };

    let mut out = String::new();
    if start > 0 { out.push_str(ELLIPSIS); }
    out.extend(&chars[start..end]);
    if end < chars.len() { out.push_str(ELLIPSIS); }
    out
}

/// One lowercase char per input char, keeping positions aligned with the text.
fn fold_case(chars: &[char]) -> Vec<char> {
    chars.iter().map(|c| c.to_lowercase().next().unwrap_or(*c)).collect()
}

fn find_chars(haystack: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() { return None; }
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Wrap every case-insensitive occurrence of a literal query term in `<em>`.
pub fn highlight_terms(snippet: &str, terms: &[String]) -> String {
    let mut s = snippet.to_string();
    for t in terms {
        if t.trim().is_empty() { continue; }
        let pat = match RegexBuilder::new(&regex::escape(t)).case_insensitive(true).build() {
            Ok(p) => p,
            Err(_) => continue,
        };
        s = pat.replace_all(&s, |caps: &regex::Captures| format!("<em>{}</em>", &caps[0])).to_string();
    }
    s
}

pub fn format_score(score: f64) -> String {
    format!("{score:.4}")
}

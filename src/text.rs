//! Text splitting and small string utilities shared by the scorer and the
//! transformer.

use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

static PARAGRAPH_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\r?\n[ \t]*){2,}").unwrap());

/// An input string with the views every check needs, computed once.
#[derive(Debug, Clone)]
pub struct TextSample<'a> {
    pub text: &'a str,
    pub char_count: usize,
    pub word_count: usize,
    pub sentences: Vec<&'a str>,
    pub paragraphs: Vec<&'a str>,
}

impl<'a> TextSample<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            char_count: text.trim().chars().count(),
            word_count: word_count(text),
            sentences: split_sentences(text),
            paragraphs: split_paragraphs(text),
        }
    }

    /// Word count of each sentence, in order.
    pub fn sentence_lengths(&self) -> Vec<f64> {
        self.sentences
            .iter()
            .map(|s| word_count(s) as f64)
            .collect()
    }
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Sentences split on runs of `.`, `!` and `?`, trimmed, empties dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_SPLIT_RE
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Paragraphs split on blank lines, trimmed, empties dropped.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_SPLIT_RE
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Population variance. Zero for an empty slice.
pub fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n
}

pub fn context_around(text: &str, start: usize, end: usize, width: usize) -> String {
    let mid = (start + end) / 2;
    let half = width / 2;
    let ctx_start = mid.saturating_sub(half);
    let ctx_end = std::cmp::min(text.len(), mid + half);

    // Ensure we don't slice in the middle of a multi-byte char
    let ctx_start = snap_to_char_boundary(text, ctx_start, false);
    let ctx_end = snap_to_char_boundary(text, ctx_end, true);

    let snippet = text[ctx_start..ctx_end].replace('\n', " ");
    let prefix = if ctx_start > 0 { "..." } else { "" };
    let suffix = if ctx_end < text.len() { "..." } else { "" };
    format!("{prefix}{snippet}{suffix}")
}

/// Snap a byte offset to a valid char boundary.
/// If `forward` is true, snap forward; otherwise snap backward.
pub fn snap_to_char_boundary(text: &str, pos: usize, forward: bool) -> usize {
    if pos >= text.len() {
        return text.len();
    }
    let mut p = pos;
    if forward {
        while p < text.len() && !text.is_char_boundary(p) {
            p += 1;
        }
    } else {
        while p > 0 && !text.is_char_boundary(p) {
            p -= 1;
        }
    }
    p
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase the first character unless the leading word is `I` or an
/// acronym.
pub fn lowercase_first(s: &str) -> String {
    let first_word = s.split_whitespace().next().unwrap_or("");
    let letters: Vec<char> = first_word.chars().filter(|c| c.is_alphabetic()).collect();
    let acronym = letters.len() > 1 && letters.iter().all(|c| c.is_uppercase());
    let keep_case = letters == ['I'] || acronym;
    if keep_case {
        return s.to_string();
    }
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Uppercase the first non-whitespace character of `segment` if it is a
/// lowercase letter.
pub fn capitalize_leading_word(segment: &str) -> String {
    match segment.char_indices().find(|(_, c)| !c.is_whitespace()) {
        Some((idx, c)) if c.is_lowercase() => {
            let (lead, rest) = segment.split_at(idx);
            format!("{lead}{}", capitalize_first(rest))
        }
        _ => segment.to_string(),
    }
}

/// Strip trailing spaces and tabs. Newlines are kept.
pub fn trim_end_blanks(s: &str) -> &str {
    s.trim_end_matches(|c: char| c == ' ' || c == '\t')
}

/// Strip leading spaces and tabs. Newlines are kept.
pub fn trim_start_blanks(s: &str) -> &str {
    s.trim_start_matches(|c: char| c == ' ' || c == '\t')
}

/// True when `out` ends in a sentence terminator, ignoring trailing blanks.
pub fn ends_sentence(out: &str) -> bool {
    trim_end_blanks(out).ends_with(|c: char| matches!(c, '.' | '!' | '?'))
}

/// True when the next text appended to `out` would open a sentence.
pub fn at_sentence_start(out: &str) -> bool {
    let trimmed = trim_end_blanks(out);
    trimmed.is_empty() || trimmed.ends_with('\n') || ends_sentence(trimmed)
}

//! Rule-based rewriting that removes the surface patterns the scorer
//! penalizes.
//!
//! The pipeline is a fixed list of stages applied in order. Every stage but
//! one is a pure string function; the structural-variation stage draws its
//! sentence openers from an injected RNG so seeded runs are reproducible.

use once_cell::sync::Lazy;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use regex::{Captures, Regex};

use crate::text::{
    at_sentence_start, capitalize_first, capitalize_leading_word, lowercase_first,
    trim_end_blanks, trim_start_blanks,
};
use crate::vocabulary::{term_body, CLICHES, FORMAL_WORDS, TRANSITION_STARTERS, VERB_SWAPS};

/// How a stage rewrites text.
#[derive(Clone, Copy)]
pub enum Rewrite {
    Pure(fn(&str) -> String),
    Randomized(fn(&str, &mut dyn RngCore) -> String),
}

#[derive(Clone, Copy)]
pub struct TransformationRule {
    pub name: &'static str,
    pub rewrite: Rewrite,
}

impl TransformationRule {
    pub fn apply(&self, text: &str, rng: &mut dyn RngCore) -> String {
        match self.rewrite {
            Rewrite::Pure(f) => f(text),
            Rewrite::Randomized(f) => f(text, rng),
        }
    }
}

impl std::fmt::Debug for TransformationRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.rewrite {
            Rewrite::Pure(_) => "pure",
            Rewrite::Randomized(_) => "randomized",
        };
        f.debug_struct("TransformationRule")
            .field("name", &self.name)
            .field("rewrite", &kind)
            .finish()
    }
}

/// Stages in application order.
pub static PIPELINE: [TransformationRule; 8] = [
    TransformationRule {
        name: "em_dashes",
        rewrite: Rewrite::Pure(break_em_dashes),
    },
    TransformationRule {
        name: "cliches",
        rewrite: Rewrite::Pure(strip_cliches),
    },
    TransformationRule {
        name: "long_lists",
        rewrite: Rewrite::Pure(split_long_lists),
    },
    TransformationRule {
        name: "parallel_structure",
        rewrite: Rewrite::Pure(vary_parallel_structure),
    },
    TransformationRule {
        name: "complex_sentences",
        rewrite: Rewrite::Pure(split_complex_sentences),
    },
    TransformationRule {
        name: "casual_verbs",
        rewrite: Rewrite::Pure(casualize_verbs),
    },
    TransformationRule {
        name: "structural_variation",
        rewrite: Rewrite::Randomized(vary_sentence_openings),
    },
    TransformationRule {
        name: "semicolons",
        rewrite: Rewrite::Pure(remove_semicolons),
    },
];

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Run the pipeline with the thread-local RNG.
pub fn paraphrase(text: &str) -> String {
    transform_with(text, &mut rand::rng())
}

/// Run the pipeline with a seeded RNG. Same seed and input, same output.
pub fn paraphrase_seeded(text: &str, seed: u64) -> String {
    transform_with(text, &mut ChaCha8Rng::seed_from_u64(seed))
}

pub fn transform_with(text: &str, rng: &mut dyn RngCore) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }
    let mut current = text.to_string();
    for rule in PIPELINE.iter() {
        let next = rule.apply(&current, rng);
        if next.trim().is_empty() {
            tracing::debug!(stage = rule.name, "stage emptied the text, skipping");
            continue;
        }
        if next != current {
            tracing::debug!(stage = rule.name, "stage rewrote text");
            current = next;
        }
    }
    current.trim().to_string()
}

// ---------------------------------------------------------------------------
// Stages
// ---------------------------------------------------------------------------

static LONG_LIST_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"([^.!?\n]+),[ \t]*([^,.!?\n]+),[ \t]*([^,.!?\n]+),[ \t]*and[ \t]+([^.!?\n]+)[.!?]",
    )
    .unwrap()
});

static PARALLEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\bIt[ \t]+(\w+s)[ \t]+([^,.!?\n]+),[ \t]+(\w+s)[ \t]+([^,.!?\n]+),[ \t]+and[ \t]+(\w+s)[ \t]+([^.!?\n]+)[.!?]",
    )
    .unwrap()
});

/// Needs a word character before "while" so a sentence that opens with
/// it is left alone.
static COMPLEX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\w)[ \t]+while[ \t]+([^.!?\n]+)[ \t]+and[ \t]+([^.!?\n]+)[.!?]").unwrap()
});

static SENTENCE_SPAN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^.!?]+[.!?]*").unwrap());

/// Cliché plus an optional trailing "that", a following comma and a
/// leading comma when the phrase sits mid-sentence.
static CLICHE_STRIP_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    CLICHES
        .terms
        .iter()
        .map(|t| {
            Regex::new(&format!(
                r"(?i)(?:,[ \t]*)?\b{}\b(?:[ \t]+that\b)?[ \t]*,?[ \t]*",
                term_body(t.text)
            ))
            .unwrap()
        })
        .collect()
});

static VERB_SWAP_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    let formal = FORMAL_WORDS
        .terms
        .iter()
        .filter_map(|t| match t.replacement {
            Some(with) if !with.is_empty() => Some((t.text, with)),
            _ => None,
        });
    VERB_SWAPS
        .iter()
        .copied()
        .chain(formal)
        .map(|(from, to)| {
            (
                Regex::new(&format!(r"(?i)\b{}\b", regex::escape(from))).unwrap(),
                to,
            )
        })
        .collect()
});

/// Turn every `sep` into a sentence break and capitalize what follows it.
/// Only the blanks touching a separator are rewritten.
fn break_at(text: &str, sep: char) -> String {
    let mut parts = text.split(sep);
    let mut out = parts.next().unwrap_or_default().to_string();
    for part in parts {
        out.truncate(trim_end_blanks(&out).len());
        if out.trim().is_empty() || !at_sentence_start(&out) {
            out.push('.');
        }
        let part = trim_start_blanks(part);
        if !out.ends_with('\n') && needs_space_before(part) {
            out.push(' ');
        }
        out.push_str(&capitalize_leading_word(part));
    }
    out
}

/// True when `next` starts with a word that must be separated from the
/// text before it.
fn needs_space_before(next: &str) -> bool {
    next.chars()
        .next()
        .is_some_and(|c| !c.is_whitespace() && !matches!(c, '.' | ',' | ';' | ':' | '!' | '?'))
}

/// Asides set off by em-dashes become their own sentences; lone dashes
/// become sentence breaks.
fn break_em_dashes(text: &str) -> String {
    if !text.contains('\u{2014}') {
        return text.to_string();
    }
    break_at(text, '\u{2014}')
}

fn strip_cliches(text: &str) -> String {
    let mut current = text.to_string();
    for pattern in CLICHE_STRIP_PATTERNS.iter() {
        if pattern.is_match(&current) {
            current = strip_matches(pattern, &current);
        }
    }
    current
}

/// Remove every match of `pattern`. A removal that opens a sentence
/// capitalizes the word that now leads it.
fn strip_matches(pattern: &Regex, text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut recapitalize = false;
    for m in pattern.find_iter(text) {
        push_segment(&mut out, &text[last..m.start()], recapitalize);
        recapitalize = at_sentence_start(&out);
        if !recapitalize {
            out.truncate(trim_end_blanks(&out).len());
            if needs_space_before(&text[m.end()..]) {
                out.push(' ');
            }
        }
        last = m.end();
    }
    push_segment(&mut out, &text[last..], recapitalize);
    out
}

fn push_segment(out: &mut String, segment: &str, recapitalize: bool) {
    if recapitalize {
        out.push_str(&capitalize_leading_word(segment));
    } else {
        out.push_str(segment);
    }
}

/// "X combines a, b, c, and d." becomes four short sentences.
fn split_long_lists(text: &str) -> String {
    LONG_LIST_RE
        .replace_all(text, |caps: &Captures| {
            let head = &caps[1];
            let intro = head.trim_start();
            let lead = &head[..head.len() - intro.len()];
            format!(
                "{lead}{}. These include {}. Also {}. Plus {}.",
                intro.trim_end(),
                caps[2].trim(),
                caps[3].trim(),
                caps[4].trim()
            )
        })
        .into_owned()
}

/// "It does a, does b, and does c." gets three different subjects.
fn vary_parallel_structure(text: &str) -> String {
    PARALLEL_RE
        .replace_all(text, "This ${1} ${2}. It ${3} ${4}. The system ${5} ${6}.")
        .into_owned()
}

fn split_complex_sentences(text: &str) -> String {
    COMPLEX_RE
        .replace_all(text, "${1}. It ${2}. Plus ${3}.")
        .into_owned()
}

fn casualize_verbs(text: &str) -> String {
    let mut current = text.to_string();
    for (pattern, with) in VERB_SWAP_PATTERNS.iter() {
        if !pattern.is_match(&current) {
            continue;
        }
        current = pattern
            .replace_all(&current, |caps: &Captures| {
                let found = &caps[0];
                if found.starts_with(|c: char| c.is_uppercase()) {
                    capitalize_first(with)
                } else {
                    (*with).to_string()
                }
            })
            .into_owned();
    }
    current
}

fn opening_word(sentence: &str) -> String {
    sentence
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Prefix a transition to the third and later sentences in a run that
/// open with the same word.
fn vary_sentence_openings(text: &str, rng: &mut dyn RngCore) -> String {
    let mut out = String::with_capacity(text.len() + 32);
    let mut last = 0;
    let mut prev = String::new();
    let mut repeats = 0usize;

    for m in SENTENCE_SPAN_RE.find_iter(text) {
        out.push_str(&text[last..m.start()]);
        last = m.end();

        let span = m.as_str();
        let body = span.trim_start();
        let lead = &span[..span.len() - body.len()];
        let first = opening_word(body);

        if first.is_empty() {
            out.push_str(span);
            prev.clear();
            repeats = 0;
            continue;
        }
        if first == prev {
            repeats += 1;
        } else {
            prev = first;
            repeats = 0;
        }

        if repeats >= 2 {
            let starter = TRANSITION_STARTERS[rng.random_range(0..TRANSITION_STARTERS.len())];
            out.push_str(lead);
            out.push_str(starter);
            out.push(' ');
            out.push_str(&lowercase_first(body));
        } else {
            out.push_str(span);
        }
    }
    out.push_str(&text[last..]);
    out
}

fn remove_semicolons(text: &str) -> String {
    if !text.contains(';') {
        return text.to_string();
    }
    break_at(text, ';')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn em_dash_aside_becomes_sentence() {
        assert_eq!(
            break_em_dashes("The platform\u{2014}built on research\u{2014}will grow."),
            "The platform. Built on research. Will grow."
        );
        assert_eq!(break_em_dashes("Fast\u{2014}really fast."), "Fast. Really fast.");
        assert_eq!(break_em_dashes("no dashes here"), "no dashes here");
    }

    #[test]
    fn cliche_mid_sentence_keeps_spacing() {
        assert_eq!(
            strip_cliches("The results, moreover, are good."),
            "The results are good."
        );
        assert_eq!(
            strip_cliches("We shipped. Furthermore, it worked."),
            "We shipped. It worked."
        );
    }

    #[test]
    fn semicolons_become_sentence_breaks() {
        assert_eq!(remove_semicolons("We ran; we rested."), "We ran. We rested.");
    }

    #[test]
    fn lone_separators_still_become_periods() {
        assert_eq!(remove_semicolons(";"), ".");
        assert_eq!(break_em_dashes("\u{2014}"), ".");
        assert_eq!(break_em_dashes("Done.\u{2014}next"), "Done. Next");
        assert_eq!(break_em_dashes("line\n\u{2014} item"), "line\nItem");
    }

    #[test]
    fn rewrites_leave_distant_spacing_alone() {
        assert_eq!(
            remove_semicolons("Keep  this.  We ran ; we rested."),
            "Keep  this.  We ran. We rested."
        );
        assert_eq!(
            strip_cliches("Keep  this.  We shipped.  Moreover, it worked."),
            "Keep  this.  We shipped.  It worked."
        );
        assert_eq!(strip_cliches("the plan, therefore."), "the plan.");
    }

    #[test]
    fn sentence_initial_while_is_not_split() {
        let text = "We rested. While the team slept and ate, nothing happened.";
        assert_eq!(split_complex_sentences(text), text);
    }

    #[test]
    fn verbs_keep_leading_case() {
        assert_eq!(casualize_verbs("Developed here."), "Built here.");
        assert_eq!(casualize_verbs("we ascertain it"), "we check it");
    }

    #[test]
    fn openings_vary_after_two_repeats() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let out = vary_sentence_openings("We ran. We ate. We slept.", &mut rng);
        assert!(out.starts_with("We ran. We ate. "));
        assert!(out.ends_with(" we slept."));
        assert!(TRANSITION_STARTERS.iter().any(|s| out.contains(s)));
    }
}

//! Shared pattern vocabulary.
//!
//! The scorer penalizes these terms and the transformer scrubs or swaps
//! them. Both read the same tables so a phrase the scorer counts is always
//! one the transformer knows how to remove.

use once_cell::sync::Lazy;
use regex::Regex;

/// Bumped whenever a lexicon gains or loses a term or changes weight.
pub const VOCABULARY_VERSION: &str = "3";

/// One vocabulary entry and what the transformer does with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term {
    pub text: &'static str,
    /// `Some("")` strips the term, `Some(word)` swaps it, `None` leaves it.
    pub replacement: Option<&'static str>,
}

const fn strip(text: &'static str) -> Term {
    Term {
        text,
        replacement: Some(""),
    }
}

const fn swap(text: &'static str, with: &'static str) -> Term {
    Term {
        text,
        replacement: Some(with),
    }
}

const fn keep(text: &'static str) -> Term {
    Term {
        text,
        replacement: None,
    }
}

/// A weighted, capped list of terms matched case-insensitively on word
/// boundaries.
pub struct Lexicon {
    pub name: &'static str,
    pub weight: f64,
    pub cap: f64,
    pub terms: &'static [Term],
    patterns: Lazy<Vec<Regex>>,
}

impl Lexicon {
    /// Each term paired with its compiled word-bounded pattern.
    pub fn entries(&self) -> impl Iterator<Item = (&'static Term, &Regex)> + '_ {
        self.terms.iter().zip(self.patterns.iter())
    }
}

impl std::fmt::Debug for Lexicon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexicon")
            .field("name", &self.name)
            .field("weight", &self.weight)
            .field("cap", &self.cap)
            .field("terms", &self.terms.len())
            .finish()
    }
}

/// Escape a term for regex use, letting a straight apostrophe also match
/// the typographic one.
pub fn term_body(term: &str) -> String {
    regex::escape(term).replace('\'', "['\u{2019}]")
}

fn compile(terms: &[Term]) -> Vec<Regex> {
    terms
        .iter()
        .map(|t| Regex::new(&format!(r"(?i)\b{}\b", term_body(t.text))).unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// Lexicons
// ---------------------------------------------------------------------------

static CLICHE_TERMS: &[Term] = &[
    strip("here's where it gets interesting"),
    strip("here's the thing"),
    strip("let's dive into"),
    strip("it's worth noting"),
    strip("in today's fast-paced world"),
    strip("it's important to note"),
    strip("it's crucial to understand"),
    strip("in conclusion"),
    strip("to summarize"),
    strip("at the end of the day"),
    strip("when all is said and done"),
    strip("the bottom line is"),
    strip("let's explore"),
    strip("delve into"),
    strip("unpack"),
    strip("navigate through"),
    strip("it's no secret that"),
    strip("there's no denying"),
    strip("one cannot help but"),
    strip("in the grand scheme of things"),
    strip("bear in mind"),
    strip("keep in mind"),
    strip("it goes without saying"),
    strip("needless to say"),
    strip("as previously mentioned"),
    strip("moreover"),
    strip("furthermore"),
    strip("nevertheless"),
    strip("nonetheless"),
    strip("consequently"),
    strip("therefore"),
    strip("thus"),
    strip("hence"),
    strip("in light of"),
    strip("with that in mind"),
    strip("taking into account"),
    strip("it is evident that"),
    strip("it is clear that"),
    strip("it stands to reason"),
    strip("on the flip side"),
    strip("on the other hand"),
    strip("conversely"),
    strip("in essence"),
    strip("essentially"),
    strip("fundamentally"),
    strip("primarily"),
    strip("notably"),
    strip("significantly"),
    strip("particularly"),
    strip("especially"),
];

static FORMAL_TERMS: &[Term] = &[
    swap("utilize", "use"),
    swap("facilitate", "help"),
    swap("demonstrate", "show"),
    keep("substantial"),
    keep("comprehensive"),
    keep("significant"),
    keep("considerable"),
    keep("numerous"),
    keep("various"),
    keep("particular"),
    keep("specific"),
    keep("implement"),
    swap("endeavor", "try"),
    swap("ascertain", "check"),
    swap("subsequently", "then"),
];

static ADVERB_TERMS: &[Term] = &[
    keep("particularly"),
    keep("significantly"),
    keep("notably"),
    keep("especially"),
    keep("specifically"),
    keep("certainly"),
    keep("absolutely"),
    keep("definitely"),
    keep("clearly"),
    keep("obviously"),
];

static HEDGING_TERMS: &[Term] = &[
    keep("approximately"),
    keep("significantly"),
    keep("substantially"),
    keep("consequently"),
    keep("furthermore"),
    keep("moreover"),
    keep("thus"),
    keep("hence"),
    keep("whereby"),
    keep("thereof"),
    keep("notwithstanding"),
    keep("aforementioned"),
    keep("henceforth"),
];

static BANNED_PHRASE_TERMS: &[Term] = &[
    keep("this demonstrates"),
    keep("this highlights"),
    keep("this underscores"),
    keep("it is worth noting"),
    keep("it should be noted"),
    keep("it is important to note"),
    keep("in conclusion"),
    keep("to summarize"),
    keep("in summary"),
    keep("serves as a testament"),
    keep("plays a crucial role"),
    keep("it is evident that"),
    keep("this serves to"),
    keep("the fact that"),
    keep("due to the fact"),
];

pub static CLICHES: Lexicon = Lexicon {
    name: "cliches",
    weight: 8.0,
    cap: 50.0,
    terms: CLICHE_TERMS,
    patterns: Lazy::new(|| compile(CLICHE_TERMS)),
};

pub static FORMAL_WORDS: Lexicon = Lexicon {
    name: "formal_words",
    weight: 2.5,
    cap: 20.0,
    terms: FORMAL_TERMS,
    patterns: Lazy::new(|| compile(FORMAL_TERMS)),
};

pub static ADVERBS: Lexicon = Lexicon {
    name: "adverbs",
    weight: 2.0,
    cap: 10.0,
    terms: ADVERB_TERMS,
    patterns: Lazy::new(|| compile(ADVERB_TERMS)),
};

/// Hedging words, scored once per distinct word by the extended profile.
pub static FORMAL_HEDGING: Lexicon = Lexicon {
    name: "formal_hedging",
    weight: 5.0,
    cap: 20.0,
    terms: HEDGING_TERMS,
    patterns: Lazy::new(|| compile(HEDGING_TERMS)),
};

/// Stock framing phrases, scored once per distinct phrase by the extended
/// profile.
pub static BANNED_PHRASES: Lexicon = Lexicon {
    name: "banned_phrases",
    weight: 8.0,
    cap: 24.0,
    terms: BANNED_PHRASE_TERMS,
    patterns: Lazy::new(|| compile(BANNED_PHRASE_TERMS)),
};

/// Formal verb forms the transformer swaps for casual ones. Not scored.
pub static VERB_SWAPS: &[(&str, &str)] = &[
    ("developed", "built"),
    ("established", "created"),
    ("represents", "is"),
    ("demonstrates", "shows"),
    ("indicates", "shows"),
    ("illustrated", "showed"),
    ("commenced", "started"),
    ("utilized", "used"),
    ("utilizes", "uses"),
    ("facilitates", "helps"),
    ("encompasses", "includes"),
];

/// Enumerator words counted by the list-marker check.
pub static LIST_MARKERS: &[&str] = &[
    "first",
    "second",
    "third",
    "finally",
    "additionally",
    "lastly",
];

/// Openers the transformer prepends to break runs of identical sentence
/// starts. None of them appear in any scored lexicon.
pub static TRANSITION_STARTERS: &[&str] = &["However,", "Plus,", "Then,", "Also,", "Still,"];

/// Phrases that read as a writer working something out.
pub static PROCESS_MARKERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)took\s+(?:us|me)\s+(?:a\s+while|longer|some\s+time)",
        r"(?i)went\s+back\s+and\s+forth",
        r"(?i)initially\s+thought",
        r"(?i)tricky\s+part",
        r"(?i)what\s+finally\s+(?:made\s+sense|worked)",
        r"(?i)after\s+looking\s+at\s+(?:this|it)\s+(?:three|several|multiple)",
        r"(?i)\b(?:candidly|honestly|frankly)\b",
        r"(?i)that\s+(?:number|figure|data)\s+(?:stops|caught|surprised)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

#[cfg(test)]
mod tests {
    use super::*;

    fn hits(lexicon: &Lexicon, text: &str) -> usize {
        lexicon.entries().map(|(_, re)| re.find_iter(text).count()).sum()
    }

    #[test]
    fn cliche_matching_is_word_bounded() {
        assert_eq!(hits(&CLICHES, "The enthusiasm was real."), 0);
        assert_eq!(hits(&CLICHES, "Thus, we left. THUS we stayed."), 2);
    }

    #[test]
    fn apostrophes_match_both_forms() {
        assert_eq!(hits(&CLICHES, "It's worth noting this."), 1);
        assert_eq!(hits(&CLICHES, "It\u{2019}s worth noting this."), 1);
    }

    #[test]
    fn starters_are_not_penalized() {
        for starter in TRANSITION_STARTERS {
            let word = starter.trim_end_matches(',');
            assert_eq!(hits(&CLICHES, word), 0, "{word}");
            assert_eq!(hits(&ADVERBS, word), 0, "{word}");
            assert_eq!(hits(&FORMAL_WORDS, word), 0, "{word}");
            assert_eq!(hits(&FORMAL_HEDGING, word), 0, "{word}");
        }
    }

    #[test]
    fn every_cliche_is_stripped_by_the_transformer() {
        assert!(CLICHES.terms.iter().all(|t| t.replacement == Some("")));
    }
}

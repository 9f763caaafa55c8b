use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::text::{context_around, variance, TextSample};
use crate::vocabulary::{
    Lexicon, ADVERBS, BANNED_PHRASES, CLICHES, FORMAL_HEDGING, FORMAL_WORDS, LIST_MARKERS,
    PROCESS_MARKERS, VOCABULARY_VERSION,
};

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    fn from_score(score: f64) -> Self {
        if score > HP.severity_high_above {
            Severity::High
        } else if score > HP.severity_medium_above {
            Severity::Medium
        } else {
            Severity::Low
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verdict {
    LikelyAi,
    PossiblyAi,
    SomePatterns,
    LikelyHuman,
}

impl Verdict {
    pub fn from_score(score: u8) -> Self {
        if score >= HP.verdict_likely_ai_min {
            Verdict::LikelyAi
        } else if score >= HP.verdict_possibly_ai_min {
            Verdict::PossiblyAi
        } else if score >= HP.verdict_some_patterns_min {
            Verdict::SomePatterns
        } else {
            Verdict::LikelyHuman
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::LikelyAi => "Likely AI Generated",
            Verdict::PossiblyAi => "Possibly AI Generated",
            Verdict::SomePatterns => "Some AI Patterns",
            Verdict::LikelyHuman => "Likely Human Written",
        }
    }
}

/// Which checks a [`Scorer`] runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// The seven fingerprint checks.
    #[default]
    Standard,
    /// Standard checks plus data-presentation and structure checks.
    Extended,
}

/// Raw output of one check before capping.
#[derive(Debug, Default)]
pub struct Finding {
    pub score: f64,
    pub issues: Vec<String>,
    pub excerpts: Vec<String>,
}

impl Finding {
    fn excerpt(&mut self, text: &str, start: usize, end: usize) {
        if self.excerpts.len() < HP.excerpt_record_cap {
            self.excerpts
                .push(context_around(text, start, end, HP.context_window_chars));
        }
    }
}

/// Outcome of one check, as shown to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct CheckResult {
    pub name: &'static str,
    pub label: &'static str,
    pub score: f64,
    pub max: f64,
    pub severity: Severity,
    pub issues: Vec<String>,
    pub excerpts: Vec<String>,
}

impl CheckResult {
    pub fn fired(&self) -> bool {
        self.score > 0.0
    }
}

/// A named, stateless rule. Checks are plain values so a [`Scorer`] can
/// add or drop them freely.
#[derive(Clone, Copy)]
pub struct PatternCheck {
    pub name: &'static str,
    pub label: &'static str,
    pub max: f64,
    pub advice: &'static str,
    run: fn(&TextSample<'_>) -> Finding,
}

impl PatternCheck {
    pub const fn new(
        name: &'static str,
        label: &'static str,
        max: f64,
        advice: &'static str,
        run: fn(&TextSample<'_>) -> Finding,
    ) -> Self {
        Self {
            name,
            label,
            max,
            advice,
            run,
        }
    }

    pub fn evaluate(&self, sample: &TextSample<'_>) -> CheckResult {
        let finding = (self.run)(sample);
        let score = round2(finding.score.clamp(0.0, self.max));
        CheckResult {
            name: self.name,
            label: self.label,
            score,
            max: self.max,
            severity: Severity::from_score(score),
            issues: finding.issues,
            excerpts: finding.excerpts,
        }
    }
}

impl std::fmt::Debug for PatternCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternCheck")
            .field("name", &self.name)
            .field("max", &self.max)
            .finish()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub total: u8,
    pub verdict: Verdict,
    pub verdict_label: &'static str,
    /// False when the text was too short to analyze. The total is then 0
    /// and says nothing about the text.
    pub sufficient: bool,
    pub char_count: usize,
    pub word_count: usize,
    pub breakdown: Vec<CheckResult>,
    pub suggestions: Vec<String>,
    /// Version of the term tables the report was produced with.
    pub vocabulary_version: &'static str,
}

impl ScoreReport {
    fn insufficient(sample: &TextSample<'_>) -> Self {
        let verdict = Verdict::from_score(0);
        Self {
            total: 0,
            verdict,
            verdict_label: verdict.label(),
            sufficient: false,
            char_count: sample.char_count,
            word_count: sample.word_count,
            breakdown: vec![],
            suggestions: vec![],
            vocabulary_version: VOCABULARY_VERSION,
        }
    }

    pub fn check(&self, name: &str) -> Option<&CheckResult> {
        self.breakdown.iter().find(|c| c.name == name)
    }
}

// ---------------------------------------------------------------------------
// Hyperparameters
// ---------------------------------------------------------------------------

struct Hyperparameters {
    min_chars: usize,
    context_window_chars: usize,
    excerpt_record_cap: usize,
    em_dash_weight: f64,
    em_dash_cap: f64,
    sandwich_weight: f64,
    sandwich_cap: f64,
    semicolon_weight: f64,
    semicolon_cap: f64,
    density_word_limit: usize,
    density_words_basis: f64,
    density_high_above: f64,
    density_high_multiplier: f64,
    density_moderate_above: f64,
    density_moderate_multiplier: f64,
    uniformity_min_sentences: usize,
    uniformity_loose_variance: f64,
    uniformity_loose_bonus: f64,
    uniformity_tight_variance: f64,
    uniformity_tight_bonus: f64,
    long_sentence_words: usize,
    long_sentence_weight: f64,
    long_sentence_cap: f64,
    paragraph_min: usize,
    paragraph_loose_variance: f64,
    paragraph_loose_bonus: f64,
    paragraph_tight_variance: f64,
    paragraph_tight_bonus: f64,
    passive_tiers: [(f64, f64); 3],
    list_marker_weight: f64,
    list_marker_cap: f64,
    concession_weight: f64,
    concession_cap: f64,
    generation_weight: f64,
    generation_cap: f64,
    stacking_weight: f64,
    stacking_cap: f64,
    opening_min_sentences: usize,
    opening_words: usize,
    opening_repeat_weight: f64,
    the_noun_ratio_above: f64,
    the_noun_bonus: f64,
    opening_cap: f64,
    svn_weight: f64,
    consecutive_data_weight: f64,
    data_presentation_cap: f64,
    process_marker_words: usize,
    process_marker_weight: f64,
    process_marker_cap: f64,
    severity_high_above: f64,
    severity_medium_above: f64,
    verdict_likely_ai_min: u8,
    verdict_possibly_ai_min: u8,
    verdict_some_patterns_min: u8,
    score_max: u8,
}

static HP: Hyperparameters = Hyperparameters {
    min_chars: 50,
    context_window_chars: 60,
    excerpt_record_cap: 3,
    em_dash_weight: 12.0,
    em_dash_cap: 20.0,
    sandwich_weight: 10.0,
    sandwich_cap: 20.0,
    semicolon_weight: 2.5,
    semicolon_cap: 5.0,
    density_word_limit: 200,
    density_words_basis: 50.0,
    density_high_above: 2.0,
    density_high_multiplier: 1.5,
    density_moderate_above: 1.0,
    density_moderate_multiplier: 1.2,
    uniformity_min_sentences: 3,
    uniformity_loose_variance: 30.0,
    uniformity_loose_bonus: 8.0,
    uniformity_tight_variance: 20.0,
    uniformity_tight_bonus: 4.0,
    long_sentence_words: 35,
    long_sentence_weight: 2.0,
    long_sentence_cap: 8.0,
    paragraph_min: 2,
    paragraph_loose_variance: 500.0,
    paragraph_loose_bonus: 5.0,
    paragraph_tight_variance: 200.0,
    paragraph_tight_bonus: 5.0,
    passive_tiers: [(0.4, 15.0), (0.25, 10.0), (0.15, 5.0)],
    list_marker_weight: 2.0,
    list_marker_cap: 10.0,
    concession_weight: 12.0,
    concession_cap: 24.0,
    generation_weight: 8.0,
    generation_cap: 24.0,
    stacking_weight: 10.0,
    stacking_cap: 20.0,
    opening_min_sentences: 4,
    opening_words: 3,
    opening_repeat_weight: 6.0,
    the_noun_ratio_above: 0.4,
    the_noun_bonus: 8.0,
    opening_cap: 24.0,
    svn_weight: 5.0,
    consecutive_data_weight: 4.0,
    data_presentation_cap: 20.0,
    process_marker_words: 500,
    process_marker_weight: 6.0,
    process_marker_cap: 18.0,
    severity_high_above: 15.0,
    severity_medium_above: 5.0,
    verdict_likely_ai_min: 50,
    verdict_possibly_ai_min: 25,
    verdict_some_patterns_min: 10,
    score_max: 100,
};

// ---------------------------------------------------------------------------
// Compiled patterns
// ---------------------------------------------------------------------------

static EM_DASH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\u{2014}").unwrap());

static SANDWICH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w+\u{2014}[^\u{2014}]+\u{2014}\w+").unwrap());

static PASSIVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(is|are|was|were|be|been|being)\s+\w+(ed|en)\b").unwrap()
});

static LIST_MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\b(?:{})[\s,]", LIST_MARKERS.join("|"))).unwrap()
});

static CONCESSION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)which,?\s+while\s+\w+,?\s+(?:nevertheless|nonetheless|however|still)")
            .unwrap(),
        Regex::new(r"(?i)although\s+\w+,?\s+(?:it\s+)?(?:nevertheless|nonetheless|still)\s+")
            .unwrap(),
        Regex::new(r"(?i)despite\s+(?:the\s+fact\s+that|this),?\s+(?:it\s+)?(?:nevertheless|nonetheless)")
            .unwrap(),
    ]
});

static GENERATION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)\w+\s+(?:generated|produced|created|yielded|recorded)\s+[$£€]?\d[\d,.]*\s*(?:billion|million|thousand)?").unwrap(),
        Regex::new(r"(?i)(?:sector|industry|market|company)\s+generated\s+").unwrap(),
        Regex::new(r"(?i)revenue\s+(?:was|reached|hit|totaled)\s+[$£€]?\d[\d,.]*").unwrap(),
        Regex::new(r"(?i)profit\s+(?:was|stood at|reached)\s+[$£€]?\d[\d,.]*").unwrap(),
    ]
});

static STACKING_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)was\s+[$£€]?\d[\d,.]*\s*(?:billion|million|%|percent)?\s*with\s+\w+\s+(?:at|of)\s+[$£€]?\d[\d,.]*").unwrap(),
        Regex::new(r"(?i)[$£€]?\d[\d,.]*\s*(?:billion|million)?\s*(?:in\s+)?revenue[,\s]+[$£€]?\d[\d,.]*\s*(?:billion|million)?\s*(?:in\s+)?profit").unwrap(),
    ]
});

static THE_NOUN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*the\s+\w+\s+(?:is|was|has|have|will|can|could|should|would)\b").unwrap()
});

static SVN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:revenue|profit|sales|growth|market|sector)\s+(?:was|is|reached|totaled|hit|stood at)\s+[$£€]?\d[\d,.]*").unwrap()
});

static DATA_FIGURE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)[$£€]?\d[\d,.]*\s*(?:billion|million|%|percent)").unwrap()
});

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Scale up a lexicon score when its hits cluster in a short text.
/// Long texts get no bonus.
fn density_bonus(score: f64, count: usize, words: usize) -> f64 {
    if words == 0 || words >= HP.density_word_limit {
        return score;
    }
    let density = count as f64 / (words as f64 / HP.density_words_basis);
    if density > HP.density_high_above {
        score * HP.density_high_multiplier
    } else if density > HP.density_moderate_above {
        score * HP.density_moderate_multiplier
    } else {
        score
    }
}

/// Count every term of `lexicon`, recording per-term issues and excerpts.
fn tally_lexicon(sample: &TextSample<'_>, lexicon: &Lexicon, out: &mut Finding) -> usize {
    let mut total = 0usize;
    for (term, pattern) in lexicon.entries() {
        let mut hits = 0usize;
        for m in pattern.find_iter(sample.text) {
            out.excerpt(sample.text, m.start(), m.end());
            hits += 1;
        }
        if hits > 0 {
            out.issues.push(format!("\"{}\" ({hits}x)", term.text));
            total += hits;
        }
    }
    total
}

fn count_all(patterns: &[Regex], sample: &TextSample<'_>, out: &mut Finding) -> usize {
    let mut count = 0usize;
    for pat in patterns {
        for m in pat.find_iter(sample.text) {
            out.excerpt(sample.text, m.start(), m.end());
            count += 1;
        }
    }
    count
}

// ---------------------------------------------------------------------------
// Standard checks
// ---------------------------------------------------------------------------

fn check_punctuation(sample: &TextSample<'_>) -> Finding {
    let mut out = Finding::default();
    let text = sample.text;

    let em_dashes = EM_DASH_RE.find_iter(text).count();
    if em_dashes > 0 {
        out.score += (em_dashes as f64 * HP.em_dash_weight).min(HP.em_dash_cap);
        out.issues.push(format!("{em_dashes} em-dash(es)"));
    }

    let mut sandwiches = 0usize;
    for m in SANDWICH_RE.find_iter(text) {
        out.excerpt(text, m.start(), m.end());
        sandwiches += 1;
    }
    if sandwiches > 0 {
        out.score += (sandwiches as f64 * HP.sandwich_weight).min(HP.sandwich_cap);
        out.issues
            .push(format!("{sandwiches} sandwich pattern(s) detected"));
    }

    let semicolons = text.matches(';').count();
    if semicolons > 0 {
        out.score += (semicolons as f64 * HP.semicolon_weight).min(HP.semicolon_cap);
        out.issues.push(format!("{semicolons} semicolon(s)"));
    }
    out
}

fn check_cliches(sample: &TextSample<'_>) -> Finding {
    let mut out = Finding::default();
    let count = tally_lexicon(sample, &CLICHES, &mut out);
    let base = count as f64 * CLICHES.weight;
    out.score = density_bonus(base, count, sample.word_count).min(CLICHES.cap);
    out
}

fn check_sentence_structure(sample: &TextSample<'_>) -> Finding {
    let mut out = Finding::default();
    let lengths = sample.sentence_lengths();

    if lengths.len() >= HP.uniformity_min_sentences {
        let var = variance(&lengths);
        if var < HP.uniformity_loose_variance {
            out.score += HP.uniformity_loose_bonus;
            if var < HP.uniformity_tight_variance {
                out.score += HP.uniformity_tight_bonus;
            }
            out.issues.push(format!(
                "Sentence lengths too uniform (variance {var:.1} across {} sentences)",
                lengths.len()
            ));
        }
    }

    let long = sample
        .sentences
        .iter()
        .zip(&lengths)
        .filter(|(_, &len)| len as usize > HP.long_sentence_words)
        .map(|(s, _)| *s)
        .collect::<Vec<_>>();
    if !long.is_empty() {
        out.score += (long.len() as f64 * HP.long_sentence_weight).min(HP.long_sentence_cap);
        out.issues.push(format!(
            "{} sentence(s) over {} words",
            long.len(),
            HP.long_sentence_words
        ));
        for s in long.iter().take(HP.excerpt_record_cap) {
            out.excerpts
                .push(context_around(s, 0, 0, HP.context_window_chars * 2));
        }
    }
    out
}

fn check_vocabulary(sample: &TextSample<'_>) -> Finding {
    let mut out = Finding::default();

    let formal = tally_lexicon(sample, &FORMAL_WORDS, &mut out);
    let formal_score = density_bonus(
        formal as f64 * FORMAL_WORDS.weight,
        formal,
        sample.word_count,
    );
    out.score += formal_score.min(FORMAL_WORDS.cap);

    let adverbs = tally_lexicon(sample, &ADVERBS, &mut out);
    out.score += (adverbs as f64 * ADVERBS.weight).min(ADVERBS.cap);
    out
}

fn check_paragraph_uniformity(sample: &TextSample<'_>) -> Finding {
    let mut out = Finding::default();
    if sample.paragraphs.len() < HP.paragraph_min {
        return out;
    }
    let lengths: Vec<f64> = sample
        .paragraphs
        .iter()
        .map(|p| p.chars().count() as f64)
        .collect();
    let var = variance(&lengths);
    if var < HP.paragraph_loose_variance {
        out.score += HP.paragraph_loose_bonus;
        if var < HP.paragraph_tight_variance {
            out.score += HP.paragraph_tight_bonus;
        }
        out.issues.push(format!(
            "{} paragraphs of near-identical length (variance {var:.0})",
            lengths.len()
        ));
    }
    out
}

fn check_passive_voice(sample: &TextSample<'_>) -> Finding {
    let mut out = Finding::default();
    if sample.sentences.is_empty() {
        return out;
    }
    let mut matches = 0usize;
    for m in PASSIVE_RE.find_iter(sample.text) {
        out.excerpt(sample.text, m.start(), m.end());
        matches += 1;
    }
    let ratio = matches as f64 / sample.sentences.len() as f64;
    if let Some(&(_, points)) = HP.passive_tiers.iter().find(|(above, _)| ratio > *above) {
        out.score = points;
        out.issues.push(format!(
            "{matches} passive construction(s) across {} sentences ({:.0}%)",
            sample.sentences.len(),
            ratio * 100.0
        ));
    }
    out
}

fn check_list_markers(sample: &TextSample<'_>) -> Finding {
    let mut out = Finding::default();
    let mut count = 0usize;
    for m in LIST_MARKER_RE.find_iter(sample.text) {
        out.excerpt(sample.text, m.start(), m.end());
        count += 1;
    }
    if count > 0 {
        out.score = (count as f64 * HP.list_marker_weight).min(HP.list_marker_cap);
        out.issues.push(format!("{count} enumerator(s)"));
    }
    out
}

// ---------------------------------------------------------------------------
// Extended checks
// ---------------------------------------------------------------------------

fn check_template_concessions(sample: &TextSample<'_>) -> Finding {
    let mut out = Finding::default();
    let count = count_all(&CONCESSION_PATTERNS, sample, &mut out);
    if count > 0 {
        out.score = (count as f64 * HP.concession_weight).min(HP.concession_cap);
        out.issues
            .push(format!("{count} template concession pattern(s)"));
    }
    out
}

/// Lexicons scored once per distinct term present.
fn tally_distinct(sample: &TextSample<'_>, lexicon: &Lexicon, label: &str) -> Finding {
    let mut out = Finding::default();
    for (term, pattern) in lexicon.entries() {
        if let Some(m) = pattern.find(sample.text) {
            out.excerpt(sample.text, m.start(), m.end());
            out.issues.push(format!("{label}: \"{}\"", term.text));
        }
    }
    let distinct = out.issues.len();
    out.score = (distinct as f64 * lexicon.weight).min(lexicon.cap);
    out
}

fn check_formal_hedging(sample: &TextSample<'_>) -> Finding {
    tally_distinct(sample, &FORMAL_HEDGING, "hedging word")
}

fn check_banned_phrases(sample: &TextSample<'_>) -> Finding {
    tally_distinct(sample, &BANNED_PHRASES, "stock phrase")
}

fn check_generation_templates(sample: &TextSample<'_>) -> Finding {
    let mut out = Finding::default();
    let count = count_all(&GENERATION_PATTERNS, sample, &mut out);
    if count > 0 {
        out.score = (count as f64 * HP.generation_weight).min(HP.generation_cap);
        out.issues
            .push(format!("{count} \"X generated Y\" template(s)"));
    }
    out
}

fn check_data_stacking(sample: &TextSample<'_>) -> Finding {
    let mut out = Finding::default();
    let count = count_all(&STACKING_PATTERNS, sample, &mut out);
    if count > 0 {
        out.score = (count as f64 * HP.stacking_weight).min(HP.stacking_cap);
        out.issues.push(format!("{count} stacked data pattern(s)"));
    }
    out
}

fn opening_words(sentence: &str) -> String {
    sentence
        .split_whitespace()
        .take(HP.opening_words)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn check_repetitive_openings(sample: &TextSample<'_>) -> Finding {
    let mut out = Finding::default();
    let sentences = &sample.sentences;
    if sentences.len() < HP.opening_min_sentences {
        return out;
    }

    let mut repetitions = 0usize;
    let mut repeated: Vec<String> = Vec::new();
    for pair in sentences.windows(2) {
        let prev = opening_words(pair[0]);
        if prev == opening_words(pair[1]) {
            repetitions += 1;
            if !repeated.contains(&prev) {
                repeated.push(prev);
            }
        }
    }
    out.score += repetitions as f64 * HP.opening_repeat_weight;
    for start in repeated {
        out.issues.push(format!("Repeated start: \"{start}...\""));
    }

    let the_noun = sentences.iter().filter(|s| THE_NOUN_RE.is_match(s)).count();
    if the_noun as f64 > sentences.len() as f64 * HP.the_noun_ratio_above {
        out.score += HP.the_noun_bonus;
        out.issues.push(format!(
            "{the_noun}/{} sentences start with \"The [noun] is/was...\"",
            sentences.len()
        ));
    }
    out.score = out.score.min(HP.opening_cap);
    out
}

fn check_data_presentation(sample: &TextSample<'_>) -> Finding {
    let mut out = Finding::default();
    let mut svn = 0usize;
    for m in SVN_RE.find_iter(sample.text) {
        out.excerpt(sample.text, m.start(), m.end());
        svn += 1;
    }
    let consecutive = sample
        .sentences
        .windows(2)
        .filter(|pair| DATA_FIGURE_RE.is_match(pair[0]) && DATA_FIGURE_RE.is_match(pair[1]))
        .count();

    if svn > 0 {
        out.issues
            .push(format!("{svn} subject-verb-number pattern(s)"));
    }
    if consecutive > 0 {
        out.issues
            .push(format!("{consecutive} back-to-back data sentence(s)"));
    }
    out.score = (svn as f64 * HP.svn_weight + consecutive as f64 * HP.consecutive_data_weight)
        .min(HP.data_presentation_cap);
    out
}

fn check_process_markers(sample: &TextSample<'_>) -> Finding {
    let mut out = Finding::default();
    let found = PROCESS_MARKERS
        .iter()
        .filter(|re| re.is_match(sample.text))
        .count();
    let expected = sample.word_count / HP.process_marker_words;
    if found < expected {
        out.score = ((expected - found) as f64 * HP.process_marker_weight)
            .min(HP.process_marker_cap);
        out.issues.push(format!(
            "Only {found} process marker(s) found (expected ~{expected})"
        ));
    }
    out
}

// ---------------------------------------------------------------------------
// Check sets
// ---------------------------------------------------------------------------

pub static STANDARD_CHECKS: [PatternCheck; 7] = [
    PatternCheck::new(
        "punctuation",
        "Punctuation Density",
        45.0,
        "Cut em-dashes and semicolons. Commas and periods read more naturally.",
        check_punctuation,
    ),
    PatternCheck::new(
        "cliches",
        "AI Signature Phrases",
        50.0,
        "Remove stock transitions like \"it's worth noting\" and \"in conclusion\".",
        check_cliches,
    ),
    PatternCheck::new(
        "sentence_structure",
        "Sentence Structure",
        20.0,
        "Vary sentence lengths: a short one, a longer one, then short again.",
        check_sentence_structure,
    ),
    PatternCheck::new(
        "vocabulary",
        "Formal Vocabulary",
        30.0,
        "Use plain words (use, help, show) instead of formal ones and trim the adverbs.",
        check_vocabulary,
    ),
    PatternCheck::new(
        "paragraph_uniformity",
        "Paragraph Uniformity",
        10.0,
        "Let paragraph lengths follow the content instead of a template.",
        check_paragraph_uniformity,
    ),
    PatternCheck::new(
        "passive_voice",
        "Passive Voice",
        15.0,
        "Rewrite passive constructions in the active voice: \"we built\", not \"was built\".",
        check_passive_voice,
    ),
    PatternCheck::new(
        "list_markers",
        "List Markers",
        10.0,
        "Drop enumerators like \"first\" and \"finally\" where the order is obvious.",
        check_list_markers,
    ),
];

pub static EXTENDED_CHECKS: [PatternCheck; 8] = [
    PatternCheck::new(
        "template_concessions",
        "Template Concessions",
        24.0,
        "Replace \"which, while X, nevertheless Y\" with a direct reaction.",
        check_template_concessions,
    ),
    PatternCheck::new(
        "formal_hedging",
        "Formal Hedging Vocabulary",
        20.0,
        "Use \"probably\", \"around\" or \"roughly\" instead of \"approximately\" and \"significantly\".",
        check_formal_hedging,
    ),
    PatternCheck::new(
        "banned_phrases",
        "Stock Framing Phrases",
        24.0,
        "Remove framing like \"this demonstrates\" and \"it is worth noting\".",
        check_banned_phrases,
    ),
    PatternCheck::new(
        "generation_templates",
        "Generation Templates",
        24.0,
        "Embed figures in interpretation instead of \"X generated Y\".",
        check_generation_templates,
    ),
    PatternCheck::new(
        "data_stacking",
        "Parallel Data Stacking",
        20.0,
        "Split stacked figures into separate sentences with interpretation between.",
        check_data_stacking,
    ),
    PatternCheck::new(
        "repetitive_openings",
        "Repetitive Structures",
        24.0,
        "Vary sentence openings. Never start consecutive sentences the same way.",
        check_repetitive_openings,
    ),
    PatternCheck::new(
        "data_presentation",
        "Data Presentation Style",
        20.0,
        "Use figures as noun phrases: \"$11.7 billion revenue\", not \"Revenue was $11.7 billion\".",
        check_data_presentation,
    ),
    PatternCheck::new(
        "process_markers",
        "Missing Human Markers",
        18.0,
        "Add process markers such as \"took us a while to figure out\".",
        check_process_markers,
    ),
];

// ---------------------------------------------------------------------------
// Scorer
// ---------------------------------------------------------------------------

/// Runs a configurable set of checks and folds them into a bounded score.
#[derive(Debug, Clone)]
pub struct Scorer {
    checks: Vec<PatternCheck>,
    min_chars: usize,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::standard()
    }
}

impl Scorer {
    pub fn standard() -> Self {
        Self {
            checks: STANDARD_CHECKS.to_vec(),
            min_chars: HP.min_chars,
        }
    }

    pub fn extended() -> Self {
        let mut scorer = Self::standard();
        scorer.checks.extend_from_slice(&EXTENDED_CHECKS);
        scorer
    }

    pub fn for_profile(profile: Profile) -> Self {
        match profile {
            Profile::Standard => Self::standard(),
            Profile::Extended => Self::extended(),
        }
    }

    /// Texts with fewer trimmed characters than this are not analyzed.
    pub fn with_min_chars(mut self, min_chars: usize) -> Self {
        self.min_chars = min_chars;
        self
    }

    pub fn with_check(mut self, check: PatternCheck) -> Self {
        self.checks.push(check);
        self
    }

    pub fn without_check(mut self, name: &str) -> Self {
        self.checks.retain(|c| c.name != name);
        self
    }

    pub fn checks(&self) -> &[PatternCheck] {
        &self.checks
    }

    pub fn score(&self, text: &str) -> ScoreReport {
        let sample = TextSample::new(text);
        if sample.char_count < self.min_chars {
            tracing::trace!(chars = sample.char_count, "text too short to score");
            return ScoreReport::insufficient(&sample);
        }

        let breakdown: Vec<CheckResult> =
            self.checks.iter().map(|c| c.evaluate(&sample)).collect();
        for result in breakdown.iter().filter(|r| r.fired()) {
            tracing::debug!(
                check = result.name,
                score = result.score,
                severity = ?result.severity,
                "check fired"
            );
        }

        let raw: f64 = breakdown.iter().map(|r| r.score).sum();
        let total = raw.round().clamp(0.0, HP.score_max as f64) as u8;
        let suggestions = deduplicate_advice(
            self.checks
                .iter()
                .zip(&breakdown)
                .filter(|(_, r)| r.severity == Severity::High)
                .map(|(c, _)| c.advice.to_string())
                .collect(),
        );

        let verdict = Verdict::from_score(total);
        ScoreReport {
            total,
            verdict,
            verdict_label: verdict.label(),
            sufficient: true,
            char_count: sample.char_count,
            word_count: sample.word_count,
            breakdown,
            suggestions,
            vocabulary_version: VOCABULARY_VERSION,
        }
    }

    pub fn estimate(&self, text: &str) -> u8 {
        self.score(text).total
    }
}

fn deduplicate_advice(advice: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut unique = Vec::new();
    for item in advice {
        if seen.insert(item.clone()) {
            unique.push(item);
        }
    }
    unique
}

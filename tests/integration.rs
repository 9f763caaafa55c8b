use graspit::{estimate_score, paraphrase_seeded, score, Scorer, Severity, Verdict};

const AI_HEAVY: &str = "It's worth noting that this comprehensive platform\u{2014}built on substantial research\u{2014}will utilize numerous innovations. \
                        Furthermore, the system is designed to facilitate growth. \
                        Moreover, the results are significantly improved. \
                        In conclusion, the approach is particularly effective.";

const HUMAN: &str = "I got to the station late again this morning. \
                     The train was gone. \
                     Honestly it was nice out, cold but bright, and the river smelled like rain. \
                     My neighbor waved from her porch while her dog barked at nothing at all. \
                     By the time I reached the office, my coffee had gone cold and I had three new ideas for the garden.";

#[test]
fn clean_text_scores_low() {
    let result = score(HUMAN);
    assert!(
        result.total < 10,
        "Human text should score < 10, got {}",
        result.total
    );
    assert_eq!(result.verdict, Verdict::LikelyHuman);
    assert!(result.sufficient);
    assert!(result.suggestions.is_empty());
}

#[test]
fn ai_heavy_text_scores_high() {
    let result = score(AI_HEAVY);
    assert!(
        result.total >= 50,
        "AI-heavy text should score >= 50, got {}",
        result.total
    );
    assert_eq!(result.verdict, Verdict::LikelyAi);
    assert_eq!(result.check("cliches").unwrap().score, 50.0);
    assert_eq!(result.check("cliches").unwrap().severity, Severity::High);
    assert!(!result.suggestions.is_empty());
}

#[test]
fn short_text_is_not_scored() {
    let result = score("Too short to judge.");
    assert_eq!(result.total, 0);
    assert!(!result.sufficient);
    assert!(result.breakdown.is_empty());
    assert!(result.suggestions.is_empty());
    assert_eq!(estimate_score(""), 0);
    assert_eq!(estimate_score("   \n\t  "), 0);
}

#[test]
fn em_dash_sandwich_is_penalized() {
    let text = "Our roadmap folds current trends\u{2014}AI, AR, mobile\u{2014}into solutions people use.";
    let result = score(text);
    let punctuation = result.check("punctuation").unwrap();
    assert_eq!(punctuation.score, 30.0);
    assert!(punctuation
        .issues
        .iter()
        .any(|i| i.contains("sandwich")));
    assert!(!punctuation.excerpts.is_empty());
    assert!(result.total > 0);
}

#[test]
fn uniform_sentences_are_penalized() {
    let text = "The cat sat on the red mat. ".repeat(10);
    let result = score(&text);
    assert_eq!(result.check("sentence_structure").unwrap().score, 12.0);
    assert_eq!(result.total, 12);
    assert_eq!(result.verdict, Verdict::SomePatterns);
}

#[test]
fn breakdown_respects_check_maxima() {
    let text = format!("{AI_HEAVY} {AI_HEAVY} {AI_HEAVY}");
    let result = score(&text);
    assert_eq!(result.total, 100);
    for check in &result.breakdown {
        assert!(
            check.score >= 0.0 && check.score <= check.max,
            "{} scored {} over max {}",
            check.name,
            check.score,
            check.max
        );
    }
}

#[test]
fn paraphrase_lowers_score() {
    let before = estimate_score(AI_HEAVY);
    let once = paraphrase_seeded(AI_HEAVY, 7);
    let after = estimate_score(&once);
    assert!(
        after < before,
        "paraphrase should lower the score: {before} -> {after}\n{once}"
    );
    let twice = paraphrase_seeded(&once, 7);
    assert!(estimate_score(&twice) <= after);
}

#[test]
fn extended_profile_adds_checks() {
    let text = "The upgrade, which, while costly, nevertheless paid for itself within a year of launch.";
    let standard = Scorer::standard().score(text);
    assert!(standard.check("template_concessions").is_none());

    let extended = Scorer::extended().score(text);
    let concessions = extended.check("template_concessions").unwrap();
    assert_eq!(concessions.score, 12.0);
    assert!(extended.total >= standard.total);
}

#[test]
fn extended_profile_flags_data_templates() {
    let text = "Revenue was $11.7 billion with profit at $2.1 billion. The sector generated $4 million in fees.";
    let result = Scorer::extended().score(text);
    assert_eq!(result.check("data_stacking").unwrap().score, 10.0);
    assert!(result.check("generation_templates").unwrap().fired());
    assert!(result.check("data_presentation").unwrap().fired());
}

#[test]
fn extended_profile_flags_repeated_openings() {
    let text = "The team is small. The team is fast. The team is remote. We like it that way.";
    let result = Scorer::extended().score(text);
    assert_eq!(result.check("repetitive_openings").unwrap().score, 20.0);
}

#[test]
fn extended_profile_flags_hedging_and_stock_phrases() {
    let result = Scorer::extended().score(AI_HEAVY);
    let hedging = result.check("formal_hedging").unwrap();
    assert_eq!(hedging.score, 15.0, "{:?}", hedging.issues);
    let phrases = result.check("banned_phrases").unwrap();
    assert_eq!(phrases.score, 8.0, "{:?}", phrases.issues);

    let standard = score(AI_HEAVY);
    assert!(standard.check("formal_hedging").is_none());
}

#[test]
fn min_chars_is_configurable() {
    let scorer = Scorer::standard().with_min_chars(5);
    let result = scorer.score("Moreover, done.");
    assert!(result.sufficient);
    assert!(result.check("cliches").unwrap().fired());
}

#[test]
fn json_output_is_valid() {
    let result = score(AI_HEAVY);
    let json = serde_json::to_string_pretty(&result).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(parsed["total"].is_number());
    assert_eq!(parsed["verdict"], "likely-ai");
    assert_eq!(parsed["verdict_label"], "Likely AI Generated");
    assert_eq!(parsed["vocabulary_version"], "3");
    assert!(parsed["breakdown"].is_array());
    assert_eq!(parsed["breakdown"][0]["name"], "punctuation");
    assert!(parsed["breakdown"][1]["severity"].is_string());
}

use graspit::transformer::{transform_with, PIPELINE};
use graspit::{paraphrase, paraphrase_seeded};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn strips_leading_cliche() {
    let out = paraphrase_seeded(
        "It's worth noting that the team shipped on time. Everyone was relieved.",
        1,
    );
    assert_eq!(out, "The team shipped on time. Everyone was relieved.");
}

#[test]
fn breaks_up_long_lists() {
    let out = paraphrase_seeded(
        "Our platform combines wardrobe scanning, virtual try-on, smart alerts, and shopping tips.",
        1,
    );
    assert_eq!(
        out,
        "Our platform combines wardrobe scanning. These include virtual try-on. Also smart alerts. Plus shopping tips."
    );
}

#[test]
fn varies_parallel_structure() {
    let out = paraphrase_seeded(
        "It solves wardrobe blindness, reduces returns, and maintains viability.",
        1,
    );
    assert_eq!(
        out,
        "This solves wardrobe blindness. It reduces returns. The system maintains viability."
    );
}

#[test]
fn splits_while_clauses() {
    let out = paraphrase_seeded(
        "The app runs daily while syncing photos and trimming storage.",
        1,
    );
    assert_eq!(out, "The app runs daily. It syncing photos. Plus trimming storage.");
}

#[test]
fn casualizes_formal_verbs() {
    let out = paraphrase_seeded(
        "We utilized the old server and developed a new tool. Utilized parts were cheap. The underutilized rack stays.",
        1,
    );
    assert_eq!(
        out,
        "We used the old server and built a new tool. Used parts were cheap. The underutilized rack stays."
    );
}

#[test]
fn removes_em_dashes_and_semicolons() {
    let out = paraphrase(
        "The plan\u{2014}drafted in a hurry\u{2014}held up; the weather had other ideas.",
    );
    assert!(!out.contains('\u{2014}'), "{out}");
    assert!(!out.contains(';'), "{out}");
    assert!(out.contains("Drafted in a hurry."), "{out}");
    assert!(out.contains("The weather had other ideas."), "{out}");
}

#[test]
fn repeated_openings_get_transitions() {
    let text = "We ran. We ate. We slept. We woke.";
    let out = paraphrase_seeded(text, 42);
    assert!(out.starts_with("We ran. We ate. "), "{out}");
    assert_eq!(out.matches(", we ").count(), 2, "{out}");
    assert_eq!(out, paraphrase_seeded(text, 42));
}

#[test]
fn untouched_text_keeps_its_spacing() {
    let doubled = "The train was late.  I walked home instead, and the rain held off.";
    assert_eq!(paraphrase_seeded(doubled, 3), doubled);

    let indented = "Steps we took:\n    run the build\n    ship the app\n    tell the team.";
    assert_eq!(paraphrase_seeded(indented, 3), indented);
}

#[test]
fn rewrite_keeps_spacing_elsewhere() {
    let out = paraphrase_seeded("Steps:\n    run it\n\nWe shipped.  Moreover, it worked.", 3);
    assert_eq!(out, "Steps:\n    run it\n\nWe shipped.  It worked.");
}

#[test]
fn lone_separator_becomes_period() {
    assert_eq!(paraphrase_seeded(";", 1), ".");
    assert_eq!(paraphrase_seeded("\u{2014}", 1), ".");
}

#[test]
fn sentence_opening_while_is_left_alone() {
    let text = "We rested. While the team slept and ate, nothing happened.";
    assert_eq!(paraphrase_seeded(text, 1), text);
}

#[test]
fn empty_and_blank_input_unchanged() {
    assert_eq!(paraphrase(""), "");
    assert_eq!(paraphrase("   "), "   ");
}

#[test]
fn clean_text_passes_through() {
    let text = "The train was late. I walked home instead, and the rain held off.";
    assert_eq!(paraphrase_seeded(text, 3), text);
}

#[test]
fn pipeline_order_is_fixed() {
    let names: Vec<_> = PIPELINE.iter().map(|r| r.name).collect();
    assert_eq!(
        names,
        [
            "em_dashes",
            "cliches",
            "long_lists",
            "parallel_structure",
            "complex_sentences",
            "casual_verbs",
            "structural_variation",
            "semicolons",
        ]
    );
}

#[test]
fn injected_rng_matches_seeded_entry_point() {
    let text = "They built it. They shipped it. They sold it. They kept it.";
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    assert_eq!(transform_with(text, &mut rng), paraphrase_seeded(text, 9));
}

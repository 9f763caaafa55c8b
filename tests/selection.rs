use async_trait::async_trait;
use graspit::{
    humanize, rule_based_providers, select_best, Paraphraser, ProviderError, Scorer,
    SelectionError,
};

const AI_HEAVY: &str = "It's worth noting that this comprehensive platform\u{2014}built on substantial research\u{2014}will utilize numerous innovations. \
                        Furthermore, the system is designed to facilitate growth. \
                        Moreover, the results are significantly improved. \
                        In conclusion, the approach is particularly effective.";

const CLEAN: &str = "I got to the station late again this morning. \
                     The train was gone. \
                     Honestly it was nice out, cold but bright, and the river smelled like rain. \
                     My neighbor waved from her porch while her dog barked at nothing at all. \
                     By the time I reached the office, my coffee had gone cold and I had three new ideas for the garden.";

/// Returns a canned candidate, or fails.
struct Fixed {
    name: &'static str,
    output: Result<&'static str, &'static str>,
}

#[async_trait]
impl Paraphraser for Fixed {
    fn name(&self) -> &str {
        self.name
    }

    async fn paraphrase(&self, _text: &str) -> Result<String, ProviderError> {
        match self.output {
            Ok(text) => Ok(text.to_string()),
            Err(reason) => Err(ProviderError::Failed(reason.to_string())),
        }
    }
}

fn fixed(name: &'static str, output: &'static str) -> Box<dyn Paraphraser> {
    Box::new(Fixed {
        name,
        output: Ok(output),
    })
}

fn failing(name: &'static str) -> Box<dyn Paraphraser> {
    Box::new(Fixed {
        name,
        output: Err("timeout"),
    })
}

#[tokio::test]
async fn lowest_score_wins() {
    let providers = vec![fixed("heavy", AI_HEAVY), fixed("clean", CLEAN)];
    let best = select_best(&providers, AI_HEAVY, &Scorer::standard())
        .await
        .unwrap();
    assert_eq!(best.provider, "clean");
    assert_eq!(best.text, CLEAN);
    assert!(best.score < 10);
}

#[tokio::test]
async fn ties_go_to_first_provider() {
    let providers = vec![fixed("first", CLEAN), fixed("second", CLEAN)];
    let best = select_best(&providers, AI_HEAVY, &Scorer::standard())
        .await
        .unwrap();
    assert_eq!(best.provider, "first");
}

#[tokio::test]
async fn failed_providers_are_skipped() {
    let providers = vec![failing("down"), fixed("heavy", AI_HEAVY)];
    let best = select_best(&providers, AI_HEAVY, &Scorer::standard())
        .await
        .unwrap();
    assert_eq!(best.provider, "heavy");
}

#[tokio::test]
async fn blank_output_counts_as_failure() {
    let providers = vec![fixed("blank", "  \n "), fixed("heavy", AI_HEAVY)];
    let best = select_best(&providers, AI_HEAVY, &Scorer::standard())
        .await
        .unwrap();
    assert_eq!(best.provider, "heavy");
}

#[tokio::test]
async fn all_providers_failing_is_an_error() {
    let providers = vec![failing("a"), failing("b")];
    let err = select_best(&providers, AI_HEAVY, &Scorer::standard())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        SelectionError::AllProvidersFailed { attempted: 2 }
    ));
}

#[tokio::test]
async fn no_providers_is_an_error() {
    let err = select_best(&[], AI_HEAVY, &Scorer::standard())
        .await
        .unwrap_err();
    assert!(matches!(err, SelectionError::NoProviders));
}

#[tokio::test]
async fn humanize_reports_improvement() {
    let providers = rule_based_providers(3, Some(11));
    let report = humanize(AI_HEAVY, &providers, &Scorer::standard())
        .await
        .unwrap();
    assert_eq!(report.original, AI_HEAVY);
    assert!(report.new_score < report.original_score);
    assert_eq!(
        report.improvement,
        i32::from(report.original_score) - i32::from(report.new_score)
    );
    assert!(report.provider.unwrap().starts_with("rules-"));
}

#[tokio::test]
async fn seeded_providers_are_reproducible() {
    let text = "We ran. We ate. We slept. We woke. We left early the next day.";
    let a = select_best(&rule_based_providers(2, Some(5)), text, &Scorer::standard())
        .await
        .unwrap();
    let b = select_best(&rule_based_providers(2, Some(5)), text, &Scorer::standard())
        .await
        .unwrap();
    assert_eq!(a.text, b.text);
    assert_eq!(a.provider, b.provider);
}

//! End-to-end tests for the public analysis API.

use std::sync::Arc;

use brandvis_analysis::{
    generate_aliases, summarize_brands, Analyzer, Competitor, LexiconClassifier, PromptResponse,
    SentimentClassifier,
};

struct Fixed(f64);

impl SentimentClassifier for Fixed {
    fn classify(&self, _text: &str) -> f64 {
        self.0
    }
}

fn analyzer() -> Analyzer {
    Analyzer::builder()
        .sentiment(Arc::new(Fixed(1.2)))
        .build()
        .expect("classifier supplied")
}

fn globex() -> Vec<Competitor> {
    vec![Competitor {
        display_name: "Globex Corporation".to_string(),
        tracked_name: "Globex".to_string(),
    }]
}

fn pair(prompt: &str, response: &str) -> PromptResponse {
    PromptResponse {
        prompt: prompt.to_string(),
        response: response.to_string(),
    }
}

#[test]
fn acme_versus_globex() {
    let aliases = generate_aliases("Acme Corp");
    for expected in ["acme corp", "acmecorp", "acme", "ac"] {
        assert!(
            aliases.iter().any(|a| a == expected),
            "missing alias {expected}"
        );
    }

    let results = analyzer().analyze_responses(
        &[pair("best anvils", "Acme is better than Globex.")],
        "US",
        "Acme Corp",
        &globex(),
    );
    let result = &results[0];

    assert_eq!(result.mentions["Acme Corp"], 1);
    assert_eq!(result.mentions["Globex"], 1);
    assert_eq!(result.position, 1);
    assert_eq!(result.brands[1].position, 2);
    assert_eq!(result.visibility, 50.0);
    assert_eq!(result.brands[1].visibility, 50.0);
    assert_eq!(result.word_volume, 5);
    // 1.2 / 2 * 99 = 59.4 -> 59 -> 60
    assert_eq!(result.sentiment, 60);
}

#[test]
fn cited_domain_also_counts_as_whole_word_mention() {
    let text = "Acme is better than Globex. Visit acme.com for details.";
    let results = analyzer().analyze_responses(&[pair("p", text)], "US", "Acme Corp", &globex());
    let result = &results[0];

    // "acme" in "acme.com" sits between word boundaries.
    assert_eq!(result.mentions["Acme Corp"], 2);
    assert_eq!(result.mentions["Globex"], 1);
    assert_eq!(result.position, 1);
    assert!((result.visibility - 200.0 / 3.0).abs() < 1e-9);

    assert_eq!(result.domains.len(), 1);
    assert_eq!(result.domains[0].domain, "acme.com");
}

#[test]
fn repeated_runs_are_identical() {
    let inputs = vec![
        pair("a", "Globex and Acme Corp compared on acme.com and globex.io"),
        pair("b", "Only Initech is discussed here."),
        pair("c", ""),
    ];
    let competitors = vec![
        Competitor {
            display_name: "Initech".to_string(),
            tracked_name: "Initech".to_string(),
        },
        globex().remove(0),
    ];
    let analyzer = analyzer();

    let first = analyzer.analyze_responses(&inputs, "US", "Acme Corp", &competitors);
    let second = analyzer.analyze_responses(&inputs, "US", "Acme Corp", &competitors);
    assert_eq!(first, second);
}

#[test]
fn analyzer_is_shareable_across_threads() {
    let analyzer = Analyzer::builder()
        .sentiment(Arc::new(LexiconClassifier))
        .build()
        .expect("classifier supplied");
    let competitors = globex();
    let inputs: Vec<PromptResponse> = (0..8)
        .map(|i| pair(&format!("p{i}"), "Acme is trusted; Globex is expensive."))
        .collect();
    let sequential = analyzer.analyze_responses(&inputs, "US", "Acme", &competitors);

    let parallel: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = inputs
            .chunks(3)
            .map(|chunk| {
                let analyzer = &analyzer;
                let competitors = &competitors;
                s.spawn(move || analyzer.analyze_responses(chunk, "US", "Acme", competitors))
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().expect("worker panicked"))
            .collect()
    });

    assert_eq!(sequential, parallel);
}

#[test]
fn lexicon_sentiment_reflects_tone() {
    let analyzer = Analyzer::builder()
        .sentiment(Arc::new(LexiconClassifier))
        .build()
        .expect("classifier supplied");
    let results = analyzer.analyze_responses(
        &[
            pair("good", "Acme is the best, most trusted option."),
            pair("bad", "Acme faces a lawsuit and many complaints."),
        ],
        "US",
        "Acme",
        &[],
    );
    assert!(results[0].sentiment > 50, "got {}", results[0].sentiment);
    assert!(results[1].sentiment < 50, "got {}", results[1].sentiment);
}

#[test]
fn results_serialize_with_snake_case_fields() {
    let results = analyzer().analyze_responses(
        &[pair("p", "See acme.com")],
        "US",
        "Acme",
        &globex(),
    );
    let json = serde_json::to_value(&results[0]).expect("serializable");

    assert_eq!(json["word_volume"], 2);
    assert_eq!(json["domains"][0]["type"], "unknown");
    assert_eq!(json["domains"][0]["avg_citations"], 0.0);
    assert_eq!(json["brands"][1]["display_name"], "Globex Corporation");
    assert_eq!(json["mentions"]["Globex"], 0);
}

#[test]
fn overview_averages_across_results() {
    let results = analyzer().analyze_responses(
        &[pair("a", "Acme then Globex"), pair("b", "Globex only")],
        "US",
        "Acme",
        &globex(),
    );
    let overview = summarize_brands(&results);

    assert_eq!(overview[0].name, "Acme");
    assert_eq!(overview[0].avg_visibility, 25.0);
    assert_eq!(overview[0].avg_position, 0.5);
    assert_eq!(overview[1].name, "Globex");
    assert_eq!(overview[1].avg_visibility, 75.0);
    assert_eq!(overview[1].avg_position, 1.5);
}

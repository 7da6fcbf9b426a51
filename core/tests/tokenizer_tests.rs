use search_core::tokenizer::{normalize, Normalizer};

#[test]
fn it_normalizes_and_stems() {
    let words = normalize("Running Runners RUN! The café's menu.");
    // Stemming to "run" should appear
    assert!(words.contains(&"run".to_string()));
    assert!(words.contains(&"menu".to_string()));
    assert!(words.iter().all(|w| w.chars().all(|c| !c.is_uppercase())));
}

#[test]
fn index_and_query_spellings_meet_on_a_stem() {
    let doc = normalize("Crowned KINGS");
    let query = normalize("crowning king");
    assert!(doc.iter().any(|s| query.contains(s)));
    assert!(doc.contains(&"crown".to_string()));
    assert!(query.contains(&"crown".to_string()));
}

#[test]
fn compatibility_forms_fold_together() {
    // NFKC: the "ﬁ" ligature becomes "fi"
    assert_eq!(normalize("ﬁnal"), normalize("final"));
}

#[test]
fn it_filters_stopwords_when_enabled() {
    let words = Normalizer::new().with_stopwords(true).normalize("The quick brown fox and the lazy dog");
    assert!(!words.contains(&"the".to_string()));
    assert!(!words.contains(&"and".to_string()));
    assert!(words.contains(&"fox".to_string()));
}

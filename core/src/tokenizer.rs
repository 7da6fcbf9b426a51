use lazy_static::lazy_static;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use unicode_normalization::UnicodeNormalization;
use std::collections::HashSet;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"\w+").expect("valid regex");
    static ref STEMMER: Stemmer = Stemmer::create(Algorithm::English);
    static ref STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "a","about","above","after","again","against","all","am","an","and","any","are","as","at",
            "be","because","been","before","being","below","between","both","but","by",
            "can","cannot","could",
            "did","do","does","doing","down","during",
            "each","few","for","from","further",
            "had","has","have","having","he","her","here","hers","herself","him","himself","his","how",
            "i","if","in","into","is","it","its","itself",
            "me","more","most","my","myself",
            "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
            "same","she","should","so","some","such",
            "than","that","the","their","theirs","them","themselves","then","there","these","they","this","those","through","to","too",
            "under","until","up","very",
            "was","we","were","what","when","where","which","while","who","whom","why","with","would",
            "you","your","yours","yourself","yourselves"
        ];
        words.iter().copied().collect()
    };
}

/// The text pipeline shared by indexing and querying.
///
/// NFKC normalization, lowercasing, splitting on runs of non-word characters,
/// optional stopword removal, then Snowball English stemming. An
/// [`InvertedIndex`](crate::InvertedIndex) owns exactly one `Normalizer` and the
/// ranker reads it back from the index, so documents and queries can never be
/// processed by two different pipelines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Normalizer {
    remove_stopwords: bool,
}

impl Normalizer {
    pub fn new() -> Self { Self::default() }

    pub fn with_stopwords(mut self, remove: bool) -> Self {
        self.remove_stopwords = remove;
        self
    }

    pub fn removes_stopwords(&self) -> bool { self.remove_stopwords }

    /// Turn raw text into its sequence of stems, in text order.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        let lowered = text.nfkc().collect::<String>().to_lowercase();
        let mut stems = Vec::new();
        for mat in WORD.find_iter(&lowered) {
            let token = mat.as_str();
            if self.remove_stopwords && STOPWORDS.contains(token) { continue; }
            let stem = STEMMER.stem(token);
            if stem.is_empty() { continue; }
            stems.push(stem.into_owned());
        }
        stems
    }
}

/// Normalize with the default pipeline (no stopword removal).
pub fn normalize(text: &str) -> Vec<String> {
    Normalizer::default().normalize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_normalize() {
        let t = normalize("Running, runner's run!");
        assert!(t.iter().any(|w| w == "run"));
        assert!(t.iter().all(|w| !w.is_empty()));
    }

    #[test]
    fn splits_on_non_word_runs() {
        assert_eq!(normalize("  --egypt...nile!!  "), vec!["egypt", "nile"]);
        assert!(normalize("  ,;: ").is_empty());
        assert!(normalize("").is_empty());
    }

    #[test]
    fn stopwords_are_kept_unless_enabled() {
        let plain = Normalizer::new().normalize("the pharaoh");
        assert_eq!(plain, vec!["the", "pharaoh"]);
        let filtered = Normalizer::new().with_stopwords(true).normalize("the pharaoh");
        assert_eq!(filtered, vec!["pharaoh"]);
    }
}

use crate::corpus::Corpus;
use crate::index::{Document, IndexError, InvertedIndex};
use crate::search::{SearchEngine, SearchResult};
use crate::tokenizer::Normalizer;

/// A crawled corpus together with the search engine built over it.
///
/// This is what the query front ends hold: the engine ranks doc ids and the
/// corpus resolves them back to titles, urls and text.
#[derive(Debug)]
pub struct Library {
    corpus: Corpus,
    engine: SearchEngine,
}

#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    pub doc: &'a Document,
    pub score: f64,
}

impl Library {
    pub fn build(corpus: Corpus, normalizer: Normalizer) -> Result<Self, IndexError> {
        let index = InvertedIndex::build(&corpus, normalizer)?;
        Ok(Self { corpus, engine: SearchEngine::new(index) })
    }

    pub fn corpus(&self) -> &Corpus { &self.corpus }

    pub fn engine(&self) -> &SearchEngine { &self.engine }

    pub fn search(&self, query: &str, top_k: usize) -> Vec<Hit<'_>> {
        self.resolve(self.engine.search(query, top_k))
    }

    pub fn resolve(&self, results: Vec<SearchResult>) -> Vec<Hit<'_>> {
        results
            .into_iter()
            .filter_map(|r| self.corpus.get(r.doc_id).map(|doc| Hit { doc, score: r.score }))
            .collect()
    }
}

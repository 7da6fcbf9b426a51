use crate::corpus::Corpus;
use crate::tokenizer::Normalizer;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

pub type DocId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub doc_id: DocId,
    pub url: String,
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    pub doc_id: DocId,
    pub term_frequency: u32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IndexError {
    #[error("document {0} is already indexed")]
    DuplicateDocument(DocId),

    #[error("url {url} is already stored as document {doc_id}")]
    DuplicateUrl { url: String, doc_id: DocId },
}

/// Term → postings plus the raw text of every indexed document.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    normalizer: Normalizer,
    postings: HashMap<String, Vec<Posting>>, // appended in insertion order
    documents: HashMap<DocId, String>,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    pub fn with_normalizer(normalizer: Normalizer) -> Self {
        Self { normalizer, ..Self::default() }
    }

    /// Index every document of `corpus` in doc_id order.
    pub fn build(corpus: &Corpus, normalizer: Normalizer) -> Result<Self, IndexError> {
        let mut index = Self::with_normalizer(normalizer);
        for doc in corpus.iter() {
            index.add_document(doc.doc_id, &doc.text)?;
        }
        tracing::info!(num_docs = index.num_docs(), num_terms = index.num_terms(), "built inverted index");
        Ok(index)
    }

    /// Add one document. A doc_id that is already present is rejected and the
    /// index is left untouched.
    pub fn add_document(&mut self, doc_id: DocId, text: &str) -> Result<(), IndexError> {
        if self.documents.contains_key(&doc_id) {
            return Err(IndexError::DuplicateDocument(doc_id));
        }

        let mut tf_counts: HashMap<String, u32> = HashMap::new();
        for stem in self.normalizer.normalize(text) {
            *tf_counts.entry(stem).or_insert(0) += 1;
        }
        for (term, term_frequency) in tf_counts {
            self.postings.entry(term).or_default().push(Posting { doc_id, term_frequency });
        }

        self.documents.insert(doc_id, text.to_string());
        Ok(())
    }

    pub fn normalizer(&self) -> &Normalizer { &self.normalizer }

    /// Postings for an already-normalized term; empty for unknown terms.
    pub fn postings(&self, term: &str) -> &[Posting] {
        self.postings.get(term).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn index(&self) -> &HashMap<String, Vec<Posting>> { &self.postings }

    pub fn documents(&self) -> &HashMap<DocId, String> { &self.documents }

    pub fn text(&self, doc_id: DocId) -> Option<&str> {
        self.documents.get(&doc_id).map(String::as_str)
    }

    pub fn num_docs(&self) -> usize { self.documents.len() }

    pub fn num_terms(&self) -> usize { self.postings.len() }
}

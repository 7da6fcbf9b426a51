use crate::index::{DocId, Document, IndexError};
use std::collections::HashMap;

/// Crawled documents in doc_id order, with a url → doc_id lookup.
///
/// Ids are handed out sequentially from 0 as documents are pushed, so the
/// crawler's completion order becomes the id order.
#[derive(Debug, Default, Clone)]
pub struct Corpus {
    docs: Vec<Document>,
    by_url: HashMap<String, DocId>,
}

impl Corpus {
    pub fn new() -> Self { Self::default() }

    /// Store a page under the next free doc_id.
    pub fn push(&mut self, url: impl Into<String>, title: impl Into<String>, text: impl Into<String>) -> Result<DocId, IndexError> {
        let url = url.into();
        if let Some(&doc_id) = self.by_url.get(&url) {
            return Err(IndexError::DuplicateUrl { url, doc_id });
        }
        let doc_id = self.docs.len() as DocId;
        self.by_url.insert(url.clone(), doc_id);
        self.docs.push(Document { doc_id, url, title: title.into(), text: text.into() });
        Ok(doc_id)
    }

    pub fn get(&self, doc_id: DocId) -> Option<&Document> { self.docs.get(doc_id as usize) }

    pub fn doc_id(&self, url: &str) -> Option<DocId> { self.by_url.get(url).copied() }

    pub fn iter(&self) -> impl Iterator<Item = &Document> { self.docs.iter() }

    pub fn len(&self) -> usize { self.docs.len() }

    pub fn is_empty(&self) -> bool { self.docs.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_insertion_order() {
        let mut corpus = Corpus::new();
        assert_eq!(corpus.push("https://e.org/wiki/A", "A", "alpha").unwrap(), 0);
        assert_eq!(corpus.push("https://e.org/wiki/B", "B", "beta").unwrap(), 1);
        assert_eq!(corpus.get(1).map(|d| d.title.as_str()), Some("B"));
        assert_eq!(corpus.doc_id("https://e.org/wiki/A"), Some(0));
        assert_eq!(corpus.len(), 2);
    }

    #[test]
    fn a_url_maps_to_one_document() {
        let mut corpus = Corpus::new();
        corpus.push("https://e.org/wiki/A", "A", "alpha").unwrap();
        let err = corpus.push("https://e.org/wiki/A", "A again", "other").unwrap_err();
        assert_eq!(err, IndexError::DuplicateUrl { url: "https://e.org/wiki/A".into(), doc_id: 0 });
        assert_eq!(corpus.len(), 1);
    }
}

//! Normalization, inverted indexing and TF-IDF ranking for a crawled corpus.

pub mod corpus;
pub mod index;
pub mod library;
pub mod search;
pub mod snippet;
pub mod tokenizer;

pub use corpus::Corpus;
pub use index::{DocId, Document, IndexError, InvertedIndex, Posting};
pub use library::{Hit, Library};
pub use search::{SearchEngine, SearchResult, DEFAULT_TOP_K};
pub use tokenizer::{normalize, Normalizer};

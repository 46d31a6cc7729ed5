//! The idiom corpus and where it comes from.

mod corpus;
mod idioms;
mod loader;

pub use corpus::{Corpus, CorpusError};
pub use loader::{load_bundled_corpus, load_corpus_from_table};

use log::info;

use crate::models::IdiomRecord;

use super::corpus::{Corpus, CorpusError};
use super::idioms::BUNDLED_IDIOMS;

/// Build the corpus shipped with the application.
pub fn load_bundled_corpus() -> Result<Corpus, CorpusError> {
    load_corpus_from_table(BUNDLED_IDIOMS)
}

/// Build a corpus from `(id, english, vietnamese)` rows.
pub fn load_corpus_from_table(rows: &[(u32, &str, &str)]) -> Result<Corpus, CorpusError> {
    let records = rows
        .iter()
        .map(|&(id, english, vietnamese)| IdiomRecord::new(id, english, vietnamese))
        .collect();

    let corpus = Corpus::new(records)?;
    info!("Loaded {} idioms", corpus.len());
    Ok(corpus)
}

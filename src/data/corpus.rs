use std::collections::HashSet;

use rand::Rng;

use crate::models::IdiomRecord;
use crate::quiz::{blank_candidates, text};

/// Reasons a set of idioms cannot be used as a corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusError {
    /// No idioms at all.
    Empty,
    /// Two records share an id.
    DuplicateId(u32),
    /// The English phrase is blank.
    BlankEnglish(u32),
    /// The Vietnamese translation is blank.
    BlankVietnamese(u32),
    /// The English phrase has leading, trailing or repeated whitespace.
    IrregularSpacing(u32),
    /// No token of the English phrase can serve as an answer.
    NoAnswerableToken(u32),
}

impl std::fmt::Display for CorpusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorpusError::Empty => write!(f, "corpus must contain at least one idiom"),
            CorpusError::DuplicateId(id) => write!(f, "idiom id {} is used more than once", id),
            CorpusError::BlankEnglish(id) => write!(f, "idiom #{} has no English text", id),
            CorpusError::BlankVietnamese(id) => write!(f, "idiom #{} has no Vietnamese text", id),
            CorpusError::IrregularSpacing(id) => {
                write!(f, "idiom #{} must be single-spaced with no surrounding whitespace", id)
            }
            CorpusError::NoAnswerableToken(id) => {
                write!(f, "idiom #{} has no word that can be blanked", id)
            }
        }
    }
}

impl std::error::Error for CorpusError {}

/// Validated, read-only collection of idioms in a fixed order.
#[derive(Debug, Clone)]
pub struct Corpus {
    records: Vec<IdiomRecord>,
}

impl Corpus {
    pub fn new(records: Vec<IdiomRecord>) -> Result<Self, CorpusError> {
        if records.is_empty() {
            return Err(CorpusError::Empty);
        }

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id) {
                return Err(CorpusError::DuplicateId(record.id));
            }
            validate_record(record)?;
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[IdiomRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false`; construction rejects empty corpora.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&IdiomRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Uniformly random record.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &IdiomRecord {
        &self.records[rng.gen_range(0..self.records.len())]
    }

    /// Records whose English or Vietnamese text contains `query`, ignoring
    /// case. A blank query matches everything. Corpus order is kept.
    pub fn search(&self, query: &str) -> Vec<&IdiomRecord> {
        let needle = query.trim().to_lowercase();
        self.records
            .iter()
            .filter(|record| needle.is_empty() || record.matches_lowercase(&needle))
            .collect()
    }
}

fn validate_record(record: &IdiomRecord) -> Result<(), CorpusError> {
    if record.english.trim().is_empty() {
        return Err(CorpusError::BlankEnglish(record.id));
    }
    if record.vietnamese.trim().is_empty() {
        return Err(CorpusError::BlankVietnamese(record.id));
    }

    let tokens = text::tokenize(&record.english);
    if tokens.join(" ") != record.english {
        return Err(CorpusError::IrregularSpacing(record.id));
    }

    // The generator falls back to the first token when nothing else qualifies.
    if blank_candidates(&record.english).is_empty() && text::answer_form(&tokens[0]).is_empty() {
        return Err(CorpusError::NoAnswerableToken(record.id));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Corpus {
        Corpus::new(vec![
            IdiomRecord::new(1, "kick the bucket", "chết, qua đời"),
            IdiomRecord::new(2, "Break the ice", "Phá vỡ sự ngại ngùng"),
            IdiomRecord::new(3, "piece of cake", "dễ như ăn bánh"),
        ])
        .unwrap()
    }

    #[test]
    fn test_rejects_empty_corpus() {
        assert_eq!(Corpus::new(Vec::new()).unwrap_err(), CorpusError::Empty);
    }

    #[test]
    fn test_rejects_invalid_records() {
        let cases = [
            (vec![IdiomRecord::new(1, "a b c", "x"), IdiomRecord::new(1, "hit the sack", "ngủ")], CorpusError::DuplicateId(1)),
            (vec![IdiomRecord::new(4, "  ", "x")], CorpusError::BlankEnglish(4)),
            (vec![IdiomRecord::new(5, "hit the sack", "")], CorpusError::BlankVietnamese(5)),
            (vec![IdiomRecord::new(6, "hit  the sack", "ngủ")], CorpusError::IrregularSpacing(6)),
            (vec![IdiomRecord::new(7, " hit the sack", "ngủ")], CorpusError::IrregularSpacing(7)),
            (vec![IdiomRecord::new(8, "... of it", "x")], CorpusError::NoAnswerableToken(8)),
        ];

        for (records, expected) in cases {
            assert_eq!(Corpus::new(records).unwrap_err(), expected);
        }
    }

    #[test]
    fn test_get_by_id() {
        let corpus = corpus();
        assert_eq!(corpus.get(3).unwrap().english, "piece of cake");
        assert!(corpus.get(9).is_none());
    }

    #[test]
    fn test_search_matches_either_language() {
        let corpus = corpus();

        let ids = |query: &str| corpus.search(query).iter().map(|r| r.id).collect::<Vec<_>>();

        assert_eq!(ids("BUCKET"), vec![1]);
        assert_eq!(ids("ice"), vec![2]);
        assert_eq!(ids("phá vỡ"), vec![2]);
        assert_eq!(ids("DỄ NHƯ"), vec![3]);
        assert_eq!(ids("the"), vec![1, 2]);
        assert!(ids("nothing here").is_empty());
    }

    #[test]
    fn test_blank_search_returns_everything() {
        let corpus = corpus();
        assert_eq!(corpus.search("").len(), 3);
        assert_eq!(corpus.search("   ").len(), 3);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            CorpusError::DuplicateId(12).to_string(),
            "idiom id 12 is used more than once"
        );
    }
}

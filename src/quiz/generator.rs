use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::data::Corpus;
use crate::models::Question;

use super::text;

/// Pick a random idiom from `corpus` and blank out one of its words.
///
/// Content words are preferred; an idiom made only of short or stop words
/// falls back to blanking its first token.
pub fn generate<R: Rng + ?Sized>(corpus: &Corpus, rng: &mut R) -> Question {
    let idiom = corpus.choose(rng);
    let tokens = text::tokenize(&idiom.english);
    let candidates = blank_candidates(&idiom.english);
    let index = candidates.choose(rng).copied().unwrap_or(0);

    debug!(
        "Blanking token {} of idiom #{} ({} candidates)",
        index,
        idiom.id,
        candidates.len()
    );

    Question::from_tokens(idiom.clone(), tokens, index)
}

/// Indices of the tokens in `phrase` that may be blanked.
pub fn blank_candidates(phrase: &str) -> Vec<usize> {
    phrase
        .split_whitespace()
        .enumerate()
        .filter(|(_, token)| text::is_content_word(token))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::load_bundled_corpus;
    use crate::models::{IdiomRecord, PLACEHOLDER};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn single(english: &str) -> Corpus {
        Corpus::new(vec![IdiomRecord::new(1, english, "chết")]).unwrap()
    }

    #[test]
    fn test_blank_candidates_skip_stop_words() {
        assert_eq!(blank_candidates("kick the bucket"), vec![0, 2]);
        assert_eq!(blank_candidates("birds of a feather flock together"), vec![0, 3, 4, 5]);
        assert!(blank_candidates("go for it").is_empty());
    }

    #[test]
    fn test_generate_kick_the_bucket() {
        let corpus = single("kick the bucket");

        for seed in 0..50 {
            let question = generate(&corpus, &mut StdRng::seed_from_u64(seed));

            assert_ne!(question.missing_index(), 1);
            assert!(matches!(question.answer(), "kick" | "bucket"));
            assert!(question.is_match(&question.answer().to_uppercase()));
        }
    }

    #[test]
    fn test_generate_uses_both_candidates() {
        let corpus = single("kick the bucket");
        let chosen: std::collections::HashSet<usize> = (0..100)
            .map(|seed| generate(&corpus, &mut StdRng::seed_from_u64(seed)).missing_index())
            .collect();

        assert_eq!(chosen, [0, 2].into_iter().collect());
    }

    #[test]
    fn test_generate_falls_back_to_first_token() {
        let corpus = single("go for it");

        for seed in 0..10 {
            let question = generate(&corpus, &mut StdRng::seed_from_u64(seed));
            assert_eq!(question.missing_index(), 0);
            assert_eq!(question.answer(), "go");
        }
    }

    #[test]
    fn test_generate_is_deterministic_for_seed() {
        let corpus = load_bundled_corpus().unwrap();

        let first: Vec<Question> = {
            let mut rng = StdRng::seed_from_u64(7);
            (0..20).map(|_| generate(&corpus, &mut rng)).collect()
        };
        let second: Vec<Question> = {
            let mut rng = StdRng::seed_from_u64(7);
            (0..20).map(|_| generate(&corpus, &mut rng)).collect()
        };

        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_over_bundled_corpus() {
        let corpus = load_bundled_corpus().unwrap();
        let before = corpus.records().to_vec();
        let mut rng = StdRng::seed_from_u64(2024);

        for _ in 0..1000 {
            let question = generate(&corpus, &mut rng);
            let english = &question.idiom().english;

            assert!(!question.answer().is_empty());
            assert_eq!(question.display_parts()[question.missing_index()], PLACEHOLDER);
            assert_eq!(&question.reconstruct(), english);

            let candidates = blank_candidates(english);
            if candidates.is_empty() {
                assert_eq!(question.missing_index(), 0);
            } else {
                assert!(candidates.contains(&question.missing_index()));
            }
        }

        assert_eq!(corpus.records(), before.as_slice());
    }
}

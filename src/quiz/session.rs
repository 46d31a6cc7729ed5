//! Session-scoped quiz controller.
//!
//! Owns the current round, the running score and the random source.
//! Explanation lookups run elsewhere and report back by round id.

use std::sync::Arc;

use log::debug;
use rand::Rng;

use crate::data::Corpus;
use crate::models::{Explanation, Question, ScoreState};

use super::evaluator::{self, Verdict};
use super::generator;

/// Identifies one round. A new id is issued every time a question is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundId(u64);

/// Progress of the explanation lookup for the current round.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ExplanationState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A lookup is in flight.
    Pending,
    /// The lookup succeeded.
    Ready(Explanation),
    /// The lookup failed; the user may ask again.
    Unavailable,
}

/// What the caller needs to run one explanation lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplanationRequest {
    pub round: RoundId,
    pub english: String,
    pub vietnamese: String,
}

/// One question and everything the user has done with it so far.
#[derive(Debug, Clone)]
pub struct Round {
    pub id: RoundId,
    pub question: Question,
    pub input: String,
    pub verdict: Option<Verdict>,
    pub explanation: ExplanationState,
}

pub struct QuizSession<R> {
    corpus: Arc<Corpus>,
    rng: R,
    round: Round,
    score: ScoreState,
    next_round: u64,
}

impl<R: Rng> QuizSession<R> {
    /// Start a session and draw its first question.
    pub fn new(corpus: Arc<Corpus>, mut rng: R) -> Self {
        let question = generator::generate(&corpus, &mut rng);

        Self {
            corpus,
            rng,
            round: Round::new(RoundId(0), question),
            score: ScoreState::new(),
            next_round: 1,
        }
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn question(&self) -> &Question {
        &self.round.question
    }

    pub fn score(&self) -> ScoreState {
        self.score
    }

    pub fn input(&self) -> &str {
        &self.round.input
    }

    pub fn verdict(&self) -> Option<Verdict> {
        self.round.verdict
    }

    pub fn explanation(&self) -> &ExplanationState {
        &self.round.explanation
    }

    /// Whether the current round already has a recorded result.
    pub fn is_graded(&self) -> bool {
        self.round.verdict.is_some()
    }

    pub fn push_char(&mut self, c: char) {
        if !self.is_graded() {
            self.round.input.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if !self.is_graded() {
            self.round.input.pop();
        }
    }

    /// Grade the typed answer.
    ///
    /// Returns `None` without touching the score if the round is already
    /// graded or the input is blank.
    pub fn submit(&mut self) -> Option<Verdict> {
        if self.is_graded() {
            return None;
        }

        let (verdict, score) = evaluator::evaluate(&self.round.question, &self.round.input, self.score);
        let verdict = verdict?;
        self.score = score;
        self.round.verdict = Some(verdict);
        Some(verdict)
    }

    /// Give up on the current question and draw the next one.
    ///
    /// Only allowed before the round is graded.
    pub fn skip(&mut self) -> bool {
        if self.is_graded() {
            return false;
        }

        self.score = evaluator::skip(self.score);
        self.start_round();
        true
    }

    /// Move on after a graded round. The score is not touched.
    pub fn next_question(&mut self) -> bool {
        if !self.is_graded() {
            return false;
        }

        self.start_round();
        true
    }

    /// Ask for an explanation of the current idiom.
    ///
    /// Only available once the round is graded, and never while a lookup is
    /// in flight or after one has succeeded.
    pub fn request_explanation(&mut self) -> Option<ExplanationRequest> {
        if !self.is_graded() {
            return None;
        }

        match self.round.explanation {
            ExplanationState::Idle | ExplanationState::Unavailable => {
                self.round.explanation = ExplanationState::Pending;
                let idiom = self.round.question.idiom();
                Some(ExplanationRequest {
                    round: self.round.id,
                    english: idiom.english.clone(),
                    vietnamese: idiom.vietnamese.clone(),
                })
            }
            ExplanationState::Pending | ExplanationState::Ready(_) => None,
        }
    }

    /// Deliver the outcome of a lookup.
    ///
    /// Results for any round other than the current one, or arriving when no
    /// lookup is pending, are dropped and `false` is returned.
    pub fn apply_explanation(&mut self, round: RoundId, result: Option<Explanation>) -> bool {
        if round != self.round.id || self.round.explanation != ExplanationState::Pending {
            debug!("Discarding explanation for stale round {:?}", round);
            return false;
        }

        self.round.explanation = match result {
            Some(explanation) => ExplanationState::Ready(explanation),
            None => ExplanationState::Unavailable,
        };
        true
    }

    fn start_round(&mut self) {
        let id = RoundId(self.next_round);
        self.next_round += 1;

        let question = generator::generate(&self.corpus, &mut self.rng);
        debug!("Round {:?}: idiom #{}", id, question.idiom().id);
        self.round = Round::new(id, question);
    }
}

impl Round {
    fn new(id: RoundId, question: Question) -> Self {
        Self {
            id,
            question,
            input: String::new(),
            verdict: None,
            explanation: ExplanationState::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IdiomRecord;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session() -> QuizSession<StdRng> {
        let corpus = Corpus::new(vec![
            IdiomRecord::new(1, "kick the bucket", "chết"),
            IdiomRecord::new(2, "spill the beans", "tiết lộ bí mật"),
        ])
        .unwrap();
        QuizSession::new(Arc::new(corpus), StdRng::seed_from_u64(3))
    }

    fn type_text(session: &mut QuizSession<StdRng>, text: &str) {
        for c in text.chars() {
            session.push_char(c);
        }
    }

    fn answer_correctly(session: &mut QuizSession<StdRng>) {
        let answer = session.question().answer().to_uppercase();
        type_text(session, &answer);
        assert_eq!(session.submit(), Some(Verdict::Correct));
    }

    fn explanation() -> Explanation {
        Explanation {
            meaning: "to die".into(),
            origin: "unclear".into(),
            example: "He kicked the bucket.".into(),
            vietnamese_context: "qua đời".into(),
        }
    }

    #[test]
    fn test_blank_submission_is_inert() {
        let mut session = session();
        type_text(&mut session, "   ");

        assert_eq!(session.submit(), None);
        assert!(!session.is_graded());
        assert_eq!(session.score().total(), 0);
    }

    #[test]
    fn test_resubmission_is_blocked() {
        let mut session = session();
        type_text(&mut session, "nope");

        assert_eq!(session.submit(), Some(Verdict::Incorrect));
        assert_eq!(session.submit(), None);
        assert_eq!(session.score().total(), 1);

        session.push_char('x');
        assert_eq!(session.input(), "nope");
    }

    #[test]
    fn test_skip_only_before_grading() {
        let mut session = session();
        let first = session.round().id;

        assert!(session.skip());
        assert_ne!(session.round().id, first);
        assert_eq!(session.score().total(), 1);
        assert_eq!(session.score().correct(), 0);

        answer_correctly(&mut session);
        assert!(!session.skip());
        assert_eq!(session.score().total(), 2);
    }

    #[test]
    fn test_next_question_only_after_grading() {
        let mut session = session();
        let first = session.round().id;

        assert!(!session.next_question());
        assert_eq!(session.round().id, first);

        answer_correctly(&mut session);
        assert!(session.next_question());
        assert_ne!(session.round().id, first);
        assert_eq!(session.input(), "");
        assert_eq!(session.verdict(), None);
        assert_eq!(session.explanation(), &ExplanationState::Idle);
        assert_eq!(session.score().correct(), 1);
    }

    #[test]
    fn test_explanation_requires_graded_round() {
        let mut session = session();
        assert_eq!(session.request_explanation(), None);
        assert_eq!(session.explanation(), &ExplanationState::Idle);
    }

    #[test]
    fn test_explanation_is_requested_once() {
        let mut session = session();
        answer_correctly(&mut session);

        let request = session.request_explanation().unwrap();
        assert_eq!(request.round, session.round().id);
        assert_eq!(request.english, session.question().idiom().english);
        assert_eq!(session.explanation(), &ExplanationState::Pending);
        assert_eq!(session.request_explanation(), None);

        assert!(session.apply_explanation(request.round, Some(explanation())));
        assert_eq!(session.explanation(), &ExplanationState::Ready(explanation()));
        assert_eq!(session.request_explanation(), None);
    }

    #[test]
    fn test_failed_explanation_can_be_retried() {
        let mut session = session();
        answer_correctly(&mut session);

        let request = session.request_explanation().unwrap();
        assert!(session.apply_explanation(request.round, None));
        assert_eq!(session.explanation(), &ExplanationState::Unavailable);

        let retry = session.request_explanation().unwrap();
        assert_eq!(retry.round, request.round);
        assert_eq!(session.explanation(), &ExplanationState::Pending);
    }

    #[test]
    fn test_stale_explanation_is_discarded() {
        let mut session = session();
        answer_correctly(&mut session);
        let request = session.request_explanation().unwrap();

        session.next_question();
        answer_correctly(&mut session);

        assert!(!session.apply_explanation(request.round, Some(explanation())));
        assert_eq!(session.explanation(), &ExplanationState::Idle);
    }

    #[test]
    fn test_unrequested_explanation_is_discarded() {
        let mut session = session();
        answer_correctly(&mut session);
        let current = session.round().id;

        assert!(!session.apply_explanation(current, Some(explanation())));
        assert_eq!(session.explanation(), &ExplanationState::Idle);
    }
}

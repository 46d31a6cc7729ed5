use crate::models::{Question, ScoreState};

/// Outcome of grading one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    pub fn is_correct(self) -> bool {
        matches!(self, Verdict::Correct)
    }
}

/// Grade `submitted` against `question` and fold the result into `score`.
///
/// A blank submission is rejected: the verdict is `None` and the score comes
/// back unchanged. Callers must grade each question at most once.
pub fn evaluate(question: &Question, submitted: &str, mut score: ScoreState) -> (Option<Verdict>, ScoreState) {
    if submitted.trim().is_empty() {
        return (None, score);
    }

    let verdict = if question.is_match(submitted) {
        Verdict::Correct
    } else {
        Verdict::Incorrect
    };
    score.record_answer(verdict.is_correct());

    (Some(verdict), score)
}

/// Count a skipped question: it joins the total and breaks the streak.
pub fn skip(mut score: ScoreState) -> ScoreState {
    score.record_skip();
    score
}

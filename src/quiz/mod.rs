//! Question generation, grading and the session that ties them together.

mod evaluator;
mod generator;
mod session;
pub(crate) mod text;

pub use evaluator::{evaluate, skip, Verdict};
pub use generator::{blank_candidates, generate};
pub use session::{ExplanationRequest, ExplanationState, QuizSession, Round, RoundId};

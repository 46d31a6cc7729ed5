//! Domain types shared by the quiz, the library and the explanation client.

mod explanation;
mod idiom;
mod question;
mod score;

pub use explanation::Explanation;
pub use idiom::IdiomRecord;
pub use question::{Question, PLACEHOLDER};
pub use score::ScoreState;

/// Screen the application is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Title screen with the main menu.
    #[default]
    Landing,
    /// Fill-in-the-blank quiz.
    Quiz,
    /// Searchable list of every idiom in the corpus.
    Library,
}

use std::sync::Arc;

use rand::rngs::StdRng;

use crate::data::Corpus;
use crate::models::{IdiomRecord, Screen};
use crate::quiz::QuizSession;

/// Longest search query the library accepts.
const MAX_QUERY_LENGTH: usize = 64;

pub struct App {
    pub screen: Screen,
    corpus: Arc<Corpus>,
    session: QuizSession<StdRng>,
    library_query: String,
    library_scroll: usize,
    explanations_enabled: bool,
}

impl App {
    pub fn new(corpus: Arc<Corpus>, rng: StdRng, explanations_enabled: bool) -> Self {
        let session = QuizSession::new(Arc::clone(&corpus), rng);

        Self {
            screen: Screen::Landing,
            corpus,
            session,
            library_query: String::new(),
            library_scroll: 0,
            explanations_enabled,
        }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn session(&self) -> &QuizSession<StdRng> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut QuizSession<StdRng> {
        &mut self.session
    }

    /// Whether an API key was configured for the explanation service.
    pub fn explanations_enabled(&self) -> bool {
        self.explanations_enabled
    }

    pub fn open_quiz(&mut self) {
        self.screen = Screen::Quiz;
    }

    pub fn open_library(&mut self) {
        self.screen = Screen::Library;
    }

    pub fn go_home(&mut self) {
        self.screen = Screen::Landing;
    }

    pub fn library_query(&self) -> &str {
        &self.library_query
    }

    pub fn library_scroll(&self) -> usize {
        self.library_scroll
    }

    /// Idioms matching the current library query.
    pub fn library_results(&self) -> Vec<&IdiomRecord> {
        self.corpus.search(&self.library_query)
    }

    pub fn library_query_push(&mut self, c: char) {
        if self.library_query.chars().count() < MAX_QUERY_LENGTH {
            self.library_query.push(c);
            self.library_scroll = 0;
        }
    }

    pub fn library_query_pop(&mut self) {
        if self.library_query.pop().is_some() {
            self.library_scroll = 0;
        }
    }

    pub fn scroll_library_down(&mut self) {
        let max_scroll = self.library_results().len().saturating_sub(1);
        self.library_scroll = (self.library_scroll + 1).min(max_scroll);
    }

    pub fn scroll_library_up(&mut self) {
        self.library_scroll = self.library_scroll.saturating_sub(1);
    }
}

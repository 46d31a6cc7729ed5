//! # idiom-master
//!
//! A terminal quiz for learning English idioms through their Vietnamese
//! meanings, with optional AI explanations.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use idiom_master::{ClientConfig, IdiomMaster, AppError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = ClientConfig::new("my-api-key");
//!     let quiz = IdiomMaster::from_bundled(Some(config), None)?;
//!
//!     // Take over the terminal until the user quits
//!     quiz.run().await?;
//!
//!     Ok(())
//! }
//! ```

mod app;
pub mod client;
pub mod data;
pub mod models;
pub mod protocol;
pub mod quiz;
pub mod terminal;
mod ui;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::mpsc;

pub use app::App;
pub use client::{ClientConfig, ExplanationClient};
pub use data::{load_bundled_corpus, Corpus, CorpusError};
pub use models::{Explanation, IdiomRecord, Question, ScoreState, Screen};
pub use quiz::{ExplanationRequest, QuizSession, RoundId, Verdict};

/// How long the event loop waits for a key before checking for replies.
const TICK: Duration = Duration::from_millis(50);

/// Error type for running the application.
#[derive(Debug)]
pub enum AppError {
    /// The idiom corpus failed validation.
    Corpus(CorpusError),
    /// Terminal IO failed.
    Io(io::Error),
    /// The HTTP client could not be built.
    Client(reqwest::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Corpus(e) => write!(f, "Invalid idiom corpus: {}", e),
            AppError::Io(e) => write!(f, "IO error: {}", e),
            AppError::Client(e) => write!(f, "Failed to create HTTP client: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Corpus(e) => Some(e),
            AppError::Io(e) => Some(e),
            AppError::Client(e) => Some(e),
        }
    }
}

impl From<CorpusError> for AppError {
    fn from(err: CorpusError) -> Self {
        AppError::Corpus(err)
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Client(err)
    }
}

/// Result of one explanation lookup, tagged with the round that asked.
struct ExplanationReply {
    round: RoundId,
    explanation: Option<Explanation>,
}

/// What the event loop should do after a key press.
enum Flow {
    Continue,
    Quit,
    Lookup(ExplanationRequest),
}

/// The quiz application, ready to run in the terminal.
pub struct IdiomMaster {
    app: App,
    client: Option<ExplanationClient>,
}

impl IdiomMaster {
    /// Create the application over `corpus`.
    ///
    /// Without a client config every explanation lookup comes back
    /// unavailable. A `seed` makes question selection reproducible.
    pub fn new(corpus: Corpus, config: Option<ClientConfig>, seed: Option<u64>) -> Result<Self, AppError> {
        let client = match config {
            Some(config) => Some(ExplanationClient::new(config)?),
            None => {
                warn!("No API key configured; AI explanations are disabled");
                None
            }
        };

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let app = App::new(Arc::new(corpus), rng, client.is_some());
        Ok(Self { app, client })
    }

    /// Create the application over the bundled idioms.
    pub fn from_bundled(config: Option<ClientConfig>, seed: Option<u64>) -> Result<Self, AppError> {
        Self::new(load_bundled_corpus()?, config, seed)
    }

    /// Run in the terminal until the user quits.
    pub async fn run(mut self) -> Result<(), AppError> {
        info!("Starting quiz with {} idioms", self.app.corpus().len());

        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app, self.client.as_ref()).await;
        terminal::restore()?;
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

async fn run_event_loop(
    terminal: &mut terminal::AppTerminal,
    app: &mut App,
    client: Option<&ExplanationClient>,
) -> Result<(), AppError> {
    let (tx, mut rx) = mpsc::unbounded_channel::<ExplanationReply>();

    loop {
        while let Ok(reply) = rx.try_recv() {
            app.session_mut().apply_explanation(reply.round, reply.explanation);
        }

        terminal.draw(|frame| ui::render(frame, app))?;

        let Some(key) = terminal::poll_key(TICK)? else {
            tokio::task::yield_now().await;
            continue;
        };

        match handle_input(app, key) {
            Flow::Continue => {}
            Flow::Quit => break,
            Flow::Lookup(request) => dispatch_lookup(client, request, &tx),
        }
    }

    Ok(())
}

/// Run one lookup in the background and send its result back to the loop.
fn dispatch_lookup(
    client: Option<&ExplanationClient>,
    request: ExplanationRequest,
    tx: &mpsc::UnboundedSender<ExplanationReply>,
) {
    let Some(client) = client.cloned() else {
        let _ = tx.send(ExplanationReply {
            round: request.round,
            explanation: None,
        });
        return;
    };

    debug!("Dispatching explanation lookup for {:?}", request.round);
    let tx = tx.clone();
    tokio::spawn(async move {
        let explanation = client
            .fetch_explanation(&request.english, &request.vietnamese)
            .await;
        let _ = tx.send(ExplanationReply {
            round: request.round,
            explanation,
        });
    });
}

fn handle_input(app: &mut App, key: KeyEvent) -> Flow {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Flow::Quit;
    }

    match app.screen {
        Screen::Landing => handle_landing_input(app, key.code),
        Screen::Quiz => handle_quiz_input(app, key.code),
        Screen::Library => handle_library_input(app, key.code),
    }
}

fn handle_landing_input(app: &mut App, key: KeyCode) -> Flow {
    match key {
        KeyCode::Enter | KeyCode::Char('1') => app.open_quiz(),
        KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('2') => app.open_library(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Flow::Quit,
        _ => {}
    }
    Flow::Continue
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> Flow {
    let session = app.session_mut();

    if session.is_graded() {
        match key {
            KeyCode::Enter | KeyCode::Char('n') | KeyCode::Char('N') => {
                session.next_question();
            }
            KeyCode::Char('e') | KeyCode::Char('E') => {
                if let Some(request) = session.request_explanation() {
                    return Flow::Lookup(request);
                }
            }
            KeyCode::Esc => app.go_home(),
            _ => {}
        }
        return Flow::Continue;
    }

    match key {
        KeyCode::Enter => {
            session.submit();
        }
        KeyCode::Tab => {
            session.skip();
        }
        KeyCode::Backspace => session.pop_char(),
        KeyCode::Char(c) => session.push_char(c),
        KeyCode::Esc => app.go_home(),
        _ => {}
    }
    Flow::Continue
}

fn handle_library_input(app: &mut App, key: KeyCode) -> Flow {
    match key {
        KeyCode::Down => app.scroll_library_down(),
        KeyCode::Up => app.scroll_library_up(),
        KeyCode::Backspace => app.library_query_pop(),
        KeyCode::Char(c) => app.library_query_push(c),
        KeyCode::Esc => app.go_home(),
        _ => {}
    }
    Flow::Continue
}

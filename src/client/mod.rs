//! Client for the AI explanation service.

mod client;
mod config;
mod error;

pub use client::ExplanationClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT};
pub use error::ExplanationError;

//! HTTP client for the explanation service.

use std::sync::Arc;

use log::{debug, warn};

use crate::models::Explanation;
use crate::protocol::{parse_explanation, GenerateContentRequest, GenerateContentResponse, SchemaError};

use super::config::ClientConfig;
use super::error::ExplanationError;

/// Longest slice of an error body kept for the log.
const ERROR_BODY_EXCERPT: usize = 200;

/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct ExplanationClient {
    http: reqwest::Client,
    config: Arc<ClientConfig>,
}

impl ExplanationClient {
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Ask the service to explain one idiom.
    ///
    /// Makes exactly one request. Any failure, including a response that does
    /// not match the explanation schema, is logged and reported as `None`.
    pub async fn fetch_explanation(&self, english: &str, vietnamese: &str) -> Option<Explanation> {
        match self.request_explanation(english, vietnamese).await {
            Ok(explanation) => Some(explanation),
            Err(e) => {
                warn!("Explanation for {:?} unavailable: {}", english, e);
                None
            }
        }
    }

    async fn request_explanation(&self, english: &str, vietnamese: &str) -> Result<Explanation, ExplanationError> {
        let request = GenerateContentRequest::explanation(english, vietnamese);
        debug!("Requesting explanation for {:?} from {}", english, self.config.model);

        let response = self
            .http
            .post(self.config.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let raw = response.text().await?;
        if !status.is_success() {
            return Err(ExplanationError::Status {
                status,
                body: raw.chars().take(ERROR_BODY_EXCERPT).collect(),
            });
        }

        let body: GenerateContentResponse = serde_json::from_str(&raw).map_err(SchemaError::NotJson)?;
        let text = body.text().ok_or(SchemaError::NoCandidateText)?;
        Ok(parse_explanation(&text)?)
    }
}

//! Adapters for the transcription and language-generation services.
//!
//! Both are opaque request/response collaborators behind async traits, so
//! the session core can be exercised with mocks and the OpenAI-compatible
//! implementations stay at the edge.

mod generation;
mod transcription;

pub use generation::{ChatGenerator, PromptContext, QuestionGenerator};
pub use transcription::{Transcriber, WhisperTranscriber};

use anyhow::{Context, Result};

/// Shared, read-only handle to an OpenAI-compatible API.
///
/// Built once at startup and cloned into each adapter; never mutated after
/// construction, so one handle serves every session.
#[derive(Clone)]
pub struct OpenAiClient {
    pub(crate) http: reqwest::Client,
    pub(crate) api_base: String,
    pub(crate) api_key: String,
}

impl OpenAiClient {
    /// Reads the API key from `OPENAI_API_KEY`.
    pub fn from_env(api_base: impl Into<String>) -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").context("OPENAI_API_KEY is not set")?;

        Ok(Self::new(api_base, api_key))
    }

    pub fn new(api_base: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.into(),
            api_key: api_key.into(),
        }
    }
}

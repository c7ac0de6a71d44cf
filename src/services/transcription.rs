use async_trait::async_trait;
use reqwest::multipart;
use std::time::Duration;
use tracing::warn;

use super::OpenAiClient;
use crate::error::TranscriptionFailure;

/// Speech-to-text boundary.
///
/// An empty or whitespace-only transcript is a valid result, not an error;
/// it means the clip held no intelligible speech.
#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, clip: Vec<u8>, language: &str)
        -> Result<String, TranscriptionFailure>;
}

/// Whisper transcription over an OpenAI-compatible API.
pub struct WhisperTranscriber {
    client: OpenAiClient,
    model: String,
}

impl WhisperTranscriber {
    pub fn new(client: OpenAiClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

#[async_trait]
impl Transcriber for WhisperTranscriber {
    async fn transcribe(
        &self,
        clip: Vec<u8>,
        language: &str,
    ) -> Result<String, TranscriptionFailure> {
        let file_part = multipart::Part::bytes(clip)
            .file_name("clip.wav")
            .mime_str("audio/wav")?;

        let form = multipart::Form::new()
            .part("file", file_part)
            .text("model", self.model.clone())
            .text("language", language.to_string())
            .text("response_format", "text");

        let response = self
            .client
            .http
            .post(format!("{}/audio/transcriptions", self.client.api_base))
            .bearer_auth(&self.client.api_key)
            .multipart(form)
            .timeout(Duration::from_secs(60))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("Transcription service returned HTTP {}: {}", status, body);
            return Err(TranscriptionFailure {
                message: format!("service returned HTTP {status}"),
            });
        }

        // With response_format=text the body is the bare transcript.
        Ok(response.text().await?)
    }
}

//! Typed failures for the interview core's collaborators.
//!
//! All three are recovered at the turn level: the candidate is asked to
//! repeat (or the utterance is dropped) and the session stays usable.

use thiserror::Error;

/// Speech-to-text call failed (network, timeout, or malformed audio).
#[derive(Debug, Error)]
#[error("transcription failed: {message}")]
pub struct TranscriptionFailure {
    pub message: String,
}

impl From<reqwest::Error> for TranscriptionFailure {
    fn from(err: reqwest::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// The language-generation service did not return a usable question.
#[derive(Debug, Error)]
#[error("follow-up generation failed: {message}")]
pub struct GenerationFailure {
    pub message: String,
}

impl From<reqwest::Error> for GenerationFailure {
    fn from(err: reqwest::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// An utterance could not be delivered to the connection.
#[derive(Debug, Error)]
#[error("utterance delivery failed: {message}")]
pub struct TransportFailure {
    pub message: String,
}

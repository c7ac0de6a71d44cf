use std::time::Duration;

use crate::audio::ClipSpec;

/// Configuration for one interview session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Unique session identifier (e.g., "interview-<uuid>")
    pub session_id: String,

    /// Target job title; immutable for the session lifetime
    pub role: String,

    /// Opening questions; the first is asked at start
    pub questions: Vec<String>,

    /// Overall interview bound. The client-side countdown enforces it;
    /// the session only reports it.
    pub duration: Duration,

    /// How often buffered audio is flushed for transcription
    /// Default: 10 seconds
    pub flush_interval: Duration,

    /// WAV framing for flushed clips
    pub clip_spec: ClipSpec,

    /// Language hint passed to the transcription service
    pub language: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_id: format!("interview-{}", uuid::Uuid::new_v4()),
            role: "Full Stack Developer".to_string(),
            questions: Vec::new(),
            duration: Duration::from_secs(300),
            flush_interval: Duration::from_secs(10),
            clip_spec: ClipSpec::default(),
            language: "en".to_string(),
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Point-in-time view of a session for the inspection endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session_id: String,

    pub role: String,

    /// "idle", "interviewing", or "ended"
    pub phase: String,

    /// When the session was created
    pub started_at: DateTime<Utc>,

    /// Seconds since creation
    pub elapsed_secs: f64,

    /// Seconds left of the configured bound; zero once exceeded
    pub remaining_secs: f64,

    /// Number of questions asked so far
    pub questions_asked: usize,

    /// Number of topics the candidate could not answer
    pub dont_know_topics: usize,
}

/// Asked questions and don't-know topics, in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionHistory {
    pub asked_questions: Vec<String>,
    pub dont_know_topics: Vec<String>,
}

use crate::config::Config;
use crate::services::{QuestionGenerator, Transcriber};
use crate::session::InterviewSession;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,

    /// Shared read-only service handles, one per process
    pub transcriber: Arc<dyn Transcriber>,
    pub generator: Arc<dyn QuestionGenerator>,

    /// Active interview sessions (session_id → session)
    pub sessions: Arc<RwLock<HashMap<String, Arc<InterviewSession>>>>,
}

impl AppState {
    pub fn new(
        config: Arc<Config>,
        transcriber: Arc<dyn Transcriber>,
        generator: Arc<dyn QuestionGenerator>,
    ) -> Self {
        Self {
            config,
            transcriber,
            generator,
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

use super::aggregator::Aggregator;
use super::config::SessionConfig;
use super::snapshot::{SessionHistory, SessionSnapshot};
use crate::services::{QuestionGenerator, Transcriber};
use crate::transport::UtteranceSink;
use chrono::Utc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

const GREETING: &str = "Hello! Welcome to the interview. Let's begin with a few technical questions.";

/// Lifecycle phase of a session. Single-use: there is no way out of `Ended`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Interviewing,
    Ended,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Interviewing => "interviewing",
            Phase::Ended => "ended",
        }
    }
}

/// State shared between the session handle and its flush task.
pub(crate) struct Shared {
    pub(crate) state: Mutex<State>,

    /// Checked before every utterance, so a pipeline racing `stop()`
    /// discards its output instead of emitting to a dead connection.
    pub(crate) ended: AtomicBool,
}

pub(crate) struct State {
    pub(crate) phase: Phase,

    /// Append-only, insertion order significant: the sequence is both the
    /// "do not repeat" context and the source of "the last topic".
    pub(crate) asked_questions: Vec<String>,

    /// Append-only list of topics the candidate could not answer
    pub(crate) dont_know_topics: Vec<String>,

    /// Fragments received since the last completed flush
    pub(crate) audio_buffer: Vec<Vec<u8>>,

    /// True once a flush loop has been scheduled for this session
    pub(crate) buffering: bool,
}

/// One candidate's interview: per-connection state machine plus the
/// periodic audio flush pipeline.
pub struct InterviewSession {
    config: SessionConfig,

    shared: Arc<Shared>,

    transcriber: Arc<dyn Transcriber>,

    generator: Arc<dyn QuestionGenerator>,

    sink: Arc<dyn UtteranceSink>,

    /// Handle for the flush loop task; taken and aborted on stop
    flush_task: Mutex<Option<JoinHandle<()>>>,

    /// When the session was created
    started_at: chrono::DateTime<Utc>,
}

impl InterviewSession {
    pub fn new(
        config: SessionConfig,
        transcriber: Arc<dyn Transcriber>,
        generator: Arc<dyn QuestionGenerator>,
        sink: Arc<dyn UtteranceSink>,
    ) -> Self {
        info!("Creating interview session: {}", config.session_id);

        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(State {
                    phase: Phase::Idle,
                    asked_questions: Vec::new(),
                    dont_know_topics: Vec::new(),
                    audio_buffer: Vec::new(),
                    buffering: false,
                }),
                ended: AtomicBool::new(false),
            }),
            transcriber,
            generator,
            sink,
            flush_task: Mutex::new(None),
            started_at: Utc::now(),
            config,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.config.session_id
    }

    /// Greets the candidate and asks the first configured question.
    ///
    /// The question is recorded as asked before anything is spoken, so the
    /// "do not repeat" context is correct even if transcription starts
    /// immediately. Valid only from `Idle`; otherwise a warning, never a
    /// second greeting.
    pub async fn start(&self) {
        {
            let mut state = self.shared.state.lock().await;
            if state.phase != Phase::Idle {
                warn!(
                    "start called on session {} in phase {}; ignoring",
                    self.config.session_id,
                    state.phase.as_str()
                );
                return;
            }
            state.phase = Phase::Interviewing;
            if let Some(first) = self.config.questions.first() {
                state.asked_questions.push(first.clone());
            }
        }

        info!("Starting interview session: {}", self.config.session_id);

        self.speak(GREETING).await;
        if let Some(first) = self.config.questions.first() {
            self.speak(first).await;
        }
    }

    /// Buffers one audio fragment; schedules the flush loop on the first.
    ///
    /// Called once per streamed fragment, typically sub-second apart; a
    /// flush happens per timer tick, never per call. Empty fragments and
    /// fragments outside `Interviewing` are dropped.
    pub async fn feed_audio(&self, fragment: Vec<u8>) {
        if fragment.is_empty() {
            warn!(
                "Received empty audio fragment for session {}; dropping",
                self.config.session_id
            );
            return;
        }

        let schedule = {
            let mut state = self.shared.state.lock().await;
            if state.phase != Phase::Interviewing {
                warn!(
                    "Audio fragment for session {} in phase {}; dropping",
                    self.config.session_id,
                    state.phase.as_str()
                );
                return;
            }

            state.audio_buffer.push(fragment);

            // Only the first fragment schedules the loop.
            !std::mem::replace(&mut state.buffering, true)
        };

        if schedule {
            let aggregator = Aggregator {
                shared: Arc::clone(&self.shared),
                transcriber: Arc::clone(&self.transcriber),
                generator: Arc::clone(&self.generator),
                sink: Arc::clone(&self.sink),
                session_id: self.config.session_id.clone(),
                role: self.config.role.clone(),
                language: self.config.language.clone(),
                clip_spec: self.config.clip_spec,
                flush_interval: self.config.flush_interval,
            };

            let handle = tokio::spawn(aggregator.run());

            let mut task = self.flush_task.lock().await;
            *task = Some(handle);
        }
    }

    /// Ends the session: cancels the flush loop and clears buffered audio.
    ///
    /// Idempotent; valid from `Idle` or `Interviewing`.
    pub async fn stop(&self) {
        self.shared.ended.store(true, Ordering::SeqCst);

        {
            let mut state = self.shared.state.lock().await;
            if state.phase == Phase::Ended {
                return;
            }
            state.phase = Phase::Ended;
            state.audio_buffer.clear();
            state.buffering = false;
        }

        if let Some(task) = self.flush_task.lock().await.take() {
            task.abort();
        }

        info!("Interview session {} ended", self.config.session_id);
    }

    /// Current lifecycle and history counts.
    pub async fn snapshot(&self) -> SessionSnapshot {
        let state = self.shared.state.lock().await;

        let elapsed = Utc::now()
            .signed_duration_since(self.started_at)
            .num_milliseconds() as f64
            / 1000.0;
        let remaining = (self.config.duration.as_secs_f64() - elapsed).max(0.0);

        SessionSnapshot {
            session_id: self.config.session_id.clone(),
            role: self.config.role.clone(),
            phase: state.phase.as_str().to_string(),
            started_at: self.started_at,
            elapsed_secs: elapsed,
            remaining_secs: remaining,
            questions_asked: state.asked_questions.len(),
            dont_know_topics: state.dont_know_topics.len(),
        }
    }

    /// Asked questions and don't-know topics, in insertion order.
    pub async fn history(&self) -> SessionHistory {
        let state = self.shared.state.lock().await;

        SessionHistory {
            asked_questions: state.asked_questions.clone(),
            dont_know_topics: state.dont_know_topics.clone(),
        }
    }

    async fn speak(&self, text: &str) {
        speak_through(
            self.sink.as_ref(),
            &self.shared,
            &self.config.session_id,
            text,
        )
        .await;
    }
}

/// Delivers one utterance unless the session has ended. Delivery failures
/// are logged; the session continues.
pub(crate) async fn speak_through(
    sink: &dyn UtteranceSink,
    shared: &Shared,
    session_id: &str,
    text: &str,
) {
    if shared.ended.load(Ordering::SeqCst) {
        warn!("Dropping utterance for ended session {}", session_id);
        return;
    }

    if let Err(e) = sink.deliver(session_id, text).await {
        error!(
            "Failed to deliver utterance for session {}: {}",
            session_id, e
        );
    }
}

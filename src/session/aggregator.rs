use super::session::{speak_through, Phase, Shared};
use crate::audio::{encode_clip, ClipSpec};
use crate::classifier;
use crate::services::{PromptContext, QuestionGenerator, Transcriber};
use crate::transport::UtteranceSink;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{error, info, warn};

const RETRY_PROMPT: &str = "I'm sorry, I couldn't understand that. Could you please repeat?";
const UNCLEAR_PROMPT: &str = "I couldn't hear you clearly. Could you repeat?";

/// Per-session flush loop.
///
/// One aggregator task runs per session once audio starts arriving. Each
/// tick drains the pending buffer and runs the full
/// transcribe-classify-generate-speak pipeline inline, so the next tick
/// cannot start while a pipeline for this session is still in flight.
/// Sessions run their own tasks and never touch each other's state.
pub(crate) struct Aggregator {
    pub(crate) shared: Arc<Shared>,
    pub(crate) transcriber: Arc<dyn Transcriber>,
    pub(crate) generator: Arc<dyn QuestionGenerator>,
    pub(crate) sink: Arc<dyn UtteranceSink>,
    pub(crate) session_id: String,
    pub(crate) role: String,
    pub(crate) language: String,
    pub(crate) clip_spec: ClipSpec,
    pub(crate) flush_interval: Duration,
}

impl Aggregator {
    pub(crate) async fn run(self) {
        info!("Flush loop started for session {}", self.session_id);

        let mut ticker = interval(self.flush_interval);
        // A slow pipeline delays the next tick instead of stacking ticks.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately; skip it so the first flush
        // happens one full interval after audio starts.
        ticker.tick().await;

        loop {
            ticker.tick().await;

            if self.shared.ended.load(Ordering::SeqCst) {
                break;
            }

            // Take the buffer in one step: fragments are consumed exactly
            // once per cycle, whether or not the cycle succeeds, and new
            // fragments accumulate for the next cycle.
            let fragments = {
                let mut state = self.shared.state.lock().await;
                std::mem::take(&mut state.audio_buffer)
            };

            if fragments.is_empty() {
                continue;
            }

            self.flush(fragments).await;
        }

        info!("Flush loop stopped for session {}", self.session_id);
    }

    /// One flush cycle: concatenate, transcribe, classify, generate, speak.
    ///
    /// Every failure resolves to a retry prompt or a silent drop; history is
    /// only mutated on the success paths.
    async fn flush(&self, fragments: Vec<Vec<u8>>) {
        let clip = match encode_clip(&fragments, self.clip_spec) {
            Ok(clip) => clip,
            Err(e) => {
                error!(
                    "Failed to encode clip for session {}: {}",
                    self.session_id, e
                );
                return;
            }
        };

        let transcript = match self.transcriber.transcribe(clip, &self.language).await {
            Ok(text) => text,
            Err(e) => {
                error!("Transcription failed for session {}: {}", self.session_id, e);
                self.speak(RETRY_PROMPT).await;
                return;
            }
        };

        if transcript.trim().is_empty() {
            warn!("Empty transcript for session {}", self.session_id);
            self.speak(UNCLEAR_PROMPT).await;
            return;
        }

        info!(
            "Session {} candidate said: {}",
            self.session_id,
            transcript.trim()
        );

        if classifier::expresses_uncertainty(&transcript) {
            let last_topic = {
                let mut state = self.shared.state.lock().await;
                if state.phase != Phase::Interviewing {
                    return;
                }
                let topic = state
                    .asked_questions
                    .last()
                    .cloned()
                    .unwrap_or_else(|| "unknown topic".to_string());
                state.dont_know_topics.push(topic.clone());
                topic
            };

            self.speak(&format!(
                "No problem with {last_topic}. Let's move to a different topic."
            ))
            .await;
        }

        let (asked, dont_know) = {
            let state = self.shared.state.lock().await;
            (
                state.asked_questions.clone(),
                state.dont_know_topics.clone(),
            )
        };

        let question = match self
            .generator
            .follow_up(PromptContext {
                role: &self.role,
                asked_questions: &asked,
                dont_know_topics: &dont_know,
                transcript: transcript.trim(),
            })
            .await
        {
            Ok(question) => question,
            Err(e) => {
                error!(
                    "Follow-up generation failed for session {}: {}",
                    self.session_id, e
                );
                self.speak(RETRY_PROMPT).await;
                return;
            }
        };

        // Record before speaking so the next cycle sees this question as
        // the last topic.
        {
            let mut state = self.shared.state.lock().await;
            if state.phase != Phase::Interviewing {
                warn!(
                    "Session {} ended mid-flush; discarding follow-up",
                    self.session_id
                );
                return;
            }
            state.asked_questions.push(question.clone());
        }

        self.speak(&question).await;
    }

    async fn speak(&self, text: &str) {
        speak_through(self.sink.as_ref(), &self.shared, &self.session_id, text).await;
    }
}

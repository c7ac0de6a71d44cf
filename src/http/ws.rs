use super::state::AppState;
use crate::audio::ClipSpec;
use crate::session::{InterviewSession, SessionConfig};
use crate::transport::ChannelSink;
use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use base64::Engine;
use futures::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Client → server events on the interview socket
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientEvent {
    /// Candidate is ready; greet and ask the first question
    Start,
    /// One streamed audio fragment, base64-encoded s16le PCM
    Audio { pcm: String },
    /// Client-side countdown expired or the candidate left
    Stop,
}

/// Server → client events
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerEvent<'a> {
    /// One interviewer utterance to display and speak
    Utterance { text: &'a str },
}

/// GET /ws
/// Upgrade to the interview socket; one session per connection
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let (mut ws_tx, mut ws_rx) = socket.split();
    let (utter_tx, mut utter_rx) = mpsc::channel::<String>(64);

    let cfg = &state.config;
    let session_config = SessionConfig {
        session_id: format!("interview-{}", uuid::Uuid::new_v4()),
        role: cfg.interview.role.clone(),
        questions: cfg.interview.questions.clone(),
        duration: Duration::from_secs(cfg.interview.duration_secs),
        flush_interval: Duration::from_secs(cfg.interview.flush_interval_secs),
        clip_spec: ClipSpec {
            sample_rate: cfg.audio.sample_rate,
            channels: cfg.audio.channels,
        },
        language: cfg.interview.language.clone(),
    };

    let session = Arc::new(InterviewSession::new(
        session_config,
        Arc::clone(&state.transcriber),
        Arc::clone(&state.generator),
        Arc::new(ChannelSink::new(utter_tx)),
    ));
    let session_id = session.session_id().to_string();

    info!("Client connected: {}", session_id);

    {
        let mut sessions = state.sessions.write().await;
        sessions.insert(session_id.clone(), Arc::clone(&session));
    }

    // Forward utterances to the socket in emission order.
    let sender_task = tokio::spawn(async move {
        while let Some(text) = utter_rx.recv().await {
            let payload = match serde_json::to_string(&ServerEvent::Utterance { text: &text }) {
                Ok(payload) => payload,
                Err(e) => {
                    warn!("Failed to encode utterance: {}", e);
                    continue;
                }
            };

            if ws_tx.send(Message::Text(payload)).await.is_err() {
                break;
            }
        }
    });

    while let Some(Ok(message)) = ws_rx.next().await {
        match message {
            Message::Text(text) => match serde_json::from_str::<ClientEvent>(&text) {
                Ok(ClientEvent::Start) => session.start().await,
                Ok(ClientEvent::Audio { pcm }) => {
                    match base64::engine::general_purpose::STANDARD.decode(pcm) {
                        Ok(fragment) => session.feed_audio(fragment).await,
                        Err(e) => {
                            warn!("Undecodable audio fragment for {}: {}", session_id, e);
                        }
                    }
                }
                Ok(ClientEvent::Stop) => {
                    session.stop().await;
                    break;
                }
                Err(e) => warn!("Unrecognized client event for {}: {}", session_id, e),
            },
            Message::Close(_) => break,
            _ => {}
        }
    }

    info!("Client disconnected: {}", session_id);

    session.stop().await;
    sender_task.abort();

    let mut sessions = state.sessions.write().await;
    sessions.remove(&session_id);
}

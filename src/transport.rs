//! Outbound utterance delivery.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::error::TransportFailure;

/// Transport seam for interviewer utterances.
///
/// Implementations must preserve per-session emission order; the session
/// core awaits each delivery before emitting the next.
#[async_trait]
pub trait UtteranceSink: Send + Sync {
    async fn deliver(&self, session_id: &str, text: &str) -> Result<(), TransportFailure>;
}

/// Sink backed by a per-connection channel.
///
/// A single consumer task forwards messages to the socket, so ordering
/// follows the channel.
pub struct ChannelSink {
    tx: mpsc::Sender<String>,
}

impl ChannelSink {
    pub fn new(tx: mpsc::Sender<String>) -> Self {
        Self { tx }
    }
}

#[async_trait]
impl UtteranceSink for ChannelSink {
    async fn deliver(&self, _session_id: &str, text: &str) -> Result<(), TransportFailure> {
        self.tx
            .send(text.to_string())
            .await
            .map_err(|_| TransportFailure {
                message: "connection closed".to_string(),
            })
    }
}

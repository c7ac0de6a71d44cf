//! Interview session management
//!
//! This module provides the `InterviewSession` state machine that manages:
//! - Session lifecycle (idle → interviewing → ended, single-use)
//! - Asked-question and don't-know-topic history
//! - Buffering of streamed audio fragments
//! - The periodic flush pipeline (transcribe → classify → generate → speak)

mod aggregator;
mod config;
mod session;
mod snapshot;

pub use config::SessionConfig;
pub use session::{InterviewSession, Phase};
pub use snapshot::{SessionHistory, SessionSnapshot};

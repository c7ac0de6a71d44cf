pub mod audio;
pub mod classifier;
pub mod config;
pub mod error;
pub mod http;
pub mod services;
pub mod session;
pub mod transport;

pub use audio::{encode_clip, ClipSpec};
pub use config::Config;
pub use error::{GenerationFailure, TranscriptionFailure, TransportFailure};
pub use http::{create_router, AppState, ClientEvent, ServerEvent};
pub use services::{
    ChatGenerator, OpenAiClient, PromptContext, QuestionGenerator, Transcriber, WhisperTranscriber,
};
pub use session::{InterviewSession, Phase, SessionConfig, SessionHistory, SessionSnapshot};
pub use transport::{ChannelSink, UtteranceSink};

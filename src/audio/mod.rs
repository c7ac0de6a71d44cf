//! Clip assembly for flushed audio buffers.
//!
//! Streamed fragments are raw little-endian 16-bit PCM; a flush cycle
//! concatenates them in arrival order and frames the result as one WAV
//! clip for the transcription service.

mod clip;

pub use clip::{encode_clip, ClipSpec};

use anyhow::{Context, Result};
use std::io::Cursor;

/// WAV framing for a flushed clip.
#[derive(Debug, Clone, Copy)]
pub struct ClipSpec {
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Number of channels (1 = mono)
    pub channels: u16,
}

impl Default for ClipSpec {
    fn default() -> Self {
        Self {
            sample_rate: 44_000,
            channels: 1,
        }
    }
}

/// Concatenate raw PCM fragments, in arrival order, into a single in-memory
/// WAV clip.
///
/// Fragment order is the candidate's speech order; reordering here would
/// garble the transcription input. Writing to memory rather than a temp file
/// leaves nothing to clean up when a flush cycle exits early.
pub fn encode_clip(fragments: &[Vec<u8>], spec: ClipSpec) -> Result<Vec<u8>> {
    let wav_spec = hound::WavSpec {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    let mut writer =
        hound::WavWriter::new(&mut cursor, wav_spec).context("Failed to start WAV clip")?;

    for fragment in fragments {
        // Fragments are s16le; a trailing odd byte is dropped.
        for sample in fragment.chunks_exact(2) {
            writer
                .write_sample(i16::from_le_bytes([sample[0], sample[1]]))
                .context("Failed to write sample to WAV clip")?;
        }
    }

    writer.finalize().context("Failed to finalize WAV clip")?;

    Ok(cursor.into_inner())
}

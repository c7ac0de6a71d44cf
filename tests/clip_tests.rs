// Integration tests for clip assembly
//
// These tests verify that buffered PCM fragments are concatenated in
// arrival order and framed as a valid in-memory WAV clip.

use anyhow::Result;
use intervox::{encode_clip, ClipSpec};
use std::io::Cursor;

fn pcm(samples: &[i16]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}

#[test]
fn clip_preserves_fragment_order() -> Result<()> {
    let fragments = vec![pcm(&[1, 2, 3]), pcm(&[4]), pcm(&[5, 6])];

    let clip = encode_clip(&fragments, ClipSpec::default())?;

    let reader = hound::WavReader::new(Cursor::new(clip))?;
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 44_000);
    assert_eq!(spec.bits_per_sample, 16);

    let samples: Vec<i16> = reader.into_samples::<i16>().collect::<Result<_, _>>()?;
    assert_eq!(samples, vec![1, 2, 3, 4, 5, 6]);

    Ok(())
}

#[test]
fn clip_uses_configured_framing() -> Result<()> {
    let spec = ClipSpec {
        sample_rate: 16_000,
        channels: 1,
    };

    let clip = encode_clip(&[pcm(&[7, 8])], spec)?;

    let reader = hound::WavReader::new(Cursor::new(clip))?;
    assert_eq!(reader.spec().sample_rate, 16_000);

    Ok(())
}

#[test]
fn trailing_odd_byte_is_dropped() -> Result<()> {
    let mut fragment = pcm(&[9, 10]);
    fragment.push(0xAB);

    let clip = encode_clip(&[fragment], ClipSpec::default())?;

    let samples: Vec<i16> = hound::WavReader::new(Cursor::new(clip))?
        .into_samples::<i16>()
        .collect::<Result<_, _>>()?;
    assert_eq!(samples, vec![9, 10]);

    Ok(())
}

#[test]
fn empty_fragment_list_yields_valid_empty_clip() -> Result<()> {
    let clip = encode_clip(&[], ClipSpec::default())?;

    let reader = hound::WavReader::new(Cursor::new(clip))?;
    assert_eq!(reader.len(), 0);

    Ok(())
}

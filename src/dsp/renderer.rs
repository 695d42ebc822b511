//! WAV renderer — encodes a tone to a 16-bit mono WAV and wraps it in a
//! base64 data URI a browser can play directly.

use std::io::Cursor;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::SynthError;

/// Prefix of every audio data URI we produce.
pub const DATA_URI_PREFIX: &str = "data:audio/wav;base64,";

const BITS_PER_SAMPLE: u16 = 16;

fn wav_spec(sample_rate: u32) -> hound::WavSpec {
    hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: hound::SampleFormat::Int,
    }
}

/// Quantize a sample in [-1, 1] to 16-bit PCM.
fn to_i16(sample: f64) -> i16 {
    (sample * 32767.0).round().clamp(-32768.0, 32767.0) as i16
}

/// Encode mono samples to a WAV byte buffer (16-bit PCM).
pub fn encode_wav(samples: &[f64], sample_rate: u32) -> Result<Vec<u8>, SynthError> {
    let mut cursor = Cursor::new(Vec::with_capacity(44 + samples.len() * 2));
    {
        let mut writer = hound::WavWriter::new(&mut cursor, wav_spec(sample_rate))?;
        for &s in samples {
            writer.write_sample(to_i16(s))?;
        }
        writer.finalize()?;
    }
    Ok(cursor.into_inner())
}

/// Decode a WAV byte buffer into its samples (interleaved when the file has
/// more than one channel) and its sample rate.
pub fn decode_wav(bytes: &[u8]) -> Result<(Vec<f64>, u32), SynthError> {
    let reader = hound::WavReader::new(Cursor::new(bytes))?;
    let spec = reader.spec();
    let samples = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .into_samples::<f32>()
            .map(|s| s.map(|v| v as f64))
            .collect::<Result<Vec<_>, _>>()?,
        hound::SampleFormat::Int => {
            let scale = (1_i64 << (spec.bits_per_sample - 1)) as f64 - 1.0;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f64 / scale))
                .collect::<Result<Vec<_>, _>>()?
        }
    };
    Ok((samples, spec.sample_rate))
}

/// Wrap WAV bytes as `data:audio/wav;base64,...`.
pub fn to_data_uri(wav: &[u8]) -> String {
    format!("{DATA_URI_PREFIX}{}", STANDARD.encode(wav))
}

/// Extract the WAV bytes from a data URI produced by [`to_data_uri`].
pub fn decode_data_uri(uri: &str) -> Result<Vec<u8>, SynthError> {
    let payload = uri.strip_prefix(DATA_URI_PREFIX).ok_or(SynthError::DataUri {
        reason: "expected a data:audio/wav;base64, prefix",
    })?;
    Ok(STANDARD.decode(payload)?)
}

/// Encode samples straight to a playable data URI.
pub fn render_data_uri(samples: &[f64], sample_rate: u32) -> Result<String, SynthError> {
    let wav = encode_wav(samples, sample_rate)?;
    Ok(to_data_uri(&wav))
}

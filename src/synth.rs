//! The piano synthesizer: note name in, playable clip out.

use log::debug;

use crate::config::SynthConfig;
use crate::dsp::{renderer, tone};
use crate::error::SynthError;
use crate::note;

/// A rendered note, ready to hand back to the browser.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedNote {
    pub note: String,
    pub frequency: f64,
    /// `data:audio/wav;base64,...`
    pub audio: String,
}

/// Holds the fixed configuration; every method is a pure function of it and
/// its arguments, so one instance can serve any number of requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct PianoSynthesizer {
    config: SynthConfig,
}

impl PianoSynthesizer {
    pub fn new(config: SynthConfig) -> Result<Self, SynthError> {
        config.validate()?;
        Ok(PianoSynthesizer { config })
    }

    pub fn note_to_frequency(&self, note: &str) -> f64 {
        note::resolve(note)
    }

    /// Generate a tone; `None` uses the configured default duration.
    pub fn generate_tone(
        &self,
        frequency: f64,
        duration: Option<f64>,
    ) -> Result<Vec<f64>, SynthError> {
        let duration = duration.unwrap_or(self.config.default_duration);
        tone::generate(&self.config, frequency, duration)
    }

    pub fn audio_to_data_uri(&self, samples: &[f64]) -> Result<String, SynthError> {
        renderer::render_data_uri(samples, self.config.sample_rate)
    }

    /// Resolve, synthesize and encode a single note.
    pub fn render_note(
        &self,
        note: &str,
        duration: Option<f64>,
    ) -> Result<RenderedNote, SynthError> {
        let frequency = self.note_to_frequency(note);
        let samples = self.generate_tone(frequency, duration)?;
        let audio = self.audio_to_data_uri(&samples)?;
        debug!("rendered {note} ({frequency:.3} Hz): {} bytes of data URI", audio.len());
        Ok(RenderedNote {
            note: note.to_string(),
            frequency,
            audio,
        })
    }
}

pub mod api;
pub mod config;
pub mod dsp;
pub mod error;
pub mod keyboard;
pub mod note;
pub mod synth;

use wasm_bindgen::prelude::*;

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// WASM-exposed: return the piano-synth-core version string.
#[wasm_bindgen]
pub fn core_version() -> String {
    VERSION.to_string()
}

/// WASM-exposed: resolve a note name (e.g. "C#4") to its frequency in Hz.
/// Malformed names resolve to 440 Hz.
#[wasm_bindgen]
pub fn note_frequency(note: &str) -> f64 {
    note::resolve(note)
}

/// WASM-exposed: render a note to a `{ success, audio, note, frequency }`
/// object, or `{ success: false, error }`.
#[wasm_bindgen]
pub fn generate_note(note: &str, duration: Option<f64>) -> Result<JsValue, JsValue> {
    let response = api::generate_note(note, duration);
    serde_wasm_bindgen::to_value(&response).map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: the on-screen keyboard layout as an array of
/// `{ note, type, frequency }`.
#[wasm_bindgen]
pub fn get_piano_keys() -> Result<JsValue, JsValue> {
    let keys = api::get_piano_keys();
    serde_wasm_bindgen::to_value(&keys).map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: note name bound to a `KeyboardEvent.code` in the selected
/// octave (e.g. "KeyA" in octave 4 → "C4"), or `undefined` if unbound.
#[wasm_bindgen]
pub fn note_for_key(code: &str, octave: u8) -> Option<String> {
    keyboard::note_for_key(code, octave)
}

/// WASM-exposed: render a note to raw mono f32 samples for AudioWorklet
/// playback, skipping the WAV/base64 step.
#[wasm_bindgen]
pub fn render_note_samples(note: &str, duration: Option<f64>) -> Result<Vec<f32>, JsValue> {
    let synth = synth::PianoSynthesizer::default();
    let frequency = synth.note_to_frequency(note);
    let samples = synth
        .generate_tone(frequency, duration)
        .map_err(|e| JsValue::from_str(&format!("{e}")))?;
    Ok(samples.iter().map(|&s| s as f32).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_binding_export() {
        assert_eq!(note_for_key("KeyW", 4).as_deref(), Some("C#4"));
        assert_eq!(note_for_key("KeyQ", 4), None);
    }

    #[test]
    fn note_frequency_export() {
        assert_eq!(note_frequency("A4"), 440.0);
        assert_eq!(note_frequency("?"), 440.0);
    }
}

//! Request/response surface consumed by the web front-end.
//!
//! These mirror the JSON bodies of the `generate_note` and
//! `get_piano_keys` endpoints, so a host can serialize them as-is.

use log::error;
use serde::{Deserialize, Serialize};

use crate::keyboard::{self, PianoKey};
use crate::synth::{PianoSynthesizer, RenderedNote};

/// Body of a `generate_note` request. `duration` defaults to the
/// synthesizer's configured default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteRequest {
    pub note: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

/// `{ success: true, audio, note, frequency }` or `{ success: false, error }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl NoteResponse {
    pub fn failure(message: impl Into<String>) -> Self {
        NoteResponse {
            success: false,
            audio: None,
            note: None,
            frequency: None,
            error: Some(message.into()),
        }
    }
}

impl From<RenderedNote> for NoteResponse {
    fn from(r: RenderedNote) -> Self {
        NoteResponse {
            success: true,
            audio: Some(r.audio),
            note: Some(r.note),
            frequency: Some(r.frequency),
            error: None,
        }
    }
}

/// Render a note with the given synthesizer; failures become a
/// `success: false` response rather than an error.
pub fn handle_note_request(synth: &PianoSynthesizer, request: &NoteRequest) -> NoteResponse {
    match synth.render_note(&request.note, request.duration) {
        Ok(rendered) => rendered.into(),
        Err(e) => {
            error!("failed to render note '{}': {e}", request.note);
            NoteResponse::failure(e.to_string())
        }
    }
}

/// Render `note` for `duration` seconds with the default synthesizer.
pub fn generate_note(note: &str, duration: Option<f64>) -> NoteResponse {
    let request = NoteRequest {
        note: note.to_string(),
        duration,
    };
    handle_note_request(&PianoSynthesizer::default(), &request)
}

/// The on-screen keyboard layout, octaves 3–5.
pub fn get_piano_keys() -> Vec<PianoKey> {
    keyboard::get_piano_keys()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_response_shape() {
        let response = generate_note("A4", Some(0.2));
        assert!(response.success);
        assert_eq!(response.frequency, Some(440.0));

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["note"], "A4");
        assert_eq!(json["frequency"], 440.0);
        assert!(json["audio"].as_str().unwrap().starts_with("data:audio/wav;base64,"));
        assert!(json.get("error").is_none());
    }

    #[test]
    fn failure_response_shape() {
        let response = generate_note("C4", Some(-1.0));
        assert!(!response.success);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], false);
        assert!(json["error"].as_str().unwrap().contains("Invalid duration"));
        assert!(json.get("audio").is_none());
    }

    #[test]
    fn long_notes_succeed() {
        let response = generate_note("A4", Some(12.0));
        assert!(response.success, "unexpected error: {:?}", response.error);
        assert_eq!(response.frequency, Some(440.0));
    }

    #[test]
    fn request_duration_defaults() {
        let request: NoteRequest = serde_json::from_str(r#"{"note": "G3"}"#).unwrap();
        assert_eq!(request.duration, None);

        let synth = PianoSynthesizer::default();
        let response = handle_note_request(&synth, &request);
        assert!(response.success);
        assert_eq!(response.note.as_deref(), Some("G3"));
    }

    #[test]
    fn piano_keys_json() {
        let json = serde_json::to_string(&get_piano_keys()).unwrap();
        let parsed: Vec<PianoKey> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 36);
        assert!(json.contains(r#""type":"white""#));
    }
}

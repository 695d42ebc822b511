//! Piano keyboard layout and computer-keyboard bindings.

use serde::{Deserialize, Serialize};

use crate::note::resolve;

/// Octaves shown on the on-screen keyboard.
pub const KEYBOARD_OCTAVES: [u8; 3] = [3, 4, 5];

const WHITE_KEYS: [&str; 7] = ["C", "D", "E", "F", "G", "A", "B"];

/// White keys followed by a black key (no black key after E or B).
const HAS_SHARP: [&str; 5] = ["C", "D", "F", "G", "A"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyColor {
    White,
    Black,
}

/// One key of the on-screen keyboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PianoKey {
    pub note: String,
    #[serde(rename = "type")]
    pub color: KeyColor,
    pub frequency: f64,
}

impl PianoKey {
    fn new(note: String, color: KeyColor) -> Self {
        let frequency = resolve(&note);
        PianoKey {
            note,
            color,
            frequency,
        }
    }
}

/// Keys for the given octaves in left-to-right keyboard order: each white
/// key, then its sharp where one exists.
pub fn piano_keys(octaves: &[u8]) -> Vec<PianoKey> {
    let mut keys = Vec::with_capacity(octaves.len() * 12);
    for octave in octaves {
        for name in WHITE_KEYS {
            keys.push(PianoKey::new(format!("{name}{octave}"), KeyColor::White));
            if HAS_SHARP.contains(&name) {
                keys.push(PianoKey::new(format!("{name}#{octave}"), KeyColor::Black));
            }
        }
    }
    keys
}

/// The default three-octave keyboard (C3–B5).
pub fn get_piano_keys() -> Vec<PianoKey> {
    piano_keys(&KEYBOARD_OCTAVES)
}

/// Home row plays white keys, the row above plays the black keys.
const KEY_BINDINGS: [(&str, &str); 12] = [
    ("KeyA", "C"),
    ("KeyS", "D"),
    ("KeyD", "E"),
    ("KeyF", "F"),
    ("KeyG", "G"),
    ("KeyH", "A"),
    ("KeyJ", "B"),
    ("KeyW", "C#"),
    ("KeyE", "D#"),
    ("KeyT", "F#"),
    ("KeyY", "G#"),
    ("KeyU", "A#"),
];

/// Note played by a `KeyboardEvent.code` in the selected octave, or `None`
/// if the key is not bound.
pub fn note_for_key(code: &str, octave: u8) -> Option<String> {
    KEY_BINDINGS
        .iter()
        .find(|(bound, _)| *bound == code)
        .map(|(_, name)| format!("{name}{octave}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_octaves_of_twelve() {
        let keys = get_piano_keys();
        assert_eq!(keys.len(), 36);
        assert_eq!(keys.iter().filter(|k| k.color == KeyColor::White).count(), 21);
        assert_eq!(keys.iter().filter(|k| k.color == KeyColor::Black).count(), 15);
    }

    #[test]
    fn no_black_key_after_e_or_b() {
        let keys = get_piano_keys();
        for octave in KEYBOARD_OCTAVES {
            for missing in ["E#", "B#"] {
                let name = format!("{missing}{octave}");
                assert!(keys.iter().all(|k| k.note != name), "{name} should not exist");
            }
        }
    }

    #[test]
    fn keyboard_order() {
        let keys = get_piano_keys();
        let first: Vec<&str> = keys.iter().take(5).map(|k| k.note.as_str()).collect();
        assert_eq!(first, vec!["C3", "C#3", "D3", "D#3", "E3"]);
        assert_eq!(keys[5].note, "F3");
        assert_eq!(keys.last().map(|k| k.note.as_str()), Some("B5"));
    }

    #[test]
    fn frequencies_rise_left_to_right() {
        let keys = get_piano_keys();
        for pair in keys.windows(2) {
            assert!(pair[1].frequency > pair[0].frequency, "{} !> {}", pair[1].note, pair[0].note);
        }
        let a4 = keys.iter().find(|k| k.note == "A4").unwrap();
        assert_eq!(a4.frequency, 440.0);
    }

    #[test]
    fn serializes_type_field() {
        let key = PianoKey::new("C#4".to_string(), KeyColor::Black);
        let json = serde_json::to_value(&key).unwrap();
        assert_eq!(json["note"], "C#4");
        assert_eq!(json["type"], "black");
        assert!(json["frequency"].as_f64().unwrap() > 277.0);
    }

    #[test]
    fn computer_key_bindings() {
        assert_eq!(note_for_key("KeyA", 4).as_deref(), Some("C4"));
        assert_eq!(note_for_key("KeyH", 3).as_deref(), Some("A3"));
        assert_eq!(note_for_key("KeyT", 5).as_deref(), Some("F#5"));
        assert_eq!(note_for_key("KeyZ", 4), None);
        assert_eq!(note_for_key("Space", 4), None);
    }
}

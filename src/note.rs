//! Note-name → frequency resolution (12-TET, A4 = 440 Hz).
//!
//! Resolution is permissive: a malformed note string never produces an
//! error, it resolves to [`Resolution::Fallback`] and plays at the
//! reference pitch instead.

use log::warn;

/// Frequency of A4 in Hz, and the pitch used for anything unparseable.
pub const REFERENCE_FREQUENCY: f64 = 440.0;
/// Octave that contains the reference A.
pub const REFERENCE_OCTAVE: i32 = 4;

/// Semitone offset from A within one octave, for every spelling we accept.
const SEMITONES_FROM_A: [(&str, i32); 17] = [
    ("C", -9),
    ("C#", -8),
    ("Db", -8),
    ("D", -7),
    ("D#", -6),
    ("Eb", -6),
    ("E", -5),
    ("F", -4),
    ("F#", -3),
    ("Gb", -3),
    ("G", -2),
    ("G#", -1),
    ("Ab", -1),
    ("A", 0),
    ("A#", 1),
    ("Bb", 1),
    ("B", 2),
];

/// A parsed note: the name part (letter, optionally followed by an
/// accidental) and a single-digit octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Note<'a> {
    pub name: &'a str,
    pub octave: u8,
}

impl Note<'_> {
    /// Offset from A in semitones, or `None` if the name is not a spelling
    /// in the table (e.g. "H", "E#", "c").
    pub fn semitone_offset(&self) -> Option<i32> {
        SEMITONES_FROM_A
            .iter()
            .find(|(name, _)| *name == self.name)
            .map(|&(_, offset)| offset)
    }

    /// Total semitone distance from A4. Unknown names count as A.
    pub fn semitones_from_a4(&self) -> i32 {
        let offset = self.semitone_offset().unwrap_or_else(|| {
            warn!("unknown note name '{}', treating it as A", self.name);
            0
        });
        offset + (self.octave as i32 - REFERENCE_OCTAVE) * 12
    }

    pub fn frequency(&self) -> f64 {
        semitones_to_frequency(self.semitones_from_a4())
    }
}

/// Outcome of parsing a note string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    Note(Note<'a>),
    /// Input was not a 2- or 3-character note; plays at the reference pitch.
    Fallback,
}

impl<'a> Resolution<'a> {
    /// Parse a note string such as `"A4"`, `"C#4"` or `"Bb3"`.
    ///
    /// Two characters are letter + octave digit, three are
    /// letter + accidental + octave digit. Any other length, or a last
    /// character that is not a digit, is a fallback.
    pub fn parse(input: &'a str) -> Self {
        let char_count = input.chars().count();
        if char_count != 2 && char_count != 3 {
            return Resolution::Fallback;
        }
        let Some((octave_idx, octave_ch)) = input.char_indices().last() else {
            return Resolution::Fallback;
        };
        match octave_ch.to_digit(10) {
            Some(octave) => Resolution::Note(Note {
                name: &input[..octave_idx],
                octave: octave as u8,
            }),
            None => Resolution::Fallback,
        }
    }

    pub fn frequency(&self) -> f64 {
        match self {
            Resolution::Note(note) => note.frequency(),
            Resolution::Fallback => REFERENCE_FREQUENCY,
        }
    }
}

/// Resolve a note string to a frequency in Hz. Never fails.
pub fn resolve(note: &str) -> f64 {
    let resolution = Resolution::parse(note);
    if resolution == Resolution::Fallback {
        warn!("malformed note '{note}', falling back to {REFERENCE_FREQUENCY} Hz");
    }
    resolution.frequency()
}

/// `440 * 2^(semitones / 12)`.
pub fn semitones_to_frequency(semitones: i32) -> f64 {
    REFERENCE_FREQUENCY * 2.0_f64.powf(semitones as f64 / 12.0)
}

//! Tone generator — harmonic stack, ADSR shaping, peak normalization.

use log::{debug, warn};

use crate::config::SynthConfig;
use crate::error::SynthError;

use super::envelope::{self, PIANO_ADSR};
use super::oscillator::{PIANO_PARTIALS, render_partials};

/// Peak absolute amplitude of every non-silent generated tone.
pub const TARGET_PEAK: f64 = 0.5;

/// What normalization did to a buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Normalization {
    /// Buffer was scaled; holds the peak it had before scaling.
    Scaled { peak: f64 },
    /// Buffer had no energy (or no samples) and was left as is.
    Silent,
}

/// Number of samples a tone of `duration` seconds occupies.
pub fn sample_count(config: &SynthConfig, duration: f64) -> usize {
    (config.rate() * duration).round() as usize
}

/// Generate a piano tone at `frequency` Hz lasting `duration` seconds.
///
/// Deterministic in (frequency, duration, sample rate).
pub fn generate(
    config: &SynthConfig,
    frequency: f64,
    duration: f64,
) -> Result<Vec<f64>, SynthError> {
    if !frequency.is_finite() || frequency <= 0.0 {
        return Err(SynthError::InvalidFrequency { hz: frequency });
    }
    if !duration.is_finite() || duration < 0.0 {
        return Err(SynthError::InvalidDuration { seconds: duration });
    }
    if let Some(max) = config.max_duration.filter(|&max| duration > max) {
        return Err(SynthError::DurationTooLong { seconds: duration, max });
    }

    let count = sample_count(config, duration);
    let mut samples = render_partials(&PIANO_PARTIALS, frequency, duration, count);
    let env = PIANO_ADSR.render(count, config.rate());
    envelope::apply(&mut samples, &env);

    let outcome = normalize(&mut samples, TARGET_PEAK);
    debug!("generated {count} samples at {frequency:.3} Hz for {duration}s ({outcome:?})");
    Ok(samples)
}

/// Scale `samples` so the largest absolute value equals `target`.
///
/// A buffer whose peak is zero is returned untouched instead of being
/// divided by zero.
pub fn normalize(samples: &mut [f64], target: f64) -> Normalization {
    let loudest = peak(samples);
    if loudest == 0.0 {
        warn!(
            "normalizing a silent buffer of {} samples, leaving it unchanged",
            samples.len()
        );
        return Normalization::Silent;
    }
    for s in samples.iter_mut() {
        *s = *s / loudest * target;
    }
    Normalization::Scaled { peak: loudest }
}

/// Largest absolute sample value.
pub fn peak(samples: &[f64]) -> f64 {
    samples.iter().fold(0.0_f64, |max, &s| max.max(s.abs()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SynthConfig {
        SynthConfig::default()
    }

    #[test]
    fn length_matches_duration() {
        let cfg = config();
        for (duration, expected) in [(1.0, 44100), (0.5, 22050), (0.25, 11025), (2.0, 88200)] {
            let tone = generate(&cfg, 440.0, duration).unwrap();
            assert_eq!(tone.len(), expected, "duration {duration}");
        }
    }

    #[test]
    fn length_rounds() {
        let cfg = SynthConfig::with_sample_rate(1000);
        // 1000 * 0.0127 = 12.7 → 13
        assert_eq!(generate(&cfg, 440.0, 0.0127).unwrap().len(), 13);
    }

    #[test]
    fn peak_is_half() {
        let cfg = config();
        for (freq, duration) in [(440.0, 1.0), (130.81, 0.5), (987.77, 0.2), (261.63, 3.0)] {
            let tone = generate(&cfg, freq, duration).unwrap();
            let p = peak(&tone);
            assert!((p - 0.5).abs() < 1e-12, "Peak should be 0.5, got {p}");
        }
    }

    #[test]
    fn envelope_shapes_the_ends() {
        let tone = generate(&config(), 440.0, 1.0).unwrap();
        assert!(tone[0].abs() < 1e-12, "Tone should start silent");
        assert!(tone[tone.len() - 1].abs() < 1e-12, "Tone should end silent");
    }

    #[test]
    fn deterministic() {
        let a = generate(&config(), 329.63, 0.4).unwrap();
        let b = generate(&config(), 329.63, 0.4).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn zero_duration_is_empty() {
        let tone = generate(&config(), 440.0, 0.0).unwrap();
        assert!(tone.is_empty());
    }

    #[test]
    fn silence_is_left_unchanged() {
        let mut buf = vec![0.0; 64];
        assert_eq!(normalize(&mut buf, 0.5), Normalization::Silent);
        assert!(buf.iter().all(|&s| s == 0.0));

        let mut empty: Vec<f64> = Vec::new();
        assert_eq!(normalize(&mut empty, 0.5), Normalization::Silent);
    }

    #[test]
    fn normalize_scales_to_target() {
        let mut buf = vec![0.25, -2.0, 1.0];
        assert_eq!(normalize(&mut buf, 0.5), Normalization::Scaled { peak: 2.0 });
        assert_eq!(buf, vec![0.0625, -0.5, 0.25]);
    }

    #[test]
    fn long_durations_render_by_default() {
        let cfg = SynthConfig::with_sample_rate(8000);
        let tone = generate(&cfg, 440.0, 12.0).unwrap();
        assert_eq!(tone.len(), 96000);
        assert!((peak(&tone) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn max_duration_caps_when_set() {
        let cfg = SynthConfig {
            max_duration: Some(2.0),
            ..SynthConfig::with_sample_rate(8000)
        };
        assert!(generate(&cfg, 440.0, 2.0).is_ok());
        assert!(matches!(
            generate(&cfg, 440.0, 2.5),
            Err(SynthError::DurationTooLong { .. })
        ));
    }

    #[test]
    fn rejects_bad_inputs() {
        let cfg = config();
        assert!(matches!(
            generate(&cfg, 440.0, -1.0),
            Err(SynthError::InvalidDuration { .. })
        ));
        assert!(matches!(
            generate(&cfg, 440.0, f64::NAN),
            Err(SynthError::InvalidDuration { .. })
        ));
        assert!(matches!(
            generate(&cfg, 0.0, 1.0),
            Err(SynthError::InvalidFrequency { .. })
        ));
    }
}

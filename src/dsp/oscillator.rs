//! Additive harmonic-stack oscillator.

use std::f64::consts::PI;

/// One sine component of the tone: a multiple of the fundamental and its
/// relative amplitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Partial {
    pub multiple: f64,
    pub amplitude: f64,
}

/// Fundamental plus three overtones, each at half the previous amplitude.
pub const PIANO_PARTIALS: [Partial; 4] = [
    Partial { multiple: 1.0, amplitude: 1.0 },
    Partial { multiple: 2.0, amplitude: 0.5 },
    Partial { multiple: 3.0, amplitude: 0.25 },
    Partial { multiple: 4.0, amplitude: 0.125 },
];

/// Evenly spaced sample times over `[0, duration)`, `count` points, end
/// excluded.
pub fn time_axis(duration: f64, count: usize) -> impl Iterator<Item = f64> {
    let step = if count == 0 { 0.0 } else { duration / count as f64 };
    (0..count).map(move |i| i as f64 * step)
}

/// Value of the harmonic stack at time `t` (seconds).
pub fn harmonic_sample(partials: &[Partial], frequency: f64, t: f64) -> f64 {
    partials
        .iter()
        .map(|p| p.amplitude * (2.0 * PI * frequency * p.multiple * t).sin())
        .sum()
}

/// Render `count` samples of the harmonic stack spread over `duration`.
pub fn render_partials(
    partials: &[Partial],
    frequency: f64,
    duration: f64,
    count: usize,
) -> Vec<f64> {
    time_axis(duration, count)
        .map(|t| harmonic_sample(partials, frequency, t))
        .collect()
}

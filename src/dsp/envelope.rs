//! Fixed-shape ADSR envelope rendered into a sample buffer.
//!
//! Unlike a gated envelope, the whole curve is known up front: the tone
//! length is fixed, so the release is placed at the end of the buffer.

/// ADSR shape with phase lengths in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adsr {
    /// Attack time in seconds.
    pub attack: f64,
    /// Decay time in seconds.
    pub decay: f64,
    /// Sustain level [0, 1].
    pub sustain: f64,
    /// Release time in seconds.
    pub release: f64,
}

/// The envelope every piano tone uses.
pub const PIANO_ADSR: Adsr = Adsr {
    attack: 0.1,
    decay: 0.2,
    sustain: 0.7,
    release: 0.3,
};

/// Phase lengths in samples for one buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segments {
    pub attack: usize,
    pub decay: usize,
    pub sustain: usize,
    pub release: usize,
}

impl Adsr {
    /// Convert phase times to sample counts for a buffer of `total` samples.
    /// Sustain takes whatever is left and is never negative.
    pub fn segments(&self, total: usize, sample_rate: f64) -> Segments {
        let attack = seconds_to_samples(self.attack, sample_rate);
        let decay = seconds_to_samples(self.decay, sample_rate);
        let release = seconds_to_samples(self.release, sample_rate);
        let sustain = total.saturating_sub(attack + decay + release);
        Segments {
            attack,
            decay,
            sustain,
            release,
        }
    }

    /// Render the envelope for a buffer of `total` samples.
    ///
    /// Phases are written attack, decay, sustain, release; each one
    /// overwrites whatever an earlier phase left in its range. Writes past
    /// either end of the buffer are dropped, and the release always ends on
    /// the last sample.
    pub fn render(&self, total: usize, sample_rate: f64) -> Vec<f64> {
        let seg = self.segments(total, sample_rate);
        let mut env = vec![1.0; total];

        write_ramp(&mut env, 0, 0.0, 1.0, seg.attack);
        write_ramp(&mut env, seg.attack as isize, 1.0, self.sustain, seg.decay);
        let sustain_start = seg.attack + seg.decay;
        for level in env.iter_mut().skip(sustain_start).take(seg.sustain) {
            *level = self.sustain;
        }
        let release_start = total as isize - seg.release as isize;
        write_ramp(&mut env, release_start, self.sustain, 0.0, seg.release);

        env
    }
}

fn seconds_to_samples(seconds: f64, sample_rate: f64) -> usize {
    (seconds * sample_rate).round().max(0.0) as usize
}

/// Linear ramp of `len` points from `from` to `to`, both endpoints
/// included. A single point holds `from`.
fn ramp_value(from: f64, to: f64, len: usize, i: usize) -> f64 {
    if len < 2 {
        return from;
    }
    from + (to - from) * (i as f64 / (len - 1) as f64)
}

fn write_ramp(env: &mut [f64], start: isize, from: f64, to: f64, len: usize) {
    for i in 0..len {
        let idx = start + i as isize;
        if idx < 0 {
            continue;
        }
        match env.get_mut(idx as usize) {
            Some(slot) => *slot = ramp_value(from, to, len, i),
            None => break,
        }
    }
}

/// Multiply `samples` by `envelope` in place.
pub fn apply(samples: &mut [f64], envelope: &[f64]) {
    for (s, gain) in samples.iter_mut().zip(envelope) {
        *s *= gain;
    }
}

//! DSP — tone synthesis and WAV encoding.
//!
//! Everything here is a pure function of its inputs and the read-only
//! [`SynthConfig`](crate::config::SynthConfig); nothing holds per-request
//! state.

pub mod envelope;
pub mod oscillator;
pub mod renderer;
pub mod tone;

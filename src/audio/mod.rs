//! Audio utilities.
//! Tone generation, synthesis and WAV packing.

pub mod synth;
pub mod tone;
pub mod wav;

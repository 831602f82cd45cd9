//! Builds the dual-tone sample buffer for one symbol.

use crate::{
    audio::tone::{corrected, Tone},
    error::{Error, Result},
};

/// Everything the synthesizer needs to turn a frequency pair into samples.
pub struct SynthesisParameters {
    /// Samples per second.
    pub sample_rate: f32,
    /// Length of the generated tone in milliseconds.
    pub duration_ms: u64,
    /// Percent correction applied to both frequencies.
    pub correction: i32,
    /// Output volume in percent, 100 is full scale.
    pub volume: u32,
    /// Bits per sample of the target format.
    pub sample_bits: u16,
}

impl SynthesisParameters {
    pub fn sample_count(&self) -> usize {
        (self.sample_rate * self.duration_ms as f32 / 1000.0).round() as usize
    }

    /// The largest representable amplitude for the target sample width,
    /// e.g. 127 for 8 bit output.
    pub fn peak_amplitude(&self) -> i32 {
        ((1_i64 << (self.sample_bits - 1)) - 1) as i32
    }

    /// Shared scale for the two superposed tones.
    /// Derived from the peak so the sum of both sines never clips.
    fn scale(&self) -> f32 {
        (self.peak_amplitude() - 2) as f32 / 2.0 * self.volume as f32 / 100.0
    }
}

/// Superposes two sines at the corrected frequencies, one amplitude per tick.
/// The correction is applied once per tone, never re-applied across samples.
pub fn synthesize(frequencies: (f32, f32), params: &SynthesisParameters) -> Result<Vec<i32>> {
    for freq in [frequencies.0, frequencies.1] {
        if freq <= 0.0 {
            return Err(Error::InvalidFrequency(freq));
        }
    }

    let scale = params.scale();
    let low = Tone::new(corrected(frequencies.0, params.correction), params.sample_rate);
    let high = Tone::new(corrected(frequencies.1, params.correction), params.sample_rate);

    Ok(low
        .zip(high)
        .take(params.sample_count())
        .map(|(a, b)| (scale * a + scale * b) as i32)
        .collect())
}

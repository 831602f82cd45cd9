use std::f32::consts::PI;

/// An endless sine wave at a fixed frequency, one sample per iteration.
/// The first sample is taken at index zero, so every tone starts at 0.0.
#[derive(Clone, Copy, Debug)]
pub struct Tone {
    i: usize,
    tone: f32,
    sample_rate: f32,
}

impl Tone {
    pub fn new(tone: f32, sample_rate: f32) -> Self {
        Self {
            i: 0,
            tone,
            sample_rate,
        }
    }

    /// The period of this tone in samples.
    pub fn period(&self) -> f32 {
        self.sample_rate / self.tone
    }
}

impl Iterator for Tone {
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        let out = (self.i as f32 * self.tone * 2.0 * PI / self.sample_rate).sin();
        self.i += 1;
        Some(out)
    }
}

/// Applies a percent correction to a frequency.
/// +100 doubles the frequency, 0 leaves it untouched.
pub fn corrected(frequency: f32, correction: i32) -> f32 {
    frequency * (100 + correction) as f32 / 100.0
}

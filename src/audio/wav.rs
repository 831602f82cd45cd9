//! Packs sample buffers into WAV files.

use std::{
    fs,
    io::Cursor,
    path::{Path, PathBuf},
};

use hound::{SampleFormat, WavSpec, WavWriter};

use crate::error::{Error, Result};

/// File extension of the generated containers.
pub const EXTENSION: &str = "wav";

/// The encoding families the original tool let you ask for.
/// Only linear PCM signed can actually be produced; asking for one of the
/// companded families is rejected up front instead of silently ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    PcmSigned,
    PcmUnsigned,
    Alaw,
    Ulaw,
}

impl Encoding {
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "PCM_SIGNED" => Self::PcmSigned,
            "PCM_UNSIGNED" => Self::PcmUnsigned,
            "ALAW" => Self::Alaw,
            "ULAW" => Self::Ulaw,
            _ => return None,
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::PcmSigned => "PCM_SIGNED",
            Self::PcmUnsigned => "PCM_UNSIGNED",
            Self::Alaw => "ALAW",
            Self::Ulaw => "ULAW",
        }
    }
}

/// Shape of the container payload: mono linear PCM at a given rate and width.
#[derive(Clone, Copy, Debug)]
pub struct AudioFormat {
    pub sample_rate: u32,
    pub sample_bits: u16,
    pub channels: u16,
}

impl AudioFormat {
    pub fn new(encoding: Encoding, sample_rate: f32, sample_bits: u16) -> Result<Self> {
        if encoding != Encoding::PcmSigned {
            return Err(Error::InvalidArgument(format!(
                "unsupported encoding `{}`, only PCM_SIGNED can be written",
                encoding.name()
            )));
        }

        if !matches!(sample_bits, 8 | 16 | 24 | 32) {
            return Err(Error::InvalidArgument(format!(
                "unsupported sample size `{sample_bits}`, expected 8, 16, 24 or 32"
            )));
        }

        if !(sample_rate > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "sample rate must be positive, got {sample_rate}"
            )));
        }

        Ok(Self {
            sample_rate: sample_rate.round() as u32,
            sample_bits,
            channels: 1,
        })
    }

    fn spec(&self) -> WavSpec {
        WavSpec {
            channels: self.channels,
            sample_rate: self.sample_rate,
            bits_per_sample: self.sample_bits,
            sample_format: SampleFormat::Int,
        }
    }
}

/// Builds the complete WAV byte stream (header + packed payload) in memory.
/// An empty buffer still produces a structurally valid, header-only file.
pub fn encode(samples: &[i32], format: &AudioFormat) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut writer = WavWriter::new(Cursor::new(&mut buffer), format.spec())?;

    for sample in samples {
        writer.write_sample(*sample)?;
    }

    writer.finalize()?;
    Ok(buffer)
}

/// Persists an encoded byte stream as `<dir>/<symbol>.wav`.
/// The directory is created if missing; the stream goes down in one write.
pub fn write(bytes: &[u8], dir: &Path, symbol: char) -> Result<PathBuf> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::InvalidDestination(dir.to_owned()));
    }

    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{symbol}.{EXTENSION}"));
    fs::write(&path, bytes)?;
    Ok(path)
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use super::*;

    fn pcm(rate: f32, bits: u16) -> AudioFormat {
        AudioFormat::new(Encoding::PcmSigned, rate, bits).unwrap()
    }

    #[test]
    fn test_round_trip_16_bit() {
        let samples = vec![0, 1, -1, 16382, -16382, i16::MAX as i32, i16::MIN as i32];
        let bytes = encode(&samples, &pcm(8000.0, 16)).unwrap();

        let mut reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 8000);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(spec.sample_format, SampleFormat::Int);

        let read = reader
            .samples::<i32>()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(read, samples);
    }

    #[test]
    fn test_round_trip_8_bit() {
        let samples = vec![0, 125, -125, 1, -1];
        let bytes = encode(&samples, &pcm(8000.0, 8)).unwrap();

        let mut reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
        assert_eq!(reader.spec().bits_per_sample, 8);

        let read = reader
            .samples::<i32>()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(read, samples);
    }

    #[test]
    fn test_header_only_container() {
        let bytes = encode(&[], &pcm(44100.0, 16)).unwrap();
        assert_eq!(&bytes[0..4], b"RIFF");

        let reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
        assert_eq!(reader.spec().sample_rate, 44100);
        assert_eq!(reader.len(), 0);
    }

    #[test]
    fn test_unsupported_encodings_rejected() {
        for enc in [Encoding::Alaw, Encoding::Ulaw, Encoding::PcmUnsigned] {
            let res = AudioFormat::new(enc, 8000.0, 16);
            assert!(matches!(res, Err(Error::InvalidArgument(_))));
        }
    }

    #[test]
    fn test_bad_sample_size_rejected() {
        assert!(matches!(
            AudioFormat::new(Encoding::PcmSigned, 8000.0, 12),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_encoding_names() {
        for name in ["ALAW", "PCM_SIGNED", "PCM_UNSIGNED", "ULAW"] {
            assert_eq!(Encoding::from_name(name).unwrap().name(), name);
        }
        assert_eq!(Encoding::from_name("MP3"), None);
    }

    #[test]
    fn test_write_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("tones").join("out");

        let bytes = encode(&[0, 42, -42], &pcm(8000.0, 16)).unwrap();
        let path = write(&bytes, &nested, '5').unwrap();
        assert_eq!(path, nested.join("5.wav"));

        let mut reader = hound::WavReader::open(&path).unwrap();
        let read = reader
            .samples::<i32>()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(read, vec![0, 42, -42]);
    }

    #[test]
    fn test_write_rejects_non_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("occupied");
        std::fs::write(&file, b"x").unwrap();

        let bytes = encode(&[], &pcm(8000.0, 16)).unwrap();
        let res = write(&bytes, &file, '5');
        assert!(matches!(res, Err(Error::InvalidDestination(_))));
        assert!(!file.join("5.wav").exists());
    }
}

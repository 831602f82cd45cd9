use std::{io, path::PathBuf};

use thiserror::Error;

/// Everything that can go wrong between parsing the command line and the
/// finished file hitting the disk.
#[derive(Debug, Error)]
pub enum Error {
    /// A tone frequency of zero (or below) has no period to synthesize.
    #[error("invalid frequency: {0} Hz")]
    InvalidFrequency(f32),
    /// A malformed or unsupported option value.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The output path exists but is not a directory.
    #[error("output path `{}` is not a directory", .0.display())]
    InvalidDestination(PathBuf),
    /// Filesystem failure while creating the output directory or writing the file.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    /// Failure while building the WAV byte stream.
    #[error("wav encoding failed: {0}")]
    Encode(#[from] hound::Error),
}

impl Error {
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidArgument(_) => 1,
            Error::InvalidFrequency(_) => 2,
            Error::InvalidDestination(_) => 3,
            Error::Io(_) | Error::Encode(_) => 4,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

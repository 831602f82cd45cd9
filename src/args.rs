use std::{path::PathBuf, str::FromStr};

use clap::{Arg, ArgMatches, Command};

use crate::{
    audio::{
        synth::SynthesisParameters,
        wav::{AudioFormat, Encoding},
    },
    coding::dtmf,
    error::{Error, Result},
};

/// Fully validated settings for one tone generation run.
pub struct Settings {
    pub symbol: char,
    pub frequencies: (f32, f32),
    pub synthesis: SynthesisParameters,
    pub format: AudioFormat,
    pub out_dir: PathBuf,
}

pub fn parse_args() -> Result<Settings> {
    settings(&command().get_matches())
}

fn command() -> Command {
    Command::new("dtmf-gen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generates a single-symbol DTMF tone and writes it as a WAV file.")
        .args([
            Arg::new("symbol")
                .required(true)
                .help("Keypad symbol to synthesize (0-9, A-D, * or #)"),
            Arg::new("encoding")
                .short('e')
                .long("encoding")
                .default_value("PCM_SIGNED")
                .help("Sample encoding (ALAW, PCM_SIGNED, PCM_UNSIGNED, ULAW)"),
            Arg::new("sample-rate")
                .short('r')
                .long("sample-rate")
                .default_value("8000")
                .help("Sample rate in Hz"),
            Arg::new("sample-size")
                .short('s')
                .long("sample-size")
                .default_value("16")
                .help("Sample size in bits (8, 16, 24 or 32)"),
            Arg::new("correction")
                .short('c')
                .long("correction")
                .default_value("0")
                .allow_negative_numbers(true)
                .help("Frequency correction in percent"),
            Arg::new("length")
                .short('l')
                .long("length")
                .default_value("1000")
                .help("Tone length in milliseconds"),
            Arg::new("path")
                .short('p')
                .long("path")
                .default_value(".")
                .help("Output directory, created if missing"),
            Arg::new("volume")
                .short('v')
                .long("volume")
                .default_value("100")
                .help("Volume in percent (0-100)"),
        ])
}

fn settings(m: &ArgMatches) -> Result<Settings> {
    let raw = m.get_one::<String>("symbol").unwrap();
    let symbol = match raw.to_ascii_uppercase().chars().collect::<Vec<_>>()[..] {
        [symbol] => symbol,
        _ => {
            return Err(Error::InvalidArgument(format!(
                "expected a single keypad symbol, got `{raw}`"
            )))
        }
    };
    let frequencies = dtmf::frequencies(symbol)
        .ok_or_else(|| Error::InvalidArgument(format!("`{raw}` is not a DTMF symbol")))?;

    let raw_encoding = m.get_one::<String>("encoding").unwrap();
    let encoding = Encoding::from_name(raw_encoding)
        .ok_or_else(|| Error::InvalidArgument(format!("unknown encoding `{raw_encoding}`")))?;

    let sample_rate = number::<f32>(m, "sample-rate")?;
    let sample_bits = number::<u16>(m, "sample-size")?;
    let correction = number::<i32>(m, "correction")?;
    let duration_ms = number::<u64>(m, "length")?;
    let volume = number::<u32>(m, "volume")?;

    if volume > 100 {
        return Err(Error::InvalidArgument(format!(
            "volume must be between 0 and 100, got {volume}"
        )));
    }

    // Rejects non-PCM encodings and odd sample sizes before any synthesis.
    let format = AudioFormat::new(encoding, sample_rate, sample_bits)?;

    Ok(Settings {
        symbol,
        frequencies,
        synthesis: SynthesisParameters {
            sample_rate,
            duration_ms,
            correction,
            volume,
            sample_bits,
        },
        format,
        out_dir: PathBuf::from(m.get_one::<String>("path").unwrap()),
    })
}

fn number<T: FromStr>(m: &ArgMatches, name: &str) -> Result<T> {
    let raw = m.get_one::<String>(name).unwrap();
    raw.parse()
        .map_err(|_| Error::InvalidArgument(format!("malformed value `{raw}` for --{name}")))
}

use std::process::ExitCode;

mod args;
mod audio;
mod coding;
mod error;

use audio::{synth, wav};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("[-] Error: {err}");
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn run() -> error::Result<()> {
    let settings = args::parse_args()?;
    let (low, high) = settings.frequencies;
    println!("[*] Synthesizing `{}` ({low} Hz + {high} Hz)", settings.symbol);

    let samples = synth::synthesize(settings.frequencies, &settings.synthesis)?;
    let bytes = wav::encode(&samples, &settings.format)?;
    let path = wav::write(&bytes, &settings.out_dir, settings.symbol)?;

    println!("[*] Wrote {} samples to `{}`", samples.len(), path.display());
    Ok(())
}

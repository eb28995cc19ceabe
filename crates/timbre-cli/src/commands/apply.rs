//! Timbre resynthesis command.

use super::common::{ToneArgs, load_settings, load_timbre, read_signal};
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;
use timbre_io::write_wav;

#[derive(Args)]
pub struct ApplyArgs {
    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Timbre source: profile name, profile TOML file, or WAV recording
    #[arg(short, long)]
    timbre: String,

    /// Pure tone WAV file to voice (otherwise a sine is generated)
    #[arg(short, long, conflicts_with_all = ["freq", "duration_ms", "sample_rate", "amplitude", "phase"])]
    input: Option<PathBuf>,

    #[command(flatten)]
    tone: ToneArgs,
}

pub fn run(args: ApplyArgs) -> anyhow::Result<()> {
    let settings = load_settings(None)?;
    let (label, timbre) = load_timbre(&args.timbre, &settings)?;

    let pure = match &args.input {
        Some(path) => read_signal(path)?,
        None => args.tone.signal()?,
    };

    println!(
        "Applying '{}' ({} harmonics) to {} samples at {} Hz",
        label,
        timbre.len(),
        pure.len(),
        pure.sample_rate()
    );

    let output = settings
        .synthesizer()
        .apply(&pure, &timbre)
        .context("Resynthesis failed")?;

    let peak = output.peak_amplitude();
    if peak > 1.0 {
        println!("  Warning: output peaks at {peak:.2}, samples will be clipped");
    }

    write_wav(&args.output, &output)?;
    println!("Saved to {}", args.output.display());

    Ok(())
}

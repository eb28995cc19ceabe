//! Pure tone generation command.

use super::common::ToneArgs;
use clap::Args;
use std::path::PathBuf;
use timbre_io::write_wav;

#[derive(Args)]
pub struct GenerateArgs {
    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    #[command(flatten)]
    tone: ToneArgs,
}

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    let signal = args.tone.signal()?;

    println!(
        "Generating {:.1} Hz tone: {} samples at {} Hz ({:.3}s)",
        args.tone.freq,
        signal.len(),
        args.tone.sample_rate,
        signal.duration_secs()
    );

    write_wav(&args.output, &signal)?;
    println!("Saved to {}", args.output.display());

    Ok(())
}

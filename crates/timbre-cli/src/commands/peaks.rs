//! Peak listing command.

use super::common::{load_settings, read_signal};
use anyhow::Context;
use clap::Args;
use std::path::PathBuf;
use timbre_analysis::Spectrum;

#[derive(Args)]
pub struct PeaksArgs {
    /// Input WAV file (mono PCM)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Peak detector window in bins (overrides settings)
    #[arg(long)]
    window_size: Option<usize>,

    /// Write the positive-frequency magnitude spectrum as CSV
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,
}

pub fn run(args: PeaksArgs) -> anyhow::Result<()> {
    let settings = load_settings(args.window_size)?;
    let signal = read_signal(&args.input)?;
    let spectrum = Spectrum::of(&signal);

    println!("Detecting peaks in {}...", args.input.display());
    println!(
        "  {} bins, {:.3} Hz per bin, window {} bins",
        spectrum.len(),
        spectrum.bin_width(),
        settings.analysis.window_size
    );

    let detection = settings
        .peak_detector()
        .detect_spectrum(&spectrum)
        .with_context(|| format!("Peak detection failed for {}", args.input.display()))?;

    println!("\n{} peaks, fundamental {:.1} Hz:", detection.len(), detection.fundamental);
    println!("  {:>10}  {:>8}  {:>12}", "Freq (Hz)", "Bin", "Magnitude");
    println!("  {:>10}  {:>8}  {:>12}", "---------", "---", "---------");
    for peak in &detection.peaks {
        println!(
            "  {:>10.1}  {:>8}  {:>12.3}",
            peak.frequency, peak.index, peak.magnitude
        );
    }

    if let Some(path) = args.csv {
        std::fs::write(&path, spectrum.to_csv())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("\nWrote spectrum to {}", path.display());
    }

    Ok(())
}

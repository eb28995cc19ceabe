//! Display WAV file metadata.

use clap::Args;
use timbre_io::{WavFormat, read_wav_info};

/// Display WAV file information.
#[derive(Args)]
pub struct InfoArgs {
    /// Path to the WAV file
    pub file: std::path::PathBuf,
}

/// Run the info command.
pub fn run(args: InfoArgs) -> anyhow::Result<()> {
    let info = read_wav_info(&args.file)?;

    let format_str = match info.format {
        WavFormat::Pcm => "PCM",
        WavFormat::IeeeFloat => "IEEE Float",
    };

    println!("File:        {}", args.file.display());
    println!("Format:      {} {}-bit", format_str, info.bits_per_sample);
    println!("Channels:    {}", info.channels);
    println!("Sample Rate: {} Hz", info.sample_rate);
    println!(
        "Duration:    {:.3}s ({} frames)",
        info.duration_secs, info.num_frames
    );
    if info.num_frames > 0 {
        println!(
            "Resolution:  {:.3} Hz per bin",
            f64::from(info.sample_rate) / info.num_frames as f64
        );
    }
    println!(
        "Analyzable:  {}",
        if info.is_supported() {
            "yes"
        } else {
            "no (needs mono 8, 16 or 32-bit PCM)"
        }
    );

    Ok(())
}

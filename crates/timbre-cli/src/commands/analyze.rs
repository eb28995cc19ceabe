//! Timbre extraction command.

use super::common::{load_settings, print_coefficients, read_signal};
use anyhow::Context;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use timbre_analysis::TimbreAnalysis;
use timbre_config::{TimbreProfile, profile_name_from_path};

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Input WAV file (mono PCM)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Peak detector window in bins (overrides settings)
    #[arg(long)]
    window_size: Option<usize>,

    /// Save the timbre as a profile TOML file
    #[arg(long, value_name = "PATH")]
    save: Option<PathBuf>,

    /// Profile name used with --save (defaults to the input file stem)
    #[arg(long)]
    name: Option<String>,

    /// Print the analysis as JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct PeakReport {
    frequency_hz: f32,
    index: usize,
    magnitude: f32,
}

#[derive(Serialize)]
struct AnalysisReport {
    input: String,
    sample_rate: f32,
    samples: usize,
    fundamental_hz: f32,
    fundamental_index: usize,
    coefficients: Vec<f32>,
    peaks: Vec<PeakReport>,
}

impl AnalysisReport {
    fn new(input: String, sample_rate: f32, samples: usize, analysis: &TimbreAnalysis) -> Self {
        Self {
            input,
            sample_rate,
            samples,
            fundamental_hz: analysis.fundamental_hz,
            fundamental_index: analysis.fundamental_index,
            coefficients: analysis.timbre.coefficients().to_vec(),
            peaks: analysis
                .detection
                .peaks
                .iter()
                .map(|p| PeakReport {
                    frequency_hz: p.frequency,
                    index: p.index,
                    magnitude: p.magnitude,
                })
                .collect(),
        }
    }
}

pub fn run(args: AnalyzeArgs) -> anyhow::Result<()> {
    let settings = load_settings(args.window_size)?;
    let signal = read_signal(&args.input)?;

    let analysis = settings
        .extractor()
        .analyze(&signal)
        .with_context(|| format!("Failed to analyze {}", args.input.display()))?;

    if args.json {
        let report = AnalysisReport::new(
            args.input.display().to_string(),
            signal.sample_rate(),
            signal.len(),
            &analysis,
        );
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Analyzing {}...", args.input.display());
        println!(
            "  {} samples, {} Hz, {:.2}s",
            signal.len(),
            signal.sample_rate(),
            signal.duration_secs()
        );
        println!(
            "  Fundamental: {:.1} Hz (bin {})",
            analysis.fundamental_hz, analysis.fundamental_index
        );
        println!("  Peaks: {}\n", analysis.detection.len());
        print_coefficients(&analysis.timbre, Some(analysis.fundamental_hz));
    }

    if let Some(path) = args.save {
        let name = args
            .name
            .or_else(|| profile_name_from_path(&args.input))
            .unwrap_or_else(|| "Untitled".to_string());
        TimbreProfile::from_analysis(name, &analysis, signal.sample_rate())
            .with_source(args.input.display().to_string())
            .save(&path)?;
        if !args.json {
            println!("\nSaved profile to {}", path.display());
        }
    }

    Ok(())
}

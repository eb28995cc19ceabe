//! Timbre CLI - extract the harmonic signature of a tone and apply it to another.

mod commands;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "timbre")]
#[command(author, version, about = "Timbre extraction and resynthesis", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the timbre of a recorded tone
    Analyze(commands::analyze::AnalyzeArgs),

    /// List the spectral peaks of a recorded tone
    Peaks(commands::peaks::PeaksArgs),

    /// Apply a timbre to a pure tone
    Apply(commands::apply::ApplyArgs),

    /// Generate a pure sine tone
    Generate(commands::generate::GenerateArgs),

    /// List and inspect timbre profiles
    Profiles(commands::profiles::ProfilesArgs),

    /// Display WAV file information
    Info(commands::info::InfoArgs),
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Analyze(args) => commands::analyze::run(args),
        Commands::Peaks(args) => commands::peaks::run(args),
        Commands::Apply(args) => commands::apply::run(args),
        Commands::Generate(args) => commands::generate::run(args),
        Commands::Profiles(args) => commands::profiles::run(args),
        Commands::Info(args) => commands::info::run(args),
    }
}

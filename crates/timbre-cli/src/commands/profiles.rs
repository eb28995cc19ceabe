//! Timbre profile management commands.

use super::common::print_coefficients;
use clap::{Args, Subcommand};
use timbre_config::{
    TimbreProfile, factory_profiles, find_profile, get_factory_profile, list_user_profiles,
    profile_name_from_path, user_profiles_dir,
};

#[derive(Args)]
pub struct ProfilesArgs {
    #[command(subcommand)]
    command: ProfilesCommand,
}

#[derive(Subcommand)]
enum ProfilesCommand {
    /// List available profiles (factory and user)
    List,

    /// Show the coefficients of a profile
    Show {
        /// Profile name or path
        name: String,
    },
}

pub fn run(args: ProfilesArgs) -> anyhow::Result<()> {
    match args.command {
        ProfilesCommand::List => list(),
        ProfilesCommand::Show { name } => show(&name),
    }
}

fn list() -> anyhow::Result<()> {
    println!("Factory profiles:");
    for profile in factory_profiles() {
        println!(
            "  {:<12} {:>3} harmonics  {}",
            profile.name.to_lowercase(),
            profile.len(),
            profile.description.as_deref().unwrap_or("")
        );
    }

    let user = list_user_profiles();
    println!("\nUser profiles ({}):", user_profiles_dir().display());
    if user.is_empty() {
        println!("  (none)");
    }
    for path in user {
        let name = profile_name_from_path(&path).unwrap_or_default();
        match TimbreProfile::load(&path) {
            Ok(profile) => println!("  {:<12} {:>3} harmonics  {}", name, profile.len(), profile.name),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping unreadable profile");
                println!("  {name:<12} (invalid)");
            }
        }
    }

    Ok(())
}

fn show(name: &str) -> anyhow::Result<()> {
    let profile = match get_factory_profile(name) {
        Some(profile) => profile,
        None => {
            let Some(path) = find_profile(name) else {
                anyhow::bail!(
                    "Profile '{}' not found. Use 'timbre profiles list' to see available profiles.",
                    name
                );
            };
            TimbreProfile::load(&path)?
        }
    };

    println!("Profile: {}", profile.name);
    if let Some(description) = &profile.description {
        println!("  {description}");
    }
    if let Some(source) = &profile.source {
        println!("  Source: {source}");
    }
    if let Some(rate) = profile.sample_rate {
        println!("  Sample rate: {rate} Hz");
    }
    println!();
    print_coefficients(&profile.timbre(), profile.fundamental_hz);

    Ok(())
}

use std::path::PathBuf;

use clap::Parser;

/// Suggest a meal for a time of day
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Read configuration from this file instead of ~/.config/meal-suggest/config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the recognized times of day with their suggestions and exit
    #[arg(long)]
    pub labels: bool,
}

use std::path::PathBuf;

use clap::Parser;

/// Terminal storefront client.
#[derive(Debug, Parser)]
#[command(name = "kiosk", version, about)]
pub struct Cli {
    /// Path to the config file (default: platform config dir).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the store API base URL.
    #[arg(long)]
    pub api_url: Option<String>,

    /// Override the asset host used for product images.
    #[arg(long)]
    pub assets_url: Option<String>,

    /// Write logs to this file (default: kiosk.log next to the config file).
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

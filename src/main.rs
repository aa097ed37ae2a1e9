use anyhow::Result;
use clap::Parser;

use kiosk::cli::Cli;
use kiosk::config::Config;
use kiosk::{logging, ui};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(api_url) = cli.api_url {
        config.api.base_url = api_url;
    }
    if let Some(assets_url) = cli.assets_url {
        config.api.assets_url = assets_url;
    }

    let log_file = cli.log_file.unwrap_or_else(|| {
        Config::config_path()
            .parent()
            .map(|dir| dir.join("kiosk.log"))
            .unwrap_or_else(|| "kiosk.log".into())
    });
    logging::init(&log_file)?;

    tracing::info!(api = %config.api.base_url, "starting kiosk");
    ui::runtime::run(config)
}

mod config;
mod shell;

use clap::Parser;
use config::AppConfig;
use std::path::PathBuf;

/// Two-player hotseat chess for one terminal.
#[derive(Parser)]
#[command(name = "hotseat")]
#[command(about = "Two-player hotseat chess with save and resume")]
struct Args {
    /// Path of the save slot; overrides the config file.
    #[arg(long)]
    save_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "falling back to default configuration");
        AppConfig::default()
    });
    let save_file = args.save_file.unwrap_or(config.save_file);
    tracing::info!(path = %save_file.display(), "using save slot");

    let store = chess_store::FileStore::new(save_file);
    let controller = chess_ui::GameController::new(store);
    shell::run(controller)
}

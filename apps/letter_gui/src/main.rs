use std::path::PathBuf;

mod config;
mod controller;
mod ui;

use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::ui::app::VIEW_STORAGE_KEY;
use crate::ui::theme::PersistedViewSettings;
use crate::ui::{LetterAssignerApp, StartupConfig};

#[derive(Parser, Debug)]
#[command(about = "Split the alphabet round-robin across a list of names")]
struct Args {
    /// Settings file (TOML). Defaults to the per-user config directory.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Name to start the list with; repeat for more.
    #[arg(long = "name", value_name = "NAME")]
    names: Vec<String>,
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = config::load_settings(args.config.as_deref())?;
    init_tracing(&settings.log_filter);
    tracing::debug!(?settings, "settings loaded");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Letter Assigner")
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([320.0, 360.0]),
        ..Default::default()
    };
    let startup = StartupConfig {
        settings,
        initial_names: args.names,
    };

    eframe::run_native(
        "Letter Assigner",
        options,
        Box::new(|cc| {
            let persisted = cc.storage.and_then(|storage| {
                storage
                    .get_string(VIEW_STORAGE_KEY)
                    .and_then(|text| serde_json::from_str::<PersistedViewSettings>(&text).ok())
            });
            Ok(Box::new(LetterAssignerApp::new(startup, persisted)))
        }),
    )
    .map_err(|err| anyhow::anyhow!("desktop app exited with an error: {err}"))
}

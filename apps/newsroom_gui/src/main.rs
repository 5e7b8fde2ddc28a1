use std::{path::PathBuf, sync::Arc};

mod backend_bridge;
mod config;
mod controller;
mod ui;

use anyhow::Context;
use clap::Parser;
use content_store::{FileNewsStore, NewsSource, StaticNewsStore};
use crossbeam_channel::bounded;
use eframe::egui;

use backend_bridge::{
    commands::BackendCommand,
    runtime::{launch, ImageFetchConfig},
};
use config::Settings;
use controller::events::UiEvent;
use ui::NewsroomApp;

const COMMAND_QUEUE_CAPACITY: usize = 256;
const EVENT_QUEUE_CAPACITY: usize = 1024;

#[derive(Debug, Parser)]
#[command(name = "newsroom-gui", about = "Ailancy internal news page")]
struct Args {
    /// Settings file; defaults to ./newsroom.toml or the user config dir.
    #[arg(long)]
    config: Option<PathBuf>,
    /// JSON or TOML news fixture replacing the bundled records.
    #[arg(long)]
    news_file: Option<PathBuf>,
    /// Directory serving site-relative images such as /placeholder.jpg.
    #[arg(long)]
    asset_dir: Option<PathBuf>,
    /// Never download remote images.
    #[arg(long)]
    offline: bool,
    /// Disable the drifting background.
    #[arg(long)]
    no_ambient: bool,
    /// tracing filter, e.g. `info,newsroom_gui=debug`.
    #[arg(long)]
    log_filter: Option<String>,
}

impl Args {
    fn apply_to(&self, settings: &mut Settings) {
        if let Some(path) = &self.news_file {
            settings.news_file = Some(path.clone());
        }
        if let Some(dir) = &self.asset_dir {
            settings.asset_dir = dir.clone();
        }
        if self.offline {
            settings.remote_images = false;
        }
        if self.no_ambient {
            settings.ambient_background = false;
        }
    }

    /// `--log-filter`, then `RUST_LOG`, then the configured filter.
    fn log_filter(&self, settings: &Settings) -> String {
        self.log_filter
            .clone()
            .or_else(|| std::env::var("RUST_LOG").ok().filter(|v| !v.trim().is_empty()))
            .unwrap_or_else(|| settings.log_filter.clone())
    }
}

fn load_news_source(settings: &Settings) -> anyhow::Result<Arc<dyn NewsSource>> {
    match &settings.news_file {
        Some(path) => {
            let store = FileNewsStore::load(path)
                .with_context(|| format!("failed to load news file '{}'", path.display()))?;
            Ok(Arc::new(store))
        }
        None => Ok(Arc::new(StaticNewsStore::bundled())),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut settings = config::load_settings(args.config.as_deref())?;
    args.apply_to(&mut settings);

    tracing_subscriber::fmt()
        .with_env_filter(args.log_filter(&settings).as_str())
        .init();

    let source = load_news_source(&settings)?;
    tracing::info!(
        items = source.news().len(),
        news_file = ?settings.news_file,
        "newsroom content loaded"
    );

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(COMMAND_QUEUE_CAPACITY);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(EVENT_QUEUE_CAPACITY);
    launch(cmd_rx, ui_tx, ImageFetchConfig::from_settings(&settings))
        .context("failed to spawn image worker")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.window_title.clone())
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };
    let title = settings.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            Ok(Box::new(NewsroomApp::bootstrap(
                cc, source, cmd_tx, ui_rx, &settings,
            )))
        }),
    )
    .map_err(|err| anyhow::anyhow!("newsroom window failed: {err}"))
}

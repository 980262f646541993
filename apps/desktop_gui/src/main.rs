use anyhow::Context;
use clap::Parser;
use client_core::load_settings;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

mod backend_bridge;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::SentimentApp;

#[derive(Parser, Debug)]
#[command(name = "sentiment-desktop")]
struct Args {
    /// Base URL of the sentiment service; overrides sentiment.toml and env vars.
    #[arg(long)]
    api_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let settings = load_settings().with_api_url(args.api_url);
    let endpoints = settings
        .endpoints()
        .context("cannot build service endpoints from settings")?;

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, endpoints);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Análisis de sentimiento")
            .with_inner_size([640.0, 520.0])
            .with_min_inner_size([420.0, 380.0]),
        ..Default::default()
    };
    let api_base_url = settings.api_base_url;
    eframe::run_native(
        "Sentiment Desktop",
        options,
        Box::new(move |_cc| Ok(Box::new(SentimentApp::new(cmd_tx, ui_rx, api_base_url)))),
    )
    .map_err(|err| anyhow::anyhow!("desktop ui failed: {err}"))
}

use std::path::PathBuf;

mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;
use detail_core::load_settings;
use eframe::egui;
use shared::domain::ResourceId;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

#[derive(Parser, Debug)]
struct Args {
    /// Directory snapshot to load instead of the configured one.
    #[arg(long)]
    data: Option<PathBuf>,
    /// Open this resource's detail view on startup.
    #[arg(long)]
    resource_id: Option<i64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(data) = args.data {
        settings.data_path = data;
    }
    tracing::info!(data_path = %settings.data_path.display(), "starting detail viewer");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    let _worker = backend_bridge::runtime::launch(settings.data_path.clone(), cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Campsite Info")
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    let initial_resource = args.resource_id.map(ResourceId);
    eframe::run_native(
        "Campsite Info",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(ui::DetailApp::new(
                cmd_tx,
                ui_rx,
                settings,
                initial_resource,
            )))
        }),
    )
    .map_err(|err| anyhow::anyhow!("desktop viewer failed: {err}"))
}

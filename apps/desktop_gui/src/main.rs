mod backend_bridge;
mod config;
mod controller;
mod media;
mod ui;

use anyhow::anyhow;
use clap::Parser;
use client_core::{config::load_settings, EventsClient};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use backend_bridge::commands::BackendCommand;
use config::{StartupArgs, StartupConfig};
use controller::events::UiEvent;
use ui::EventDeskApp;

fn main() -> anyhow::Result<()> {
    let startup = StartupConfig::resolve(StartupArgs::parse(), load_settings()?)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&startup.log_filter)),
        )
        .init();
    tracing::info!(
        server_url = %startup.server_url,
        route = startup.start_route.path(),
        "starting event desk"
    );

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(
        EventsClient::new(startup.server_url.clone()),
        cmd_rx,
        ui_tx,
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Event Desk")
            .with_inner_size([900.0, 960.0])
            .with_min_inner_size([640.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Event Desk",
        options,
        Box::new(move |_cc| Ok(Box::new(EventDeskApp::new(cmd_tx, ui_rx, &startup)))),
    )
    .map_err(|err| anyhow!("event desk window failed: {err}"))
}

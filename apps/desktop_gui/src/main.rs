//! Desktop chat client for the task ordering assistant.

mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::backend_bridge::runtime;
use crate::controller::events::UiEvent;
use crate::ui::TaskChatApp;

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";
const SERVER_URL_ENV: &str = "TASK_ASSISTANT_SERVER_URL";

#[derive(Debug, Parser)]
#[command(
    name = "task-assistant-gui",
    about = "Chat client for the task ordering assistant"
)]
struct Args {
    /// Base URL of the task processing endpoint.
    #[arg(long)]
    server_url: Option<String>,
}

fn resolve_server_url(cli_override: Option<String>) -> String {
    if let Some(url) = cli_override {
        return url;
    }
    if let Ok(url) = std::env::var(SERVER_URL_ENV) {
        if !url.trim().is_empty() {
            return url;
        }
    }
    DEFAULT_SERVER_URL.to_string()
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();
    let server_url = resolve_server_url(args.server_url);
    tracing::info!(%server_url, "starting task assistant gui");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    runtime::launch(server_url, cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Task Ordering Assistant")
            .with_inner_size([720.0, 640.0])
            .with_min_inner_size([480.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Task Ordering Assistant",
        options,
        Box::new(|_cc| Ok(Box::new(TaskChatApp::new(cmd_tx, ui_rx)))),
    )
}

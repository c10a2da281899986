//! mdpad - minimal markdown editor
//!
//! A two-pane editor: markdown input on the left, live preview on the right.

mod app;
mod core;
mod ui;

use app::MdpadApp;
use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::core::config::AppConfig;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    tracing::info!("Starting mdpad...");

    let config = AppConfig::load_or_default();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title(config.window.title.clone()),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        "mdpad",
        native_options,
        Box::new(move |cc| Ok(Box::new(MdpadApp::new(cc, config)))),
    )
}

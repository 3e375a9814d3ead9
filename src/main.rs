//! Table Processor desktop entry point.

use anyhow::anyhow;
use eframe::egui;
use std::path::PathBuf;
use table_processor::config::AppConfig;
use table_processor::gui::TableApp;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::discover()
        .unwrap_or_else(|e| {
            log::warn!("{e}; using default settings");
            AppConfig::default()
        })
        .with_source_override(std::env::args_os().nth(1).map(PathBuf::from));

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([600.0, 500.0])
            .with_title(&config.title),
        ..Default::default()
    };

    let title = config.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(|cc| Ok(Box::new(TableApp::new(cc, config)))),
    )
    .map_err(|e| anyhow!("failed to start window: {e}"))
}

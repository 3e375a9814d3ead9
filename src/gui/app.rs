//! Table Processor Main Application
//! Single window with raw data, calculator, processed data and details.

use crate::calc::derive_all;
use crate::config::AppConfig;
use crate::data::{
    export_source, load, open_source, suggested_file_name, DataSession, LoadError, LoadState,
    LoadedSource,
};
use crate::gui::{
    show_details, show_processed_table, show_raw_table, CalculatorPanel, RawTableAction,
};
use egui::{Color32, RichText};
use std::sync::mpsc::{channel, Receiver};
use std::thread;

/// CSV loading result from background thread
enum LoadResult {
    Complete(LoadedSource),
    Error(LoadError),
}

/// Main application window.
pub struct TableApp {
    config: AppConfig,
    session: DataSession,
    calculator: CalculatorPanel,

    // Async CSV loading
    load_rx: Option<Receiver<LoadResult>>,

    /// Outcome of the last download/open action.
    notice: Option<String>,
}

impl TableApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let mut app = Self {
            config,
            session: DataSession::new(),
            calculator: CalculatorPanel::new(),
            load_rx: None,
            notice: None,
        };
        app.start_load();
        app
    }

    /// Load the configured CSV in a background thread.
    fn start_load(&mut self) {
        if self.load_rx.is_some() {
            return; // Already loading
        }

        self.session.begin_load();
        let (tx, rx) = channel();
        self.load_rx = Some(rx);

        let path = self.config.source_path.clone();
        log::info!("Loading {}", path.display());

        thread::spawn(move || {
            let result = match load(&path) {
                Ok(source) => LoadResult::Complete(source),
                Err(e) => LoadResult::Error(e),
            };
            let _ = tx.send(result);
        });
    }

    /// Check for CSV loading results
    fn check_load_results(&mut self) {
        let Some(rx) = self.load_rx.take() else {
            return;
        };

        match rx.try_recv() {
            Ok(LoadResult::Complete(source)) => self.session.finish_load(Ok(source)),
            Ok(LoadResult::Error(e)) => self.session.finish_load(Err(e)),
            Err(std::sync::mpsc::TryRecvError::Empty) => self.load_rx = Some(rx),
            Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                log::error!("CSV loader thread exited without a result");
                self.session.finish_load(Err(LoadError::Read {
                    path: self.config.source_path.clone(),
                    source: std::io::Error::other("loader thread exited"),
                }));
            }
        }
    }

    /// Save a verbatim copy of the source file.
    fn handle_download(&mut self) {
        let Some(source) = self.session.source() else {
            return;
        };

        let dest = match rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .set_file_name(suggested_file_name(source))
            .save_file()
        {
            Some(path) => path,
            None => return, // User cancelled
        };

        self.notice = Some(match export_source(source, &dest) {
            Ok(bytes) => format!("Saved {} bytes to {}", bytes, dest.display()),
            Err(e) => {
                log::error!("{e}");
                format!("Error: {e}")
            }
        });
    }

    fn handle_open(&mut self) {
        let Some(source) = self.session.source() else {
            return;
        };
        if let Err(e) = open_source(source) {
            log::error!("{e}");
            self.notice = Some(format!("Error: {e}"));
        }
    }
}

impl eframe::App for TableApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_load_results();

        // Request repaint while loading
        if self.session.is_loading() {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.label(RichText::new(&self.config.title).size(24.0).strong());
                ui.label(RichText::new("CSV Data Processor and Analyzer").color(Color32::GRAY));
                ui.add_space(8.0);
            });
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let status = self.session.status_line();
                let color = if status.starts_with("Error") {
                    Color32::from_rgb(220, 53, 69)
                } else {
                    Color32::GRAY
                };
                ui.label(RichText::new(status).size(11.0).color(color));
                if let Some(notice) = &self.notice {
                    ui.separator();
                    ui.label(RichText::new(notice).size(11.0));
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.session.state() == LoadState::Loading {
                ui.centered_and_justified(|ui| {
                    ui.spinner();
                });
                return;
            }

            let mut action = RawTableAction::None;
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_max_width(900.0);

                let store = self.session.store();
                action = show_raw_table(ui, store, self.session.source().is_some());
                ui.add_space(16.0);

                self.calculator.show(ui, store);
                ui.add_space(16.0);

                let rows = derive_all(store);
                show_processed_table(ui, &rows);
                ui.add_space(16.0);
                show_details(ui, &rows);
            });

            match action {
                RawTableAction::DownloadCsv => self.handle_download(),
                RawTableAction::OpenCsv => self.handle_open(),
                RawTableAction::None => {}
            }
        });
    }
}

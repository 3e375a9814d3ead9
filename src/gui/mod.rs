//! GUI module - User interface components

mod app;
mod calculator_panel;
mod card;
mod raw_table;
mod results_view;

pub use app::TableApp;
pub use calculator_panel::CalculatorPanel;
pub use raw_table::{show_raw_table, RawTableAction};
pub use results_view::{show_details, show_processed_table};

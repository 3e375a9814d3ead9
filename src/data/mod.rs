//! Data module - CSV loading, session lifecycle and export

mod export;
mod loader;
mod session;

pub use export::{export_source, open_source, suggested_file_name, ExportError};
pub use loader::{
    load, parse_records, LoadError, LoadedSource, ParseReport, RecordStore, RowOutcome,
    SkipReason,
};
pub use session::{DataSession, LoadState};

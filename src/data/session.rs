//! Data Session Module
//! Owns the current record store snapshot and the load lifecycle.

use super::loader::{LoadError, LoadedSource, RecordStore};
use std::path::Path;

fn row_count(n: usize) -> String {
    if n == 1 {
        "1 row".to_string()
    } else {
        format!("{n} rows")
    }
}

/// Lifecycle of the data for one application session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    /// Load finished with nothing to show, either no rows or a failed read.
    ReadyEmpty,
}

/// Holds the record store snapshot shown by the interface.
pub struct DataSession {
    state: LoadState,
    store: RecordStore,
    source: Option<LoadedSource>,
    last_error: Option<String>,
}

impl Default for DataSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DataSession {
    pub fn new() -> Self {
        Self {
            state: LoadState::Loading,
            store: RecordStore::new(),
            source: None,
            last_error: None,
        }
    }

    /// Mark a load as in flight.
    pub fn begin_load(&mut self) {
        self.state = LoadState::Loading;
        self.last_error = None;
    }

    /// Install the outcome of a load. The previous snapshot is replaced
    /// wholesale; a failed read leaves an empty store.
    pub fn finish_load(&mut self, result: Result<LoadedSource, LoadError>) {
        match result {
            Ok(source) => {
                self.store = source.report.store.clone();
                self.state = if self.store.is_empty() {
                    LoadState::ReadyEmpty
                } else {
                    LoadState::Ready
                };
                self.source = Some(source);
                self.last_error = None;
            }
            Err(e) => {
                log::error!("Error fetching or parsing CSV: {e}");
                self.store = RecordStore::new();
                self.source = None;
                self.state = LoadState::ReadyEmpty;
                self.last_error = Some(e.to_string());
            }
        }
    }

    /// Load synchronously on the calling thread.
    pub fn load_blocking(&mut self, path: impl AsRef<Path>) {
        self.begin_load();
        self.finish_load(super::loader::load(path));
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn source(&self) -> Option<&LoadedSource> {
        self.source.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// One-line summary for the status bar.
    pub fn status_line(&self) -> String {
        match (self.state, &self.source, &self.last_error) {
            (LoadState::Loading, _, _) => "Loading CSV file...".to_string(),
            (_, _, Some(error)) => format!("Error: {error}"),
            (_, Some(source), None) => {
                let skipped = source.report.skipped_count();
                if skipped == 0 {
                    format!("Loaded {}", row_count(self.store.len()))
                } else {
                    format!("Loaded {}, {} skipped", row_count(self.store.len()), skipped)
                }
            }
            (_, None, None) => "No data loaded".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_records;
    use std::path::PathBuf;

    fn source(text: &str) -> LoadedSource {
        LoadedSource {
            path: PathBuf::from("Table Input.csv"),
            text: text.to_string(),
            report: parse_records(text),
        }
    }

    #[test]
    fn starts_loading() {
        let session = DataSession::new();
        assert_eq!(session.state(), LoadState::Loading);
        assert!(session.store().is_empty());
    }

    #[test]
    fn successful_load_is_ready() {
        let mut session = DataSession::new();
        session.finish_load(Ok(source("k,v\nA1,1\nA2,x\n")));
        assert_eq!(session.state(), LoadState::Ready);
        assert_eq!(session.store().len(), 1);
        assert_eq!(session.status_line(), "Loaded 1 row, 1 skipped");
    }

    #[test]
    fn status_line_pluralises_rows() {
        let mut session = DataSession::new();
        session.finish_load(Ok(source("k,v\nA1,1\n")));
        assert_eq!(session.status_line(), "Loaded 1 row");
        session.finish_load(Ok(source("k,v\nA1,1\nA2,2\n")));
        assert_eq!(session.status_line(), "Loaded 2 rows");
    }

    #[test]
    fn header_only_load_is_ready_empty() {
        let mut session = DataSession::new();
        session.finish_load(Ok(source("k,v\n")));
        assert_eq!(session.state(), LoadState::ReadyEmpty);
        assert!(session.last_error().is_none());
    }

    #[test]
    fn failed_load_clears_previous_snapshot() {
        let mut session = DataSession::new();
        session.finish_load(Ok(source("k,v\nA1,1\n")));

        session.begin_load();
        assert!(session.is_loading());
        session.finish_load(Err(LoadError::Read {
            path: PathBuf::from("gone.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        }));

        assert_eq!(session.state(), LoadState::ReadyEmpty);
        assert!(session.store().is_empty());
        assert!(session.source().is_none());
        assert!(session.status_line().starts_with("Error:"));
    }
}

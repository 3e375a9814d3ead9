//! CSV Export Module
//! Hands out the loaded file exactly as it was read.

use super::loader::LoadedSource;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write the source text verbatim to `dest`. Returns the byte count.
pub fn export_source(source: &LoadedSource, dest: impl AsRef<Path>) -> Result<u64, ExportError> {
    let dest = dest.as_ref();
    fs::write(dest, source.text.as_bytes()).map_err(|e| ExportError::Write {
        path: dest.to_path_buf(),
        source: e,
    })?;
    log::info!("Exported {} bytes to {}", source.text.len(), dest.display());
    Ok(source.text.len() as u64)
}

/// Open the source file with the system default application.
pub fn open_source(source: &LoadedSource) -> Result<(), ExportError> {
    open::that(&source.path).map_err(|e| ExportError::Open {
        path: source.path.clone(),
        source: e,
    })
}

/// File name suggested by the save dialog.
pub fn suggested_file_name(source: &LoadedSource) -> String {
    source
        .path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "Table Input.csv".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_records;

    #[test]
    fn suggested_name_uses_source_file_name() {
        let text = "k,v\n";
        let source = LoadedSource {
            path: PathBuf::from("/data/Table Input.csv"),
            text: text.to_string(),
            report: parse_records(text),
        };
        assert_eq!(suggested_file_name(&source), "Table Input.csv");
    }

    #[test]
    fn write_failure_names_destination() {
        let text = "k,v\nA1,1\n";
        let source = LoadedSource {
            path: PathBuf::from("in.csv"),
            text: text.to_string(),
            report: parse_records(text),
        };
        let err = export_source(&source, "/no/such/dir/out.csv").unwrap_err();
        assert!(err.to_string().contains("out.csv"));
    }
}

//! CSV Data Loader Module
//! Reads a two-column `key,value` CSV file into a keyed record store.

use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a data row was left out of the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    /// The line has no comma separating key and value.
    MissingSeparator,
    /// The key field is empty after trimming.
    EmptyKey,
    /// The value field does not start with a base-10 integer.
    InvalidValue(String),
}

/// Result of parsing a single data row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RowOutcome {
    Kept {
        line: usize,
        key: String,
        value: i64,
    },
    Skipped {
        line: usize,
        reason: SkipReason,
    },
}

impl RowOutcome {
    pub fn is_kept(&self) -> bool {
        matches!(self, RowOutcome::Kept { .. })
    }
}

/// Mapping from row key to integer value, in file order.
///
/// Keys are unique. A repeated key takes the later value but keeps the
/// position of its first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordStore {
    entries: Vec<(String, i64)>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a value. Returns the previous value, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: i64) -> Option<i64> {
        let key = key.into();
        if let Some(&pos) = self.index.get(&key) {
            let previous = self.entries[pos].1;
            self.entries[pos].1 = value;
            return Some(previous);
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
        None
    }

    /// Raw stored value for a key.
    pub fn get(&self, key: &str) -> Option<i64> {
        self.index.get(key).map(|&pos| self.entries[pos].1)
    }

    /// Value usable as a calculation operand.
    ///
    /// A stored zero counts as missing, same as an absent key.
    pub fn operand(&self, key: &str) -> Option<i64> {
        self.get(key).filter(|&v| v != 0)
    }

    /// All `(key, value)` pairs in file order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, i64)> for RecordStore {
    fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
        let mut store = RecordStore::new();
        for (key, value) in iter {
            store.insert(key, value);
        }
        store
    }
}

/// Parsed store plus the per-row outcomes that produced it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ParseReport {
    pub store: RecordStore,
    pub rows: Vec<RowOutcome>,
}

impl ParseReport {
    pub fn kept_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_kept()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.rows.len() - self.kept_count()
    }

    pub fn skipped(&self) -> impl Iterator<Item = (usize, &SkipReason)> {
        self.rows.iter().filter_map(|r| match r {
            RowOutcome::Skipped { line, reason } => Some((*line, reason)),
            RowOutcome::Kept { .. } => None,
        })
    }
}

/// A successfully read CSV file.
#[derive(Debug, Clone)]
pub struct LoadedSource {
    pub path: PathBuf,
    /// File contents exactly as read, used for export.
    pub text: String,
    pub report: ParseReport,
}

/// Longest leading `[+-]digits` prefix of `field`, so `"10.5"` reads as 10
/// and `"12abc"` as 12. `None` when there are no leading digits or the
/// prefix does not fit in an `i64`.
fn leading_integer(field: &str) -> Option<i64> {
    let bytes = field.as_bytes();
    let sign_len = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = bytes[sign_len..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }
    field[..sign_len + digits].parse().ok()
}

/// Parse a single data line into key and value. Only the second
/// comma-separated field is the value; anything after it is ignored.
fn parse_row(line: &str) -> Result<(String, i64), SkipReason> {
    let (key, rest) = line.split_once(',').ok_or(SkipReason::MissingSeparator)?;
    let key = key.trim();
    if key.is_empty() {
        return Err(SkipReason::EmptyKey);
    }
    let value = rest.split_once(',').map_or(rest, |(value, _)| value).trim();
    let parsed =
        leading_integer(value).ok_or_else(|| SkipReason::InvalidValue(value.to_string()))?;
    Ok((key.to_string(), parsed))
}

/// Parse CSV text: blank lines are ignored, the first remaining line is
/// the header, and every following line is a `key,value` row.
pub fn parse_records(text: &str) -> ParseReport {
    let mut report = ParseReport::default();

    let data_lines = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .skip(1);

    for (idx, line) in data_lines {
        let line_no = idx + 1;
        match parse_row(line) {
            Ok((key, value)) => {
                if let Some(previous) = report.store.insert(key.clone(), value) {
                    log::debug!("line {line_no}: key {key} overrides earlier value {previous}");
                }
                report.rows.push(RowOutcome::Kept {
                    line: line_no,
                    key,
                    value,
                });
            }
            Err(reason) => {
                log::debug!("line {line_no}: skipped ({reason:?})");
                report.rows.push(RowOutcome::Skipped {
                    line: line_no,
                    reason,
                });
            }
        }
    }

    report
}

/// Read and parse a CSV file.
pub fn load(path: impl AsRef<Path>) -> Result<LoadedSource, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let report = parse_records(&text);
    log::info!(
        "Loaded {}: {} rows kept, {} skipped",
        path.display(),
        report.kept_count(),
        report.skipped_count()
    );

    Ok(LoadedSource {
        path: path.to_path_buf(),
        text,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_and_blank_lines_are_ignored() {
        let report = parse_records("\n\nIndex #,Value\n\nA1,3\n  \nA2, 4 \n");
        let entries: Vec<_> = report.store.entries().collect();
        assert_eq!(entries, vec![("A1", 3), ("A2", 4)]);
        assert_eq!(report.skipped_count(), 0);
    }

    #[test]
    fn malformed_rows_are_reported_not_stored() {
        let text = "key,value\nA1,1\nA2\n,5\nA3,abc\nA4,-\nA5,\nA6,,4\nA7,-2\n";
        let report = parse_records(text);

        let entries: Vec<_> = report.store.entries().collect();
        assert_eq!(entries, vec![("A1", 1), ("A7", -2)]);
        assert_eq!(report.kept_count(), 2);

        let skipped: Vec<_> = report.skipped().map(|(l, r)| (l, r.clone())).collect();
        assert_eq!(
            skipped,
            vec![
                (3, SkipReason::MissingSeparator),
                (4, SkipReason::EmptyKey),
                (5, SkipReason::InvalidValue("abc".into())),
                (6, SkipReason::InvalidValue("-".into())),
                (7, SkipReason::InvalidValue("".into())),
                (8, SkipReason::InvalidValue("".into())),
            ]
        );
    }

    #[test]
    fn value_reads_leading_integer_of_second_field() {
        let report = parse_records("Index #,Value\nA4,10.5\nA5,7,extra\nA6,12abc\nA8, +3 \n");
        let entries: Vec<_> = report.store.entries().collect();
        assert_eq!(entries, vec![("A4", 10), ("A5", 7), ("A6", 12), ("A8", 3)]);
        assert_eq!(report.skipped_count(), 0);
    }

    #[test]
    fn value_too_large_for_i64_is_skipped() {
        let report = parse_records("k,v\nA1,99999999999999999999\n");
        assert!(report.store.is_empty());
        assert_eq!(report.skipped_count(), 1);
    }

    #[test]
    fn crlf_line_endings() {
        let report = parse_records("key,value\r\nA5,10\r\nA20,5\r\n");
        assert_eq!(report.store.get("A5"), Some(10));
        assert_eq!(report.store.get("A20"), Some(5));
    }

    #[test]
    fn duplicate_key_keeps_first_position_and_last_value() {
        let report = parse_records("k,v\nA1,1\nA2,2\nA1,9\n");
        let entries: Vec<_> = report.store.entries().collect();
        assert_eq!(entries, vec![("A1", 9), ("A2", 2)]);
        assert_eq!(report.kept_count(), 3);
    }

    #[test]
    fn zero_is_stored_but_not_an_operand() {
        let report = parse_records("k,v\nA7,0\n");
        assert_eq!(report.store.get("A7"), Some(0));
        assert_eq!(report.store.operand("A7"), None);
    }

    #[test]
    fn header_only_gives_empty_store() {
        let report = parse_records("Index #,Value\n");
        assert!(report.store.is_empty());
        assert!(report.rows.is_empty());
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let err = load("/definitely/not/here/Table Input.csv").unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
        assert!(err.to_string().contains("Table Input.csv"));
    }
}

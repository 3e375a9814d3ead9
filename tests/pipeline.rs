use std::fs;
use std::io::Write;
use table_processor::calc::{derive_all, Computed, CustomQuery, Derivation};
use table_processor::data::{export_source, load, DataSession, LoadState, SkipReason};
use tempfile::{tempdir, NamedTempFile};

const SAMPLE: &str = "Index #,Value\nA5,10\nA20,5\nA15,9\nA7,3\nA13,4\nA12,6\n";

fn write_csv(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn sample_file_derivations() {
    let file = write_csv(SAMPLE);
    let source = load(file.path()).unwrap();
    let store = &source.report.store;

    assert_eq!(store.len(), 6);
    assert_eq!(Derivation::Alpha.compute(store), Computed::Integer(15));
    assert_eq!(Derivation::Beta.compute(store).as_f64(), Some(3.0));
    assert_eq!(Derivation::Beta.compute(store).to_string(), "3");
    assert_eq!(Derivation::Charlie.compute(store), Computed::Integer(24));
    assert_eq!(
        CustomQuery::new("A5", "A12", "*").compute(store),
        Computed::Integer(60)
    );
}

#[test]
fn missing_key_makes_dependents_unavailable() {
    let text = SAMPLE.replace("A7,3\n", "");
    let file = write_csv(&text);
    let source = load(file.path()).unwrap();
    let store = &source.report.store;

    assert_eq!(Derivation::Beta.compute(store), Computed::Unavailable);
    assert_eq!(Derivation::Alpha.compute(store), Computed::Integer(15));
    for op in ["+", "-", "*", "/"] {
        assert_eq!(CustomQuery::new("A7", "A5", op).compute(store), Computed::Unavailable);
        assert_eq!(CustomQuery::new("A5", "A7", op).compute(store), Computed::Unavailable);
    }
}

#[test]
fn zero_divisor_in_file_is_unavailable() {
    let file = write_csv("k,v\nA15,9\nA7,0\n");
    let source = load(file.path()).unwrap();
    let store = &source.report.store;

    assert_eq!(store.get("A7"), Some(0));
    assert_eq!(Derivation::Beta.compute(store), Computed::Unavailable);
    assert_eq!(CustomQuery::new("A15", "A7", "/").compute(store), Computed::Unavailable);
}

#[test]
fn skipped_rows_are_counted() {
    let file = write_csv("k,v\nA1,1\nbroken\nA2,two\n\nA3,3\n");
    let source = load(file.path()).unwrap();

    assert_eq!(source.report.kept_count(), 2);
    assert_eq!(source.report.skipped_count(), 2);
    let reasons: Vec<_> = source.report.skipped().map(|(_, r)| r.clone()).collect();
    assert_eq!(
        reasons,
        vec![
            SkipReason::MissingSeparator,
            SkipReason::InvalidValue("two".into())
        ]
    );
}

#[test]
fn export_is_verbatim_and_reparses_identically() {
    let text = "Index #,Value\r\n\r\nA5, 10\r\nbad row\r\nA20,5";
    let file = write_csv(text);
    let source = load(file.path()).unwrap();

    let dir = tempdir().unwrap();
    let dest = dir.path().join("copy.csv");
    let written = export_source(&source, &dest).unwrap();

    assert_eq!(written, text.len() as u64);
    assert_eq!(fs::read(&dest).unwrap(), text.as_bytes());

    let reloaded = load(&dest).unwrap();
    assert_eq!(reloaded.report.store, source.report.store);
}

#[test]
fn unreadable_source_reaches_ready_empty() {
    let dir = tempdir().unwrap();
    let mut session = DataSession::new();
    session.load_blocking(dir.path().join("Table Input.csv"));

    assert_eq!(session.state(), LoadState::ReadyEmpty);
    assert!(session.store().is_empty());
    assert!(session.last_error().is_some());
    assert!(derive_all(session.store())
        .iter()
        .all(|row| row.value == Computed::Unavailable));
}

#[test]
fn loaded_session_is_ready() {
    let file = write_csv(SAMPLE);
    let mut session = DataSession::new();
    session.load_blocking(file.path());

    assert_eq!(session.state(), LoadState::Ready);
    let keys: Vec<_> = session.store().keys().collect();
    assert_eq!(keys, vec!["A5", "A20", "A15", "A7", "A13", "A12"]);
    assert_eq!(session.status_line(), "Loaded 6 rows");
}

#[test]
fn derived_rows_serialize_for_reporting() {
    let file = write_csv(SAMPLE);
    let source = load(file.path()).unwrap();
    let rows = derive_all(&source.report.store);

    let json = serde_json::to_value(&rows).unwrap();
    assert_eq!(json[0]["derivation"], "Alpha");
    assert_eq!(json[0]["formula"], "A5 + A20");
    assert_eq!(json[0]["value"], 15);
    assert_eq!(json[2]["value"], 24);
}

use chemscore::errors::CoreError;
use chemscore::records::{load_all, load_records};
use chemscore::report::summarize;
use chemscore::{Score, Smiles};
use std::fs;
use std::path::PathBuf;

fn write_records(dir: &tempfile::TempDir, name: &str, records: &[Smiles]) -> PathBuf {
    let path = dir.path().join(name);
    let doc: Vec<serde_json::Value> = records.iter().map(|r| serde_json::to_value(r.to_mapping()).unwrap()).collect();
    fs::write(&path, serde_json::to_string_pretty(&doc).unwrap()).unwrap();
    path
}

#[test]
fn test_load_all_concatenates_files_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_records(&dir,
                          "a.json",
                          &[Smiles::new("CCO", Score::new(1.0, 2.0, 3.0, 4.0), Some(1)),
                            Smiles::new("CC", Score::new(2.0, 2.0, 2.0, 2.0), None)]);
    let empty = write_records(&dir, "empty.json", &[]);
    let b = write_records(&dir, "b.json", &[Smiles::new("C", Score::new(3.0, 0.0, 1.0, -2.0), Some(5))]);

    let records = load_all(&[a, empty, b]).unwrap();
    let names: Vec<&str> = records.iter().map(|r| r.smiles()).collect();
    assert_eq!(names, vec!["CCO", "CC", "C"]);
    assert_eq!(records[2].transforms(), Some(5));

    let summary = summarize(&records);
    assert_eq!(summary[0].count, 3);
    assert_eq!(summary[0].mean, Some(2.0));
}

#[test]
fn test_load_records_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_records(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, CoreError::Io(_)));
}

#[test]
fn test_load_records_invalid_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "[{").unwrap();
    assert!(matches!(load_records(&path), Err(CoreError::Records { .. })));
}

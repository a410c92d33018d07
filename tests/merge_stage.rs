// tests/merge_stage.rs
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use presence_dash::config::options::MergeOptions;
use presence_dash::error::Error;
use presence_dash::merge::merge_inputs;
use presence_dash::progress::CountingProgress;
use presence_dash::runner::run_merge;
use presence_dash::store::load_dataset;

fn write(dir: &Path, name: &str, body: &str) -> PathBuf {
    let p = dir.join(name);
    fs::write(&p, body).unwrap();
    p
}

fn opts(inputs: Vec<PathBuf>, output: PathBuf) -> MergeOptions {
    MergeOptions {
        inputs,
        output,
        ..MergeOptions::default()
    }
}

#[test]
fn keeps_only_dates_present_in_every_input() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a.csv", "Date,alpha.com,beta.com\n2024-01,10,20\n2024-02,11,21\n2024-03,12,22\n");
    let b = write(dir.path(), "b.csv", "Date,Visits\n2024-02,5\n2024-03,6\n2024-04,7\n");

    let ds = merge_inputs(&opts(vec![a, b], dir.path().join("out.csv")), None).unwrap();

    assert_eq!(
        ds.headers.as_deref().unwrap(),
        ["Date", "alpha.com", "beta.com", "ausmedsupply.com.au"]
    );
    let dates: Vec<&str> = ds.rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(dates, ["2024-02", "2024-03"]);
    assert_eq!(ds.rows[0], ["2024-02", "11", "21", "5"]);
}

#[test]
fn values_are_carried_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a.csv", "Date,alpha.com\n2024-01,\"1,234\"\n");
    let b = write(dir.path(), "b.csv", "Date,beta.com\n2024-01,nan\n");

    let ds = merge_inputs(&opts(vec![a, b], dir.path().join("out.csv")), None).unwrap();
    assert_eq!(ds.rows, vec![vec!["2024-01", "1,234", "nan"]]);
}

#[test]
fn missing_input_is_fatal_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a.csv", "Date,alpha.com\n2024-01,1\n");
    let out = dir.path().join("out.csv");

    let err = run_merge(&opts(vec![a, dir.path().join("nope.csv")], out.clone()), None).unwrap_err();
    assert!(matches!(err, Error::MissingInput(_)));
    assert!(!out.exists());
}

#[test]
fn missing_join_key_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a.csv", "Date,alpha.com\n2024-01,1\n");
    let b = write(dir.path(), "b.csv", "Month,beta.com\n2024-01,2\n");

    let err = merge_inputs(&opts(vec![a, b.clone()], dir.path().join("out.csv")), None).unwrap_err();
    match err {
        Error::MissingJoinKey { path, key } => {
            assert_eq!(path, b);
            assert_eq!(key, "Date");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn duplicate_date_in_one_input_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a.csv", "Date,alpha.com\n2024-01,1\n2024-01,2\n");

    let err = merge_inputs(&opts(vec![a], dir.path().join("out.csv")), None).unwrap_err();
    assert!(matches!(err, Error::DuplicateKey { .. }));
}

#[test]
fn rename_collision_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a.csv", "Date,alpha.com\n2024-01,1\n");
    let b = write(dir.path(), "b.csv", "Date,Visits\n2024-01,2\n");

    let mut o = opts(vec![a, b], dir.path().join("out.csv"));
    o.rename = BTreeMap::from([("Visits".to_string(), "alpha.com".to_string())]);
    let err = merge_inputs(&o, None).unwrap_err();
    assert!(matches!(err, Error::DuplicateColumn(c) if c == "alpha.com"));
}

#[test]
fn no_inputs_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = merge_inputs(&opts(Vec::new(), dir.path().join("out.csv")), None).unwrap_err();
    assert!(matches!(err, Error::NoInputs));
}

#[test]
fn run_merge_writes_the_table_and_reports_progress() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(dir.path(), "a.csv", "Date,alpha.com\n2024-01,1\n2024-02,2\n");
    let b = write(dir.path(), "b.csv", "Date,beta.com\n2024-01,3\n2024-02,4\n");
    let out = dir.path().join("processed").join("traffic.csv");

    let mut progress = CountingProgress::default();
    let summary = run_merge(&opts(vec![a, b], out.clone()), Some(&mut progress)).unwrap();

    assert_eq!(summary.path, out);
    assert_eq!((summary.rows, summary.columns), (2, 3));
    assert_eq!((progress.total, progress.done), (2, 2));
    assert!(progress.finished);

    let back = load_dataset(&out).unwrap();
    assert_eq!(back.headers.as_deref().unwrap(), ["Date", "alpha.com", "beta.com"]);
    assert_eq!(back.rows[1], ["2024-02", "2", "4"]);
}

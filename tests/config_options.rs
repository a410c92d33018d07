// tests/config_options.rs
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use presence_dash::config::options::PipelineConfig;
use presence_dash::error::Error;

#[test]
fn defaults_match_the_pipeline_layout() {
    let cfg = PipelineConfig::default();
    assert_eq!(cfg.merge.join_key, "Date");
    assert_eq!(cfg.merge.inputs.len(), 4);
    assert_eq!(cfg.merge.rename.get("Visits").map(String::as_str), Some("ausmedsupply.com.au"));
    assert_eq!(cfg.geocode.skip_rows, 2);
    assert_eq!((cfg.geocode.split_limit, cfg.geocode.address_field), (3, 1));
    assert_eq!(cfg.geocode.delay(), Duration::from_millis(100));
    assert_eq!(cfg.dashboard.compare_default, 3);
    assert!(cfg.validate().is_ok());
}

#[test]
fn partial_file_keeps_other_defaults() {
    let cfg = PipelineConfig::from_toml(
        r#"
        [merge]
        inputs = ["a.csv", "b.csv"]

        [merge.rename]
        Visits = "example.com"

        [geocode]
        delay_ms = 0
        "#,
    )
    .unwrap();

    assert_eq!(cfg.merge.inputs, [PathBuf::from("a.csv"), PathBuf::from("b.csv")]);
    assert_eq!(cfg.merge.rename.get("Visits").map(String::as_str), Some("example.com"));
    assert_eq!(cfg.geocode.delay(), Duration::ZERO);
    assert_eq!(cfg.geocode.skip_rows, 2);
    assert_eq!(cfg.dashboard, PipelineConfig::default().dashboard);
}

#[test]
fn unknown_keys_are_rejected() {
    let err = PipelineConfig::from_toml("[geocode]\nretries = 3\n").unwrap_err();
    assert!(matches!(err, Error::Toml(_)));
}

#[test]
fn invalid_split_settings_are_rejected() {
    let err = PipelineConfig::from_toml("[geocode]\nsplit_limit = 3\naddress_field = 4\n").unwrap_err();
    assert!(matches!(err, Error::Config(_)));

    let err = PipelineConfig::from_toml("[geocode]\nsplit_limit = 0\naddress_field = 0\n").unwrap_err();
    assert!(matches!(err, Error::Config(_)));

    let err = PipelineConfig::from_toml("[geocode]\nsplit_limit = 4\n").unwrap_err();
    assert!(matches!(err, Error::Config(ref m) if m.contains("split_limit")));

    let err = PipelineConfig::from_toml("[geocode]\nsplit_limit = 2\naddress_field = 1\n").unwrap_err();
    assert!(matches!(err, Error::Config(_)));

    let err = PipelineConfig::from_toml("[merge]\njoin_key = \"  \"\n").unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn explicit_path_wins_and_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    let p = dir.path().join("presence.toml");
    fs::write(&p, "[dashboard]\ntitle = \"Test board\"\n").unwrap();

    let cfg = PipelineConfig::load(Some(&p)).unwrap();
    assert_eq!(cfg.dashboard.title, "Test board");

    let missing = dir.path().join("nope.toml");
    assert!(matches!(PipelineConfig::load(Some(&missing)), Err(Error::MissingInput(_))));
}

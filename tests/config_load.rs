// ==============================================
// CONFIG FILE LOADING (integration)
// ==============================================
//
// Exercises Config::load against fixture files under tests/data.

use std::error::Error;
use std::path::PathBuf;

use leafkit::config::Config;
use leafkit::error::ConfigError;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn load_sample() -> Config {
    Config::load(fixture("read.conf")).expect("tests/data/read.conf should load")
}

#[test]
fn load_reads_exactly_four_options() {
    let conf = load_sample();
    assert_eq!(conf.len(), 4);

    let mut keys = conf.keys();
    keys.sort();
    assert_eq!(keys, vec!["age", "height", "man", "name"]);

    assert_eq!(conf.get_string("name", ""), "tom");
    assert_eq!(conf.get_int("age", -1), 25);
    assert!(conf.get_bool("man", false));
    assert_eq!(conf.get_float("height", -1.0), 1.7);
}

#[test]
fn load_then_merge_keeps_file_values() {
    let mut conf = load_sample();
    let mut overrides = Config::new();
    overrides.set_option("name", "li");
    overrides.set_option("city", "Tokyo");

    conf.merge(&overrides);
    assert_eq!(conf.len(), 5);
    assert_eq!(conf.get_string("name", ""), "tom");
    assert_eq!(conf.get_string("city", ""), "Tokyo");
}

#[test]
fn load_malformed_file_names_line() {
    let err = Config::load(fixture("broken.conf")).unwrap_err();
    match err {
        ConfigError::Parse { line_number, line } => {
            assert_eq!(line_number, 2);
            assert_eq!(line, "this line has no separator");
        },
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn load_missing_file_wraps_io_error() {
    let path = fixture("does-not-exist.conf");
    let err = Config::load(&path).unwrap_err();
    match &err {
        ConfigError::Io { path: reported, source } => {
            assert_eq!(reported, &path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        },
        other => panic!("expected io error, got {other:?}"),
    }
    assert!(err.source().is_some());
}

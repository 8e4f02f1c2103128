use std::{io::Write, path::PathBuf, time::Duration};

use benchgate::{
    GateError,
    duration::{format_duration, parse_duration},
    load_config, parse_config,
};

#[test]
fn test_load_fixture_config() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/wrand.yml");
    let table = load_config(&path).expect("config");
    assert_eq!(table.len(), 2);
    assert_eq!(table["BenchmarkRand-12"], Duration::from_nanos(30));
    assert_eq!(table["BenchmarkRandBig-12"], Duration::from_nanos(112));
}

#[test]
fn test_capitalized_field_names() {
    let doc = "\
Version: v1
Thresholds:
  - Name: BenchmarkA
    Threshold: 1.5us
";
    let table = parse_config(doc.as_bytes()).expect("config");
    assert_eq!(table["BenchmarkA"], Duration::from_nanos(1_500));
}

#[test]
fn test_rejects_unknown_version() {
    let doc = "version: v2\nthresholds: []\n";
    match parse_config(doc.as_bytes()) {
        Err(GateError::ConfigVersion(found)) => assert_eq!(found, "v2"),
        other => panic!("expected version error, got {other:?}"),
    }
    let missing = "thresholds: []\n";
    assert!(matches!(
        parse_config(missing.as_bytes()),
        Err(GateError::ConfigVersion(_))
    ));
}

#[test]
fn test_rejects_malformed_documents() {
    assert!(parse_config("".as_bytes()).is_err());
    for doc in ["version: [v1", "version: v1\nthresholds:\n  - name: A\n    threshold: soon\n"] {
        assert!(
            matches!(parse_config(doc.as_bytes()), Err(GateError::ConfigDecode(_))),
            "{doc:?}"
        );
    }
}

#[test]
fn test_rejects_negative_threshold() {
    let doc = "version: v1\nthresholds:\n  - name: A\n    threshold: -5\n";
    assert!(matches!(
        parse_config(doc.as_bytes()),
        Err(GateError::ConfigDecode(_))
    ));
}

#[test]
fn test_duplicate_names_keep_last() {
    let doc = "\
version: v1
thresholds:
  - name: A
    threshold: 10ns
  - name: A
    threshold: 20ns
";
    let table = parse_config(doc.as_bytes()).expect("config");
    assert_eq!(table["A"], Duration::from_nanos(20));
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.yml");
    assert!(matches!(
        load_config(&path),
        Err(GateError::ConfigRead { .. })
    ));
}

#[test]
fn test_load_config_from_temp_file() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    writeln!(file, "version: v1\nthresholds:\n  - name: B\n    threshold: 2ms").unwrap();
    let table = load_config(file.path()).expect("config");
    assert_eq!(table["B"], Duration::from_millis(2));
}

#[test]
fn test_parse_duration_units() {
    let cases = [
        ("0", 0),
        ("30", 30),
        ("30ns", 30),
        ("1.5us", 1_500),
        ("1.5µs", 1_500),
        ("2ms", 2_000_000),
        ("0.25s", 250_000_000),
        ("1m30s", 90_000_000_000),
        ("1h", 3_600_000_000_000),
        ("+7ns", 7),
    ];
    for (text, nanos) in cases {
        assert_eq!(
            parse_duration(text).expect(text),
            Duration::from_nanos(nanos),
            "{text}"
        );
    }
}

#[test]
fn test_parse_duration_errors() {
    for text in ["", "-5ns", "ns", "5xs", "1..5ms", "12 parsecs"] {
        assert!(
            matches!(parse_duration(text), Err(GateError::InvalidDuration(_))),
            "{text:?}"
        );
    }
}

#[test]
fn test_format_duration() {
    let cases = [
        (0, "0s"),
        (30, "30ns"),
        (112, "112ns"),
        (1_500, "1.5µs"),
        (2_000_000, "2ms"),
        (1_250_000_000, "1.25s"),
        (90_000_000_000, "1m30s"),
        (3_600_000_000_000, "1h0m0s"),
    ];
    for (nanos, text) in cases {
        assert_eq!(format_duration(Duration::from_nanos(nanos)), text);
    }
}

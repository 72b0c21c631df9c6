use super::*;
use lept_json::{ParseErrorKind, Tag};
use std::path::PathBuf;

fn report(input: &str, outcome: Result<Value, CheckError>) -> Report {
    Report {
        input: Input::Path(PathBuf::from(input)),
        outcome,
    }
}

#[test]
fn check_source_accepts_scalars() {
    assert!(matches!(check_source(" true "), Ok(Value::True)));
    assert!(matches!(check_source("-1.5"), Ok(v) if v.tag() == Tag::Number));
}

#[test]
fn check_source_wraps_parse_errors() {
    match check_source("nul") {
        Err(CheckError::Parse(err)) => {
            assert_eq!(err.kind, ParseErrorKind::InvalidValue);
            assert_eq!(err.offset, 3);
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn missing_file_is_io_error() {
    let r = check_input(&Input::Path(PathBuf::from("/nonexistent/lept-check/input.json")));
    assert!(!r.is_ok());
    assert!(matches!(r.outcome, Err(CheckError::Io { .. })));
}

#[test]
fn render_default() {
    let config = CheckConfig::default();
    assert_eq!(
        report("a.json", Ok(Value::Null)).render(&config).as_deref(),
        Some("a.json: ok")
    );
    assert_eq!(
        report("b.json", check_source("1 2")).render(&config).as_deref(),
        Some("b.json: error: root value is followed by extra content at byte 2")
    );
}

#[test]
fn render_verbose_includes_value() {
    let config = CheckConfig {
        verbose: true,
        ..CheckConfig::default()
    };
    assert_eq!(
        report("n.json", Ok(Value::Number(2.5))).render(&config).as_deref(),
        Some("n.json: ok number 2.5")
    );
    assert_eq!(
        report("t.json", Ok(Value::True)).render(&config).as_deref(),
        Some("t.json: ok true")
    );
}

#[test]
fn render_quiet_hides_successes_only() {
    let config = CheckConfig {
        quiet: true,
        ..CheckConfig::default()
    };
    assert_eq!(report("a.json", Ok(Value::False)).render(&config), None);
    assert!(report("b.json", check_source("")).render(&config).is_some());
}

#[test]
fn summary_counts() {
    let summary = Summary {
        reports: vec![
            report("a", Ok(Value::Null)),
            report("b", check_source("x")),
            report("c", Ok(Value::True)),
        ],
        duration: Duration::ZERO,
    };
    assert_eq!(summary.passed(), 2);
    assert_eq!(summary.failed(), 1);
    assert!(summary.has_failures());
    assert!(!Summary::default().has_failures());
}

//! Shell-level tests: drive `run` with in-memory stdin/stdout.

use flaggate_cli::{load_profile, run, Cli};
use flaggate_core::GateError;
use flaggate_stages::GateProfile;
use std::ffi::OsString;
use std::io::{Cursor, Write};

fn cli(candidate: Option<&str>, json: bool) -> Cli {
    Cli {
        candidate: candidate.map(OsString::from),
        profile: None,
        json,
    }
}

fn run_to_string(cli: &Cli, stdin: &str) -> (Result<bool, String>, String) {
    run_bytes(cli, stdin.as_bytes())
}

fn run_bytes(cli: &Cli, stdin: &[u8]) -> (Result<bool, String>, String) {
    let mut input = Cursor::new(stdin.to_vec());
    let mut out = Vec::new();
    let result = run(cli, &GateProfile::reagent(), &mut input, &mut out)
        .map(|v| v.is_accepted())
        .map_err(|e| e.to_string());
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_accepted_flag_from_argument() {
    let (result, out) = run_to_string(&cli(Some("reagent{m4th_plus_h4sh}"), false), "");

    assert_eq!(result, Ok(true));
    assert_eq!(
        out,
        "=== flaggate: multi-stage validator ===\n\
         Running validation...\n  \
         Stage 1 (length check): PASSED\n  \
         Stage 2 (format check): PASSED\n  \
         Stage 3 (hash check): PASSED\n  \
         Stage 4 (arithmetic check): PASSED\n\
         \n\
         All stages passed! Flag accepted.\n"
    );
}

#[test]
fn test_rejected_flag_from_stdin_shows_prompt() {
    let (result, out) = run_to_string(&cli(None, false), "reagent{m4th_plus_h4shX\n");

    assert_eq!(result, Ok(false));
    assert!(out.contains("Enter the flag: "));
    assert!(out.contains("  Stage 2 (format check): FAILED\n"));
    assert!(!out.contains("Stage 3"));
    assert!(out.ends_with("\nValidation failed.\n"));
}

#[test]
fn test_altered_inner_from_stdin_stops_at_hash() {
    let (result, out) = run_to_string(&cli(None, false), "reagent{m4th_plus_h4sX}\n");

    assert_eq!(result, Ok(false));
    assert!(out.contains("  Stage 2 (format check): PASSED\n"));
    assert!(out.contains("  Stage 3 (hash check): FAILED\n"));
    assert!(!out.contains("Stage 4"));
}

#[test]
fn test_non_utf8_stdin_is_validated_not_fatal() {
    let (result, out) = run_bytes(&cli(None, false), &[0xff, 0xfe, b'a', b'\n']);

    assert_eq!(result, Ok(false));
    assert!(out.contains("  Stage 1 (length check): FAILED\n"));
    assert!(out.ends_with("\nValidation failed.\n"));
}

#[cfg(unix)]
#[test]
fn test_non_utf8_argument_is_validated_not_fatal() {
    use std::os::unix::ffi::OsStringExt;

    let mut raw = b"reagent{m4th_plus_h4s".to_vec();
    raw.extend_from_slice(&[0xff, b'}']);
    let cli = Cli {
        candidate: Some(OsString::from_vec(raw)),
        profile: None,
        json: false,
    };
    let (result, out) = run_to_string(&cli, "");

    assert_eq!(result, Ok(false));
    assert!(out.contains("  Stage 3 (hash check): FAILED\n"));
}

#[test]
fn test_stdin_crlf_is_stripped() {
    let (result, _) = run_to_string(&cli(None, false), "reagent{m4th_plus_h4sh}\r\n");
    assert_eq!(result, Ok(true));
}

#[test]
fn test_missing_stdin_is_an_error() {
    let (result, _) = run_to_string(&cli(None, false), "");
    let err = result.unwrap_err();
    assert!(err.starts_with("INPUT/"), "{}", err);
}

#[test]
fn test_json_report() {
    let (result, out) = run_to_string(&cli(Some("short"), true), "");

    assert_eq!(result, Ok(false));
    let report: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(report["profile"], "reagent@1.0");
    assert_eq!(report["pipeline_id"], "length→format→hash→arithmetic");
    assert_eq!(report["candidate_len"], 5);
    assert_eq!(report["verdict"]["decision"], "REJECT");
    assert_eq!(report["verdict"]["results"].as_array().unwrap().len(), 1);
    assert!(!out.contains("=== flaggate"));
}

#[test]
fn test_invalid_profile_is_rejected_before_reading_input() {
    let mut profile = GateProfile::reagent();
    profile.prefix.clear();

    let mut input = Cursor::new(String::new());
    let mut out = Vec::new();
    let err = run(&cli(Some("x"), false), &profile, &mut input, &mut out).unwrap_err();

    assert!(matches!(err, GateError::ProfileError(_)));
    assert!(out.is_empty());
}

#[test]
fn test_profile_file_drives_the_gate() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let yaml = GateProfile {
        name: "lab@1.0".to_string(),
        target_len: 6,
        prefix: "ab{".to_string(),
        suffix: "}".to_string(),
        min_len: 5,
        expected_digest: flaggate_stages::fnv1a32(b"zz"),
        expected_checksum: b'z'.wrapping_add(b'z'),
    }
    .to_yaml()
    .unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    let profile = load_profile(Some(file.path())).unwrap();
    let mut input = Cursor::new(String::new());
    let mut out = Vec::new();
    let verdict = run(&cli(Some("ab{zz}"), false), &profile, &mut input, &mut out).unwrap();

    assert!(verdict.is_accepted());
}

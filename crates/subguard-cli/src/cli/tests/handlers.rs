//! Handler tests against files on disk: rejection must surface as `Err`,
//! which `main` turns into exit status 1.

use crate::cli::commands::{run_plan, run_submit, run_upload};
use std::io::Write;
use std::path::{Path, PathBuf};
use subguard_core::config::GuardConfig;

fn write_file(dir: &Path, name: &str, bytes: usize) -> PathBuf {
    let path = dir.join(name);
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(&vec![b'x'; bytes]).unwrap();
    f.flush().unwrap();
    path
}

#[test]
fn upload_accepted_file_is_ok() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "ep1.srt", 1_000);
    assert!(run_upload(&GuardConfig::default(), &path).is_ok());
}

#[test]
fn upload_wrong_type_is_err() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "notes.txt", 10);
    let err = run_upload(&GuardConfig::default(), &path).unwrap_err();
    assert!(err.to_string().contains("rejected"));
}

#[test]
fn upload_too_large_is_err() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "big.vtt", 250_000);
    assert!(run_upload(&GuardConfig::default(), &path).is_err());
}

#[test]
fn upload_missing_path_is_err() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.srt");
    assert!(run_upload(&GuardConfig::default(), &path).is_err());
}

#[test]
fn submit_ok_and_blocked() {
    let cfg = GuardConfig::default();
    assert!(run_submit(&cfg, "movie.srt".into(), "5".into(), ".srt".into()).is_ok());

    let err = run_submit(&cfg, String::new(), "5".into(), ".srt".into()).unwrap_err();
    assert!(err.to_string().contains("blocked"));
    assert!(run_submit(&cfg, "movie.srt".into(), "5".into(), ".vtt".into()).is_err());
}

#[test]
fn plan_accepts_and_refuses() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "ep1.srt", 500);
    let cfg = GuardConfig::default();

    let ok = run_plan(
        &cfg,
        &path,
        "2".into(),
        "-1".into(),
        ".srt".into(),
        ".vtt".into(),
        true,
    );
    assert!(ok.is_ok());

    let mismatch = run_plan(
        &cfg,
        &path,
        "2".into(),
        "1".into(),
        ".vtt".into(),
        ".srt".into(),
        false,
    );
    assert!(mismatch.is_err());
}

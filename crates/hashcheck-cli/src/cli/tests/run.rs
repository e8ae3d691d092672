//! Tests for running commands end to end with a given config file.

use crate::cli::{
    CliCommand, EXIT_FAILURE, EXIT_MISMATCH, EXIT_OK, EXIT_PENDING, EXIT_READ_FAILED,
};
use std::io::Write;
use std::path::PathBuf;

const ABC_SHA256: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

fn abc_pdf(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("a.pdf");
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(b"abc").unwrap();
    path
}

fn broken_config(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "output_format = \"json\"\n").unwrap();
    path
}

#[test]
fn exit_codes_are_all_distinct() {
    let mut codes = vec![
        EXIT_OK,
        EXIT_MISMATCH,
        EXIT_PENDING,
        EXIT_READ_FAILED,
        EXIT_FAILURE,
    ];
    codes.sort_unstable();
    codes.dedup();
    assert_eq!(codes.len(), 5);
}

#[tokio::test]
async fn compare_with_broken_config_still_matches() {
    let dir = tempfile::tempdir().unwrap();
    let file = abc_pdf(&dir);
    let cfg = broken_config(&dir);
    let cmd = CliCommand::Compare {
        path: file,
        hash: Some(ABC_SHA256.to_string()),
    };
    let code = cmd.run(Some(cfg.as_path())).await.unwrap();
    assert_eq!(code, EXIT_OK);
    assert_ne!(code, EXIT_MISMATCH);
}

#[tokio::test]
async fn compare_with_broken_config_reports_real_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    let file = abc_pdf(&dir);
    let cfg = broken_config(&dir);
    let cmd = CliCommand::Compare {
        path: file,
        hash: Some("deadbeef".to_string()),
    };
    assert_eq!(cmd.run(Some(cfg.as_path())).await.unwrap(), EXIT_MISMATCH);
}

#[tokio::test]
async fn generate_with_broken_config_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let file = abc_pdf(&dir);
    let cfg = broken_config(&dir);
    let code = CliCommand::Generate { path: file }
        .run(Some(cfg.as_path()))
        .await
        .unwrap();
    assert_eq!(code, EXIT_OK);
}

#[tokio::test]
async fn generate_without_config_path_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let file = abc_pdf(&dir);
    let code = CliCommand::Generate { path: file }.run(None).await.unwrap();
    assert_eq!(code, EXIT_OK);
}

//! `hashcheck compare` – check a file against an expected digest.

use anyhow::Result;
use hashcheck_core::config::HashcheckConfig;
use hashcheck_core::digest::DigestHex;
use hashcheck_core::session::{Session, StatusMessage, Tab};
use hashcheck_core::task::shared_session;
use std::path::Path;

use super::select::select_file;
use crate::cli::{EXIT_MISMATCH, EXIT_OK, EXIT_PENDING, EXIT_READ_FAILED};

/// Exit code for the status shown after a compare request.
pub fn exit_code(status: &StatusMessage) -> i32 {
    match status {
        StatusMessage::HashesMatch => EXIT_OK,
        StatusMessage::HashesDoNotMatch => EXIT_MISMATCH,
        StatusMessage::ReadFailed(_) => EXIT_READ_FAILED,
        StatusMessage::Prompt | StatusMessage::None => EXIT_PENDING,
    }
}

/// Whether `hash` has the shape of a rendered digest. Comparison stays exact
/// either way; this only feeds a warning.
pub fn is_canonical(hash: &str) -> bool {
    DigestHex::parse(hash).is_some()
}

pub async fn run_compare(cfg: &HashcheckConfig, path: &Path, hash: Option<&str>) -> Result<i32> {
    let mut session = Session::new();
    session.set_tab(Tab::Compare);
    if let Some(hash) = hash {
        if !hash.is_empty() && !is_canonical(hash) {
            // Compared verbatim all the same.
            tracing::warn!("expected hash is not 64 lowercase hex characters: {:?}", hash);
        }
        session.set_input_hash(hash);
    }
    let shared = shared_session(session);

    select_file(&shared, cfg, path).await;

    let mut session = shared.lock().await;
    let outcome = session.request_compare();
    let status = session.status();
    tracing::info!(path = %path.display(), ?outcome, "compare finished");
    if outcome.needs_input() {
        tracing::info!("compare needs both a readable file and an expected hash");
    }

    match &status {
        StatusMessage::ReadFailed(_) => eprintln!("hashcheck error: {}", status),
        _ => println!("{}", status),
    }
    Ok(exit_code(&status))
}

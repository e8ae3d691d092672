//! `hashcheck generate` – print the SHA-256 digest of a file.

use anyhow::{bail, Result};
use hashcheck_core::config::{HashcheckConfig, OutputFormat};
use hashcheck_core::digest::DigestHex;
use hashcheck_core::session::{Session, StatusMessage, Tab};
use hashcheck_core::task::shared_session;
use std::path::Path;

use super::select::select_file;
use crate::cli::{EXIT_OK, EXIT_READ_FAILED};

pub fn format_digest(format: OutputFormat, digest: &DigestHex, path: &Path) -> String {
    match format {
        OutputFormat::Plain => digest.to_string(),
        OutputFormat::Coreutils => format!("{}  {}", digest, path.display()),
    }
}

pub async fn run_generate(cfg: &HashcheckConfig, path: &Path) -> Result<i32> {
    let mut session = Session::new();
    session.set_tab(Tab::Generate);
    let shared = shared_session(session);

    select_file(&shared, cfg, path).await;

    let session = shared.lock().await;
    if let Some(digest) = session.file_digest() {
        println!("{}", format_digest(cfg.output_format, digest, path));
        return Ok(EXIT_OK);
    }
    match session.status() {
        status @ StatusMessage::ReadFailed(_) => {
            eprintln!("hashcheck error: {}", status);
            Ok(EXIT_READ_FAILED)
        }
        _ => bail!("no digest produced for {}", path.display()),
    }
}

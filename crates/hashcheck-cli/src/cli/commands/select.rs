//! Shared file-selection step for `generate` and `compare`.

use hashcheck_core::config::HashcheckConfig;
use hashcheck_core::session::Commit;
use hashcheck_core::task::{digest_path, SharedSession};
use std::path::Path;

/// Select `path` in the session and digest it. Unexpected extensions are
/// logged, never rejected.
pub(super) async fn select_file(
    shared: &SharedSession,
    cfg: &HashcheckConfig,
    path: &Path,
) -> Commit {
    if !cfg.extension_expected(path) {
        tracing::warn!(
            "{} does not have an expected extension ({}); digesting anyway",
            path.display(),
            cfg.expected_extensions.join(", ")
        );
    }
    let tab = shared.lock().await.tab();
    tracing::debug!(?tab, path = %path.display(), "selecting file");
    digest_path(shared, path).await
}

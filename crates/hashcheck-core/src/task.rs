//! Async digest task: load a selection, hash it off the runtime, commit if current.

use crate::digest::{compute_digest, read_input_async, ByteInput, DigestHex};
use crate::error::HashError;
use crate::session::{Commit, Session};
use std::future::Future;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Session shared between the front end and in-flight digest tasks.
pub type SharedSession = Arc<Mutex<Session>>;

pub fn shared_session(session: Session) -> SharedSession {
    Arc::new(Mutex::new(session))
}

/// Hash on a blocking thread so large inputs do not stall the runtime.
pub async fn hash_off_thread(input: ByteInput) -> Result<DigestHex, HashError> {
    tokio::task::spawn_blocking(move || compute_digest(input.as_bytes()))
        .await
        .map_err(|e| HashError::Join(e.to_string()))
}

/// Begin a selection named `label`, await `load`, hash the bytes and commit
/// the result. The session lock is not held while loading or hashing.
///
/// Returns [`Commit::Stale`] if another selection was made in the meantime;
/// the late result is then dropped.
pub async fn digest_selection<F>(shared: &SharedSession, label: String, load: F) -> Commit
where
    F: Future<Output = Result<ByteInput, HashError>>,
{
    let selection = shared.lock().await.begin_selection(label);

    let result = match load.await {
        Ok(input) => {
            tracing::debug!(
                generation = selection.generation,
                len = input.len(),
                empty = input.is_empty(),
                "input loaded"
            );
            hash_off_thread(input).await
        }
        Err(e) => Err(e),
    };

    shared.lock().await.commit(&selection, result)
}

/// [`digest_selection`] reading the whole file at `path`.
pub async fn digest_path(shared: &SharedSession, path: &Path) -> Commit {
    let label = path.display().to_string();
    digest_selection(shared, label, read_input_async(path)).await
}

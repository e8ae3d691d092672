//! Integration test: a slow digest of an earlier selection must not overwrite
//! the digest of a newer one.
//!
//! File A's load is held behind a oneshot gate; file B is selected and fully
//! digested while A is still pending, then A is released.

use hashcheck_core::digest::{compute_digest, ByteInput};
use hashcheck_core::error::HashError;
use hashcheck_core::session::{Commit, Session, StatusMessage, Tab};
use hashcheck_core::task::{digest_selection, shared_session};
use std::io;
use std::time::Duration;
use tokio::sync::oneshot;

async fn gated(rx: oneshot::Receiver<()>, bytes: &'static [u8]) -> Result<ByteInput, HashError> {
    rx.await.map_err(|_| {
        HashError::input_unavailable("gate", io::Error::new(io::ErrorKind::Other, "gate dropped"))
    })?;
    Ok(ByteInput::from(bytes))
}

async fn wait_for_selection(shared: &hashcheck_core::task::SharedSession, label: &str) {
    for _ in 0..100 {
        if shared.lock().await.selection().map(|s| s.label.as_str()) == Some(label) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("selection {label} never started");
}

#[tokio::test]
async fn late_result_for_superseded_file_is_discarded() {
    let shared = shared_session(Session::new());
    let (release_a, gate_a) = oneshot::channel();

    let task_a = {
        let shared = shared.clone();
        tokio::spawn(async move {
            digest_selection(&shared, "a.pdf".into(), gated(gate_a, b"file A")).await
        })
    };
    wait_for_selection(&shared, "a.pdf").await;

    let commit_b = digest_selection(&shared, "b.pdf".into(), async {
        Ok::<_, HashError>(ByteInput::from(&b"file B"[..]))
    })
    .await;
    assert_eq!(commit_b, Commit::Applied);

    release_a.send(()).unwrap();
    let commit_a = task_a.await.unwrap();
    assert_eq!(commit_a, Commit::Stale);

    let s = shared.lock().await;
    assert_eq!(s.file_digest(), Some(&compute_digest(b"file B")));
    assert_eq!(s.selection().map(|x| x.label.as_str()), Some("b.pdf"));
}

#[tokio::test]
async fn late_failure_for_superseded_file_is_discarded() {
    let shared = shared_session(Session::new());
    let (release_a, gate_a) = oneshot::channel::<()>();

    let task_a = {
        let shared = shared.clone();
        tokio::spawn(async move {
            digest_selection(&shared, "a.pdf".into(), gated(gate_a, b"file A")).await
        })
    };
    wait_for_selection(&shared, "a.pdf").await;

    digest_selection(&shared, "b.pdf".into(), async {
        Ok::<_, HashError>(ByteInput::from(&b"file B"[..]))
    })
    .await;

    // Dropping the sender makes A's load fail.
    drop(release_a);
    assert_eq!(task_a.await.unwrap(), Commit::Stale);

    let s = shared.lock().await;
    assert_eq!(s.status(), StatusMessage::None);
    assert_eq!(s.file_digest(), Some(&compute_digest(b"file B")));
}

#[tokio::test]
async fn compare_flow_against_latest_selection() {
    let shared = shared_session(Session::new());
    shared.lock().await.set_tab(Tab::Compare);

    let expected = compute_digest(b"file B");
    shared.lock().await.set_input_hash(expected.as_str());

    let (release_a, gate_a) = oneshot::channel();
    let task_a = {
        let shared = shared.clone();
        tokio::spawn(async move {
            digest_selection(&shared, "a.pdf".into(), gated(gate_a, b"file A")).await
        })
    };
    wait_for_selection(&shared, "a.pdf").await;
    digest_selection(&shared, "b.pdf".into(), async {
        Ok::<_, HashError>(ByteInput::from(&b"file B"[..]))
    })
    .await;
    release_a.send(()).unwrap();
    task_a.await.unwrap();

    let mut s = shared.lock().await;
    s.request_compare();
    assert_eq!(s.status(), StatusMessage::HashesMatch);
}

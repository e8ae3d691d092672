//! Application state owned by the front end.
//!
//! Each file selection gets a generation number. A digest result is only
//! committed if its selection is still the latest one, so a slow read of an
//! earlier file can never overwrite the digest of a newer selection. Any new
//! input (file or typed text) clears the displayed comparison outcome.

use crate::compare::{compare, ComparisonOutcome};
use crate::digest::DigestHex;
use crate::error::HashError;
use std::fmt;

/// Which mode the front end is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Generate,
    Compare,
}

/// Ticket issued for a file selection; required to commit its digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub generation: u64,
    pub label: String,
}

/// Whether a digest result was stored or dropped as superseded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    Applied,
    Stale,
}

/// Message the front end should show for the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    /// Nothing to say yet (no explicit compare request since the last change).
    None,
    Prompt,
    HashesMatch,
    HashesDoNotMatch,
    /// The selected file could not be read. Never conflated with Pending.
    ReadFailed(String),
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusMessage::None => Ok(()),
            StatusMessage::Prompt => {
                write!(f, "Please upload a file and provide a hash to compare.")
            }
            StatusMessage::HashesMatch => write!(f, "Hashes match!"),
            StatusMessage::HashesDoNotMatch => write!(f, "Hashes do not match."),
            StatusMessage::ReadFailed(reason) => write!(f, "Could not read file: {}", reason),
        }
    }
}

#[derive(Debug, Default)]
pub struct Session {
    tab: Tab,
    generation: u64,
    selection: Option<Selection>,
    file_digest: Option<DigestHex>,
    read_error: Option<String>,
    input_hash: String,
    outcome: Option<ComparisonOutcome>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn file_digest(&self) -> Option<&DigestHex> {
        self.file_digest.as_ref()
    }

    pub fn input_hash(&self) -> &str {
        &self.input_hash
    }

    /// Start a new file selection. Supersedes any in-flight digest and clears
    /// everything derived from the previous file.
    pub fn begin_selection(&mut self, label: impl Into<String>) -> Selection {
        self.generation += 1;
        let selection = Selection {
            generation: self.generation,
            label: label.into(),
        };
        self.selection = Some(selection.clone());
        self.file_digest = None;
        self.read_error = None;
        self.outcome = None;
        tracing::debug!(
            generation = selection.generation,
            label = %selection.label,
            "file selected"
        );
        selection
    }

    pub fn is_current(&self, selection: &Selection) -> bool {
        selection.generation == self.generation
    }

    /// Store the result of digesting `selection`, unless a newer selection
    /// has been made since.
    pub fn commit(
        &mut self,
        selection: &Selection,
        result: Result<DigestHex, HashError>,
    ) -> Commit {
        if !self.is_current(selection) {
            tracing::debug!(
                generation = selection.generation,
                current = self.generation,
                label = %selection.label,
                "discarding superseded digest"
            );
            return Commit::Stale;
        }
        match result {
            Ok(digest) => {
                tracing::info!(label = %selection.label, digest = %digest, "digest ready");
                self.file_digest = Some(digest);
                self.read_error = None;
            }
            Err(e) => {
                tracing::warn!(label = %selection.label, "digest failed: {}", e);
                self.file_digest = None;
                self.read_error = Some(e.to_string());
            }
        }
        self.outcome = None;
        Commit::Applied
    }

    /// Replace the typed hash; any shown outcome no longer applies.
    pub fn set_input_hash(&mut self, text: impl Into<String>) {
        self.input_hash = text.into();
        self.outcome = None;
    }

    /// Explicit compare request from the user.
    pub fn request_compare(&mut self) -> ComparisonOutcome {
        let outcome = compare(self.file_digest.as_ref(), Some(self.input_hash.as_str()));
        tracing::debug!(?outcome, "compare requested");
        self.outcome = Some(outcome);
        outcome
    }

    pub fn status(&self) -> StatusMessage {
        if let Some(reason) = &self.read_error {
            return StatusMessage::ReadFailed(reason.clone());
        }
        match self.outcome {
            None => StatusMessage::None,
            Some(ComparisonOutcome::Pending) => StatusMessage::Prompt,
            Some(ComparisonOutcome::Match) => StatusMessage::HashesMatch,
            Some(ComparisonOutcome::Mismatch) => StatusMessage::HashesDoNotMatch,
        }
    }
}

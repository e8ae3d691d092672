//! Comparator: exact equality between a computed digest and user text.

use crate::digest::DigestHex;

/// Tri-state result of a comparison request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOutcome {
    /// One or both inputs are missing; the caller should prompt for them.
    Pending,
    Match,
    Mismatch,
}

impl ComparisonOutcome {
    pub fn needs_input(self) -> bool {
        self == ComparisonOutcome::Pending
    }
}

/// Compare a computed digest against a user-supplied string.
///
/// Absent or empty operands yield `Pending`. Otherwise the strings must be
/// identical byte for byte: no case folding, no whitespace trimming.
pub fn compare(computed: Option<&DigestHex>, user_supplied: Option<&str>) -> ComparisonOutcome {
    let (computed, user) = match (computed, user_supplied) {
        (Some(c), Some(u)) if !c.as_str().is_empty() && !u.is_empty() => (c, u),
        _ => return ComparisonOutcome::Pending,
    };
    if computed.as_str() == user {
        ComparisonOutcome::Match
    } else {
        ComparisonOutcome::Mismatch
    }
}

//! Error handling for the skill-swap matching crate

use thiserror::Error;

/// Error type for the crate's fallible boundary operations.
///
/// The match finder itself never fails: absent or malformed inputs
/// degrade to empty results so the presentation layer always receives a
/// valid (possibly empty) candidate list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// A `matches.status` value outside the known lifecycle set
    #[error("unknown match status: {0}")]
    UnknownStatus(String),

    /// An active (pending or accepted) match already links the two users
    #[error("an active swap already exists between these users")]
    ActiveSwapExists,
}

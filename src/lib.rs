//! Matchmaking core for the skill-swap exchange app
//!
//! This crate provides the pure matchmaking layer for a peer-to-peer
//! skill exchange: users list skills they can teach and skills they want
//! to learn, and the match finder derives, for every other user, the
//! bidirectional list of overlapping skills not yet satisfied by a
//! completed exchange.
//!
//! # Features
//!
//! - Row types for the `profiles` and `matches` tables (`Profile`,
//!   `Match`, `MatchStatus`, `NewMatch`)
//! - Skill-string canonicalization (`normalize_skill`, `fuzzy_match`)
//! - The match finder (`find_matches`), a pure function of its inputs
//!
//! The crate performs no I/O of its own: authentication, storage queries
//! and realtime delivery belong to the surrounding app shell. Inputs are
//! rows the storage layer already fetched; the output is a transient view
//! that is recomputed on every input change and never persisted.

// Declare modules
mod error;
mod matcher;
mod models;
mod normalize;

// Re-export key public types
pub use error::MatchError;
pub use matcher::{find_matches, PotentialMatch};
pub use models::{Match, MatchStatus, NewMatch, Profile};
pub use normalize::{fuzzy_match, normalize_skill};

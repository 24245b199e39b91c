//! Row and payload types for the `profiles` and `matches` tables
//!
//! Field names mirror the table columns so rows deserialize straight
//! from the storage layer's JSON responses.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::MatchError;

/// A user's skill-exchange identity, one row of the `profiles` table.
///
/// Created externally on first login and mutated externally when the
/// user edits their skills or a rating is submitted; the match finder
/// treats the skill lists as the live source of truth at call time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub id: Uuid,
    /// Auth user id; unique per profile.
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub bio: String,
    /// Skills this user can teach. Free text, ordered, case-preserving;
    /// duplicates from user input are kept as-is.
    #[serde(default)]
    pub skills_offered: Vec<String>,
    /// Skills this user wants to learn. Same shape as `skills_offered`.
    #[serde(default)]
    pub skills_wanted: Vec<String>,
    #[serde(default)]
    pub availability: String,
    /// Aggregate rating; 0.0 means unrated.
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub completed_sessions: u32,
    #[serde(default)]
    pub skill_credits: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

/// Lifecycle status of a match, stored as lowercase text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Pending,
    Accepted,
    Completed,
    Rejected,
}

impl MatchStatus {
    /// An active match blocks creating another one between the same pair.
    pub fn is_active(self) -> bool {
        matches!(self, MatchStatus::Pending | MatchStatus::Accepted)
    }

    /// Completed and rejected are terminal.
    pub fn is_terminal(self) -> bool {
        matches!(self, MatchStatus::Completed | MatchStatus::Rejected)
    }

    /// Legal transitions: pending → accepted → completed, pending → rejected.
    pub fn can_transition_to(self, next: MatchStatus) -> bool {
        matches!(
            (self, next),
            (MatchStatus::Pending, MatchStatus::Accepted)
                | (MatchStatus::Pending, MatchStatus::Rejected)
                | (MatchStatus::Accepted, MatchStatus::Completed)
        )
    }

    /// The stored string form.
    pub fn as_str(self) -> &'static str {
        match self {
            MatchStatus::Pending => "pending",
            MatchStatus::Accepted => "accepted",
            MatchStatus::Completed => "completed",
            MatchStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MatchStatus {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(MatchStatus::Pending),
            "accepted" => Ok(MatchStatus::Accepted),
            "completed" => Ok(MatchStatus::Completed),
            "rejected" => Ok(MatchStatus::Rejected),
            other => Err(MatchError::UnknownStatus(other.to_string())),
        }
    }
}

/// One row of the `matches` table: a directed exchange proposal from a
/// requester to a matched user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Match {
    pub id: Uuid,
    pub requester_id: Uuid,
    pub matched_user_id: Uuid,
    /// What the requester teaches in this exchange.
    pub skill_offered: String,
    /// What the matched user teaches in this exchange.
    pub skill_requested: String,
    pub status: MatchStatus,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Match {
    /// Whether `a` and `b` are exactly the two parties to this match, in
    /// either role.
    pub fn is_between(&self, a: Uuid, b: Uuid) -> bool {
        (self.requester_id == a && self.matched_user_id == b)
            || (self.requester_id == b && self.matched_user_id == a)
    }

    /// Resolve which stored skill `teacher` taught `student` in this
    /// exchange.
    ///
    /// A match records the exchange directionally: `skill_offered` is
    /// what the requester taught, `skill_requested` is what the matched
    /// user taught. Returns `None` unless the two ids are exactly the
    /// parties to this match.
    pub fn skill_taught_by(&self, teacher: Uuid, student: Uuid) -> Option<&str> {
        if self.requester_id == teacher && self.matched_user_id == student {
            Some(&self.skill_offered)
        } else if self.matched_user_id == teacher && self.requester_id == student {
            Some(&self.skill_requested)
        } else {
            None
        }
    }
}

/// Insert payload for creating a match, serialized back through the
/// storage layer by the presentation layer.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewMatch {
    pub requester_id: Uuid,
    pub matched_user_id: Uuid,
    pub skill_offered: String,
    pub skill_requested: String,
}

impl NewMatch {
    /// Enforce the pair invariant before insertion: at most one pending
    /// or accepted match may exist between two users at a time,
    /// regardless of who requested it.
    pub fn ensure_no_active_swap(&self, history: &[Match]) -> Result<(), MatchError> {
        let active = history
            .iter()
            .any(|m| m.status.is_active() && m.is_between(self.requester_id, self.matched_user_id));
        if active {
            Err(MatchError::ActiveSwapExists)
        } else {
            Ok(())
        }
    }
}

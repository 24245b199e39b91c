//! The match finder
//!
//! Derives, from snapshots of the profile set and the match history, the
//! candidates that are mutually relevant to one user. The computation is
//! pure and synchronous: the caller re-invokes it whenever a profile is
//! edited, the candidate pool refreshes, or a match changes status, and
//! renders whatever comes back. Cost is bounded by profile-set size ×
//! skill-list size, so no debouncing is needed here.

use log::debug;
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Match, MatchStatus, Profile};
use crate::normalize::{fuzzy_match, normalize_skill};

/// A derived candidate pairing. Recomputed on every call to
/// [`find_matches`] and never persisted.
///
/// The skill lists carry the original, non-normalized strings so the
/// presentation layer shows what the users actually typed.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PotentialMatch<'a> {
    /// The candidate profile.
    pub profile: &'a Profile,
    /// Skills I offer that this candidate wants and has not already
    /// learned from me.
    pub my_skill_they_want: Vec<&'a str>,
    /// Skills this candidate offers that I want and have not already
    /// learned from them.
    pub their_skill_i_want: Vec<&'a str>,
}

/// Compute the mutually relevant candidates for `my_profile`.
///
/// For every other profile in `all_profiles`, collects the skills I
/// offer that they want and the skills they offer that I want, using
/// bidirectional substring containment on normalized skill strings as
/// the sole similarity rule. Skills already exchanged in a completed
/// match between the two users are excluded, per direction. Candidates
/// with no overlap in either direction are dropped; the rest keep the
/// relative order of `all_profiles`.
///
/// Absent `my_profile` or `all_profiles` yields an empty vec — never an
/// error. `my_profile`'s own record may appear in `all_profiles`; it is
/// filtered out.
pub fn find_matches<'a>(
    my_profile: Option<&'a Profile>,
    all_profiles: Option<&'a [Profile]>,
    match_history: &[Match],
) -> Vec<PotentialMatch<'a>> {
    let (me, profiles) = match (my_profile, all_profiles) {
        (Some(me), Some(profiles)) => (me, profiles),
        _ => return Vec::new(),
    };

    let my_id = me.user_id;
    let my_wanted: Vec<String> = me.skills_wanted.iter().map(|s| normalize_skill(s)).collect();
    let completed: Vec<&Match> = match_history
        .iter()
        .filter(|m| m.status == MatchStatus::Completed)
        .collect();

    let results: Vec<PotentialMatch<'a>> = profiles
        .iter()
        .filter(|p| p.user_id != my_id)
        .filter_map(|p| {
            let their_wanted: Vec<String> =
                p.skills_wanted.iter().map(|s| normalize_skill(s)).collect();

            let my_skill_they_want =
                overlapping_skills(&me.skills_offered, &their_wanted, |skill| {
                    already_exchanged(&completed, my_id, p.user_id, skill)
                });
            let their_skill_i_want = overlapping_skills(&p.skills_offered, &my_wanted, |skill| {
                already_exchanged(&completed, p.user_id, my_id, skill)
            });

            if my_skill_they_want.is_empty() && their_skill_i_want.is_empty() {
                return None;
            }
            Some(PotentialMatch {
                profile: p,
                my_skill_they_want,
                their_skill_i_want,
            })
        })
        .collect();

    debug!(
        "found {} potential matches among {} profiles for user {}",
        results.len(),
        profiles.len(),
        my_id
    );
    results
}

/// Filter `offered` down to the original strings whose normalized form
/// is non-empty, fuzzily overlaps some entry of `wanted`, and is not
/// already covered by a completed exchange.
fn overlapping_skills<'a>(
    offered: &'a [String],
    wanted: &[String],
    mut exchanged: impl FnMut(&str) -> bool,
) -> Vec<&'a str> {
    offered
        .iter()
        .filter_map(|s| {
            let norm = normalize_skill(s);
            if norm.is_empty() {
                return None;
            }
            if !wanted.iter().any(|w| fuzzy_match(w, &norm)) {
                return None;
            }
            if exchanged(&norm) {
                return None;
            }
            Some(s.as_str())
        })
        .collect()
}

/// Whether a completed swap already covers `skill` in the direction
/// `teacher` → `student`.
fn already_exchanged(completed: &[&Match], teacher: Uuid, student: Uuid, skill: &str) -> bool {
    completed.iter().any(|m| {
        m.skill_taught_by(teacher, student)
            .map(|taught| fuzzy_match(&normalize_skill(taught), skill))
            .unwrap_or(false)
    })
}

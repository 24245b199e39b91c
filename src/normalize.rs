//! Skill-string canonicalization
//!
//! Skills are free text typed by users. Before any comparison they are
//! folded into a canonical key; the comparison itself is plain substring
//! containment in either direction. This is intentionally crude — no
//! pluralization, no synonym table, no Unicode folding — and must stay
//! that way: anything smarter would silently change which stored rows
//! match each other.

/// Canonicalize a free-text skill string into a comparable key.
///
/// Lowercases, trims, and collapses internal whitespace runs to a single
/// space. Additionally rewrites every occurrence of `"programming"` to
/// `"programing"`: rows stored before the misspelling was noticed carry
/// the short form, and correcting it here would stop those skills from
/// matching. Keep the substitution exactly as-is.
///
/// Empty or whitespace-only input yields the empty string, which never
/// matches anything.
///
/// # Example
///
/// ```
/// use skillswap_matching::normalize_skill;
///
/// assert_eq!(normalize_skill("  Java   Script "), "java script");
/// assert_eq!(normalize_skill("Python Programming"), "python programing");
/// assert_eq!(normalize_skill(""), "");
/// ```
pub fn normalize_skill(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_lowercase().replace("programming", "programing")
}

/// The sole similarity rule: two normalized skills match when either is
/// a substring of the other.
///
/// Callers must pass strings already run through [`normalize_skill`].
/// Empty strings never match.
///
/// # Example
///
/// ```
/// use skillswap_matching::fuzzy_match;
///
/// assert!(fuzzy_match("python programing", "python"));
/// assert!(fuzzy_match("python", "python programing"));
/// assert!(!fuzzy_match("python", "guitar"));
/// ```
pub fn fuzzy_match(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(b) || b.contains(a)
}

//! Seed-node blacklist filtering.

use std::collections::HashMap;

/// Failure count at which a blacklisted node stops being offered.
///
/// A candidate is retained while its observed failure count is strictly
/// below this threshold; callers may override it per call.
pub const DEFAULT_MAX_TRIES: u32 = 4;

/// Filter peer candidates against a blacklist of observed failure counts.
///
/// Candidates with `max_tries` or more recorded failures are dropped. The
/// survivors are ordered by ascending failure count (unlisted candidates
/// count as zero), with the original input order as a stable tie-break, so
/// the most reliable peers are tried first.
pub fn filter_blacklisted(
    candidates: &[&str],
    blacklist: &HashMap<String, u32>,
    max_tries: u32,
) -> Vec<String> {
    let mut retained: Vec<&str> = candidates
        .iter()
        .copied()
        .filter(|addr| blacklist.get(*addr).copied().unwrap_or(0) < max_tries)
        .collect();
    retained.sort_by_key(|addr| blacklist.get(*addr).copied().unwrap_or(0));
    retained.into_iter().map(str::to_string).collect()
}

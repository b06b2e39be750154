//! Match ranking

use super::evaluate::SkillMatch;

/// Sort matches by priority rank, then enforcement rank, both descending.
///
/// The comparison is a strict weak ordering over the two rank keys. The
/// sort is stable, so matches tied on both keys keep their matching order.
pub fn rank_matches(matches: &mut [SkillMatch]) {
    matches.sort_by(|a, b| {
        (b.priority.rank(), b.enforcement.rank()).cmp(&(a.priority.rank(), a.enforcement.rank()))
    });
}

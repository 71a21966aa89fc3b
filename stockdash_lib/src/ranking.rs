//! Top gainers / top losers ordering.
//!
//! The market summary normally arrives pre-ranked and only needs 1-based
//! positions attached ([`with_ranks`]). [`rank_movers`] is the opt-in
//! client-side ranking for when only raw snapshots are available.

use std::cmp::Ordering;

use stockdash_api::types::Snapshot;

/// Number of movers shown per list.
pub const DEFAULT_TOP_MOVERS: usize = 5;

/// Pairs each entry of an already-ordered list with its 1-based rank.
pub fn with_ranks(list: &[Snapshot]) -> impl Iterator<Item = (usize, &Snapshot)> {
    list.iter().enumerate().map(|(i, s)| (i + 1, s))
}

/// Client-side gainer and loser lists.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Movers {
    pub gainers: Vec<Snapshot>,
    pub losers: Vec<Snapshot>,
}

fn by_percent_then_symbol(a: &Snapshot, b: &Snapshot, descending: bool) -> Ordering {
    let pct = if descending {
        b.change_percent.total_cmp(&a.change_percent)
    } else {
        a.change_percent.total_cmp(&b.change_percent)
    };
    pct.then_with(|| a.symbol.cmp(&b.symbol))
}

/// Ranks snapshots into gainers (positive change, descending) and losers
/// (negative change, ascending), ties broken by symbol.
///
/// A snapshot with exactly zero or non-finite `change_percent` lands in
/// neither list, so no symbol can appear in both. Each list holds at most
/// `limit` entries.
pub fn rank_movers(snapshots: &[Snapshot], limit: usize) -> Movers {
    let mut gainers: Vec<Snapshot> = snapshots
        .iter()
        .filter(|s| s.change_percent.is_finite() && s.change_percent > 0.0)
        .cloned()
        .collect();
    let mut losers: Vec<Snapshot> = snapshots
        .iter()
        .filter(|s| s.change_percent.is_finite() && s.change_percent < 0.0)
        .cloned()
        .collect();

    gainers.sort_by(|a, b| by_percent_then_symbol(a, b, true));
    losers.sort_by(|a, b| by_percent_then_symbol(a, b, false));
    gainers.truncate(limit);
    losers.truncate(limit);

    tracing::debug!(
        "Ranked {} snapshots into {} gainers and {} losers",
        snapshots.len(),
        gainers.len(),
        losers.len()
    );

    Movers { gainers, losers }
}

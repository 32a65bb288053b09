//! Standings: rank players from their cumulative stats.

use crate::models::{PlayerName, PlayerStanding, PlayerStats, PlayerStatsMap};
use std::cmp::Ordering;

/// Rank every player in `player_stats` plus any roster player without a record (as a zero record,
/// appended in roster order).
///
/// Order: points (desc), then win rate (desc), then games played (asc). The sort is stable, so
/// players tied on all three keep their input order. Ranks are positional and never shared.
pub fn get_current_standings(
    player_stats: &PlayerStatsMap,
    players: &[PlayerName],
) -> Vec<PlayerStanding> {
    let mut rows: Vec<(&str, PlayerStats)> = player_stats
        .iter()
        .map(|(name, stats)| (name, stats.clone()))
        .collect();
    for player in players {
        if !rows.iter().any(|(name, _)| *name == player.as_str()) {
            rows.push((player.as_str(), PlayerStats::default()));
        }
    }

    rows.sort_by(|(_, a), (_, b)| compare_stats(a, b));

    rows.into_iter()
        .enumerate()
        .map(|(i, (name, stats))| PlayerStanding::from_stats(name, i + 1, stats))
        .collect()
}

/// `Less` means `a` ranks above `b`.
fn compare_stats(a: &PlayerStats, b: &PlayerStats) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.win_rate().total_cmp(&a.win_rate()))
        .then_with(|| a.played.cmp(&b.played))
}

/// 1-based position of `player` in the roster.
pub fn player_number(player: &str, players: &[PlayerName]) -> Option<usize> {
    players.iter().position(|p| p == player).map(|i| i + 1)
}

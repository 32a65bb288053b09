//! Player statistics: PlayerStats, RoundDetail, the ordered stats map, and PlayerStanding.

use serde::{Deserialize, Serialize};

/// Players are identified by their display name.
pub type PlayerName = String;

/// One match outcome from a single player's perspective.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundDetail {
    pub round: u32,
    /// Own team's score.
    pub score: u32,
    pub opponent_score: u32,
    pub won: bool,
    pub tied: bool,
    pub partner: PlayerName,
    /// Opponents in team order.
    pub opponents: [PlayerName; 2],
}

/// Cumulative statistics for one player.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub points: u32,
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub tied: u32,
    /// One entry per match the player appeared in, in the order matches were finished.
    pub round_details: Vec<RoundDetail>,
}

impl PlayerStats {
    /// Share of matches won, 0.0 when no match has been played.
    pub fn win_rate(&self) -> f64 {
        if self.played == 0 {
            0.0
        } else {
            f64::from(self.won) / f64::from(self.played)
        }
    }
}

/// One row of the stats map.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerStatsEntry {
    pub player: PlayerName,
    #[serde(flatten)]
    pub stats: PlayerStats,
}

/// Player name -> stats, kept in insertion order.
///
/// Insertion order matters: standings fall back to it when every sort key ties.
/// Duplicate names share one record.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerStatsMap {
    entries: Vec<PlayerStatsEntry>,
}

impl PlayerStatsMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero-valued records for every roster player, in roster order.
    pub fn for_roster(players: &[PlayerName]) -> Self {
        let mut map = Self::new();
        for name in players {
            map.entry(name);
        }
        map
    }

    pub fn get(&self, player: &str) -> Option<&PlayerStats> {
        self.entries
            .iter()
            .find(|e| e.player == player)
            .map(|e| &e.stats)
    }

    /// Stats for `player`, or a zero record if the player has never been seen.
    pub fn get_or_default(&self, player: &str) -> PlayerStats {
        self.get(player).cloned().unwrap_or_default()
    }

    pub fn contains(&self, player: &str) -> bool {
        self.get(player).is_some()
    }

    /// Mutable stats for `player`, inserting a zero record at the end if missing.
    pub fn entry(&mut self, player: &str) -> &mut PlayerStats {
        let idx = match self.entries.iter().position(|e| e.player == player) {
            Some(idx) => idx,
            None => {
                self.entries.push(PlayerStatsEntry {
                    player: player.to_string(),
                    stats: PlayerStats::default(),
                });
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx].stats
    }

    /// Drop the record for `player` (roster edits during setup).
    pub fn remove(&mut self, player: &str) {
        self.entries.retain(|e| e.player != player);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PlayerStats)> {
        self.entries.iter().map(|e| (e.player.as_str(), &e.stats))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A player's ranked summary, derived from PlayerStats on demand.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerStanding {
    pub player: PlayerName,
    /// 1-based position after sorting; ties never share a rank.
    pub rank: usize,
    pub points: u32,
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub tied: u32,
    pub round_details: Vec<RoundDetail>,
}

impl PlayerStanding {
    pub fn from_stats(player: impl Into<PlayerName>, rank: usize, stats: PlayerStats) -> Self {
        Self {
            player: player.into(),
            rank,
            points: stats.points,
            played: stats.played,
            won: stats.won,
            lost: stats.lost,
            tied: stats.tied,
            round_details: stats.round_details,
        }
    }
}

//! Match (game), TeamScore, and match status for doubles play.

use crate::models::player::PlayerName;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Match sequence number.
pub type MatchId = u32;

/// Highest score accepted for one team in one match.
pub const MAX_SCORE: u32 = 999;

/// Which side of a match.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    #[default]
    One,
    Two,
}

impl Team {
    pub fn other(self) -> Self {
        match self {
            Team::One => Team::Two,
            Team::Two => Team::One,
        }
    }
}

/// Lifecycle of a match: waiting -> playing -> finished (reset goes back to waiting).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Waiting,
    Playing,
    Finished,
}

/// Two players and their team score.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamScore {
    pub player1: PlayerName,
    pub player2: PlayerName,
    pub score: u32,
}

impl TeamScore {
    pub fn new(player1: impl Into<PlayerName>, player2: impl Into<PlayerName>) -> Self {
        Self {
            player1: player1.into(),
            player2: player2.into(),
            score: 0,
        }
    }

    pub fn players(&self) -> [&str; 2] {
        [&self.player1, &self.player2]
    }

    /// The other member of the team. Returns `player1` when `player` is not on the team.
    pub fn partner_of(&self, player: &str) -> &str {
        if self.player1 == player {
            &self.player2
        } else {
            &self.player1
        }
    }

    pub fn contains(&self, player: &str) -> bool {
        self.player1 == player || self.player2 == player
    }
}

/// A single doubles match on one court.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    /// 1..=court_count.
    pub court: usize,
    pub round: u32,
    pub team1: TeamScore,
    pub team2: TeamScore,
    pub status: MatchStatus,
    /// Set when the match is finalized, cleared on reset.
    pub finished_at: Option<DateTime<Utc>>,
}

impl GameMatch {
    pub fn new(id: MatchId, court: usize, round: u32, team1: TeamScore, team2: TeamScore) -> Self {
        Self {
            id,
            court,
            round,
            team1,
            team2,
            status: MatchStatus::Waiting,
            finished_at: None,
        }
    }

    pub fn team(&self, team: Team) -> &TeamScore {
        match team {
            Team::One => &self.team1,
            Team::Two => &self.team2,
        }
    }

    pub fn team_mut(&mut self, team: Team) -> &mut TeamScore {
        match team {
            Team::One => &mut self.team1,
            Team::Two => &mut self.team2,
        }
    }

    /// All four players: team1 then team2.
    pub fn players(&self) -> [&str; 4] {
        [
            &self.team1.player1,
            &self.team1.player2,
            &self.team2.player1,
            &self.team2.player2,
        ]
    }

    pub fn has_player(&self, player: &str) -> bool {
        self.team1.contains(player) || self.team2.contains(player)
    }

    pub fn is_tie(&self) -> bool {
        self.team1.score == self.team2.score
    }

    /// Winning side, `None` on a tie.
    pub fn winner(&self) -> Option<Team> {
        use std::cmp::Ordering::*;
        match self.team1.score.cmp(&self.team2.score) {
            Greater => Some(Team::One),
            Less => Some(Team::Two),
            Equal => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.status == MatchStatus::Finished
    }
}

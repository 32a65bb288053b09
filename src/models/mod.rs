//! Data structures for the padel tournament: players, stats, matches, tournament state.

mod game;
mod player;
mod tournament;

pub use game::{GameMatch, MatchId, MatchStatus, Team, TeamScore, MAX_SCORE};
pub use player::{
    PlayerName, PlayerStanding, PlayerStats, PlayerStatsEntry, PlayerStatsMap, RoundDetail,
};
pub use tournament::{
    RoundResult, Tournament, TournamentError, TournamentFormat, TournamentSettings, TournamentState,
};

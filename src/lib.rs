//! Padel tournament organizer (Mexicano / Americano): library with models and business logic.

pub mod logic;
pub mod models;

pub use logic::{
    finish_match, generate_americano_pairings, generate_mexicano_pairings, generate_pairings,
    generate_pairings_with_rng, get_current_standings, next_round, next_round_with_rng,
    player_number, reset_match, retract_player_stats, set_match_score, standings_to_csv,
    start_tournament, start_tournament_with_rng, update_player_stats, RotationPattern,
    PLAYERS_PER_MATCH,
};
pub use models::{
    GameMatch, MatchId, MatchStatus, PlayerName, PlayerStanding, PlayerStats, PlayerStatsEntry,
    PlayerStatsMap, RoundDetail, RoundResult, Team, TeamScore, Tournament, TournamentError,
    TournamentFormat, TournamentSettings, TournamentState, MAX_SCORE,
};

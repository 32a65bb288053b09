//! Tournament business logic: pairing, standings, stats, setup and round play.

mod export;
mod pairing;
mod play;
mod setup;
mod standings;
mod stats;

pub use export::standings_to_csv;
pub use pairing::{
    generate_americano_pairings, generate_mexicano_pairings, generate_pairings,
    generate_pairings_with_rng, RotationPattern, PLAYERS_PER_MATCH,
};
pub use play::{finish_match, next_round, next_round_with_rng, reset_match, set_match_score};
pub use setup::{start_tournament, start_tournament_with_rng};
pub use standings::{get_current_standings, player_number};
pub use stats::{retract_player_stats, update_player_stats};

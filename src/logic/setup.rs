//! Setup phase: start tournament (transition from Setup to InProgress with round 1 paired).

use crate::logic::pairing::{generate_pairings_with_rng, PLAYERS_PER_MATCH};
use crate::logic::play::append_round;
use crate::models::{PlayerStatsMap, Tournament, TournamentError, TournamentState};
use rand::Rng;

/// Start the tournament: require at least one full match worth of players, then pair round 1.
pub fn start_tournament(tournament: &mut Tournament) -> Result<(), TournamentError> {
    start_tournament_with_rng(tournament, &mut rand::thread_rng())
}

/// [`start_tournament`] with a caller-supplied RNG for the round-1 shuffle.
pub fn start_tournament_with_rng<R: Rng + ?Sized>(
    tournament: &mut Tournament,
    rng: &mut R,
) -> Result<(), TournamentError> {
    if tournament.state != TournamentState::Setup {
        return Err(TournamentError::InvalidState);
    }
    let required = PLAYERS_PER_MATCH;
    if tournament.players.len() < required {
        return Err(TournamentError::NotEnoughPlayersToStart { required });
    }
    tournament.settings.validate()?;

    // Fresh zero records in roster order; standings ties fall back to this order.
    tournament.player_stats = PlayerStatsMap::for_roster(&tournament.players);

    let matches = generate_pairings_with_rng(
        1,
        tournament.settings.format,
        &tournament.players,
        tournament.settings.court_count,
        &tournament.player_stats,
        rng,
    )?;
    tournament.current_round = 1;
    append_round(tournament, matches);
    tournament.state = TournamentState::InProgress;

    log::info!(
        "Tournament '{}' started: {} players, {} courts, {:?}",
        tournament.settings.name,
        tournament.players.len(),
        tournament.settings.court_count,
        tournament.settings.format
    );
    Ok(())
}

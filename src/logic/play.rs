//! Round play: score entry, finishing and resetting matches, advancing rounds.

use crate::logic::pairing::generate_pairings_with_rng;
use crate::logic::stats::{retract_player_stats, update_player_stats};
use crate::models::{
    GameMatch, MatchId, MatchStatus, RoundResult, Team, Tournament, TournamentError,
    TournamentState, MAX_SCORE,
};
use chrono::Utc;
use rand::Rng;

/// Enter a score for one team of a match.
///
/// With a score limit the other team gets `limit - score`, and a team reaching the limit
/// finishes the match. Without one, scores are capped at [`MAX_SCORE`]. A waiting match starts
/// playing once either score is above zero.
pub fn set_match_score(
    tournament: &mut Tournament,
    match_id: MatchId,
    team: Team,
    score: u32,
) -> Result<(), TournamentError> {
    let score_limit = tournament.settings.score_limit;
    let m = current_match_mut(tournament, match_id)?;
    if m.is_finished() {
        return Err(TournamentError::MatchAlreadyFinished(match_id));
    }

    let limit = score_limit.unwrap_or(MAX_SCORE);
    if score > limit {
        return Err(TournamentError::ScoreOutOfRange { score, limit });
    }
    if score_limit.is_some() {
        m.team_mut(team.other()).score = limit - score;
    }
    m.team_mut(team).score = score;
    if m.status == MatchStatus::Waiting && (m.team1.score > 0 || m.team2.score > 0) {
        m.status = MatchStatus::Playing;
    }

    let reached_limit =
        score_limit.is_some_and(|limit| m.team1.score == limit || m.team2.score == limit);
    if reached_limit {
        log::debug!("match {} reached the score limit", match_id);
        finish_match(tournament, match_id)?;
    }
    Ok(())
}

/// Finalize a match and fold its result into the player stats (exactly once).
///
/// A match still waiting at 0-0 has had no score entered and cannot be finished.
pub fn finish_match(tournament: &mut Tournament, match_id: MatchId) -> Result<(), TournamentError> {
    let m = current_match_mut(tournament, match_id)?;
    if m.is_finished() {
        return Err(TournamentError::MatchAlreadyFinished(match_id));
    }
    if m.status == MatchStatus::Waiting && m.team1.score == 0 && m.team2.score == 0 {
        return Err(TournamentError::NoScoreEntered(match_id));
    }
    m.status = MatchStatus::Finished;
    m.finished_at = Some(Utc::now());
    let finished = m.clone();

    tournament.player_stats = update_player_stats(&finished, &tournament.player_stats);
    log::info!(
        "Match {} (round {}, court {}) finished {}-{}",
        finished.id,
        finished.round,
        finished.court,
        finished.team1.score,
        finished.team2.score
    );
    Ok(())
}

/// Put a match back to waiting with 0-0. If it was finished, its result is retracted from the
/// player stats.
pub fn reset_match(tournament: &mut Tournament, match_id: MatchId) -> Result<(), TournamentError> {
    let m = current_match_mut(tournament, match_id)?;
    let before = m.clone();
    m.team1.score = 0;
    m.team2.score = 0;
    m.status = MatchStatus::Waiting;
    m.finished_at = None;

    if before.is_finished() {
        tournament.player_stats = retract_player_stats(&before, &tournament.player_stats);
        log::info!("Match {} reset; result retracted from stats", match_id);
    }
    Ok(())
}

/// Close the current round (all matches must be finished) and pair the next one.
pub fn next_round(tournament: &mut Tournament) -> Result<(), TournamentError> {
    next_round_with_rng(tournament, &mut rand::thread_rng())
}

/// [`next_round`] with a caller-supplied RNG.
pub fn next_round_with_rng<R: Rng + ?Sized>(
    tournament: &mut Tournament,
    rng: &mut R,
) -> Result<(), TournamentError> {
    if tournament.state != TournamentState::InProgress {
        return Err(TournamentError::InvalidState);
    }
    if tournament.current_matches().any(|m| !m.is_finished()) {
        return Err(TournamentError::IncompleteResults);
    }

    let closed = RoundResult {
        round: tournament.current_round,
        matches: tournament.current_matches().cloned().collect(),
        player_stats: tournament.player_stats.clone(),
    };
    tournament.round_history.push(closed);

    let round = tournament.current_round + 1;
    let matches = generate_pairings_with_rng(
        round,
        tournament.settings.format,
        &tournament.players,
        tournament.settings.court_count,
        &tournament.player_stats,
        rng,
    )?;
    tournament.current_round = round;
    append_round(tournament, matches);

    log::info!("Round {} started", round);
    Ok(())
}

/// A match of the round being played. Matches of closed rounds are frozen: their results are
/// already in the round history and in the pairings built from it.
fn current_match_mut(
    tournament: &mut Tournament,
    match_id: MatchId,
) -> Result<&mut GameMatch, TournamentError> {
    if tournament.state != TournamentState::InProgress {
        return Err(TournamentError::InvalidState);
    }
    let current_round = tournament.current_round;
    let m = tournament
        .get_match_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    if m.round != current_round {
        return Err(TournamentError::MatchNotInCurrentRound(match_id));
    }
    Ok(m)
}

/// Append a freshly paired round, replacing its batch ids (1..) with tournament-wide ids.
pub(crate) fn append_round(tournament: &mut Tournament, matches: Vec<GameMatch>) {
    for mut m in matches {
        m.id = tournament.next_match_id;
        tournament.next_match_id += 1;
        tournament.matches.push(m);
    }
}

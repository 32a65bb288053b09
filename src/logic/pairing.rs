//! Round pairing: split the roster into groups of four and assign courts.
//!
//! - Americano: fixed index rotation, cross-paired within each group.
//! - Mexicano round 1: random shuffle, first two vs last two.
//! - Mexicano later rounds: groups of four by current rank, with a 3-round partner rotation.

use crate::logic::standings::get_current_standings;
use crate::models::{
    GameMatch, MatchId, PlayerName, PlayerStatsMap, TeamScore, TournamentError, TournamentFormat,
};
use rand::seq::SliceRandom;
use rand::Rng;

/// Players per doubles match.
pub const PLAYERS_PER_MATCH: usize = 4;

/// Generate the matches for `round` (1-based). Round 1 of Mexicano uses the thread RNG.
///
/// Leftover players (roster length not a multiple of 4) sit the round out. Fails only when
/// `court_count` is 0.
pub fn generate_pairings(
    round: u32,
    format: TournamentFormat,
    players: &[PlayerName],
    court_count: usize,
    player_stats: &PlayerStatsMap,
) -> Result<Vec<GameMatch>, TournamentError> {
    generate_pairings_with_rng(
        round,
        format,
        players,
        court_count,
        player_stats,
        &mut rand::thread_rng(),
    )
}

/// Same as [`generate_pairings`] with a caller-supplied RNG (seed it for reproducible round 1).
pub fn generate_pairings_with_rng<R: Rng + ?Sized>(
    round: u32,
    format: TournamentFormat,
    players: &[PlayerName],
    court_count: usize,
    player_stats: &PlayerStatsMap,
    rng: &mut R,
) -> Result<Vec<GameMatch>, TournamentError> {
    let matches = match format {
        TournamentFormat::Americano => generate_americano_pairings(round, players, court_count)?,
        TournamentFormat::Mexicano => {
            generate_mexicano_pairings(round, players, court_count, player_stats, rng)?
        }
    };

    let seated = matches.len() * PLAYERS_PER_MATCH;
    if seated < players.len() {
        log::warn!(
            "round {}: {} of {} players sit out (roster not a multiple of {})",
            round,
            players.len() - seated,
            players.len(),
            PLAYERS_PER_MATCH
        );
    }
    log::debug!("round {}: generated {} {:?} matches", round, matches.len(), format);
    Ok(matches)
}

/// Americano: for the group starting at roster index `i`, take indices `i..i+4` shifted by
/// `((round - 1) mod n) * 2` (mod n) and pair them 0+2 vs 1+3.
pub fn generate_americano_pairings(
    round: u32,
    players: &[PlayerName],
    court_count: usize,
) -> Result<Vec<GameMatch>, TournamentError> {
    let mut courts = CourtRotation::new(court_count)?;
    let n = players.len();
    if n < PLAYERS_PER_MATCH {
        return Ok(Vec::new());
    }
    let offset = (round.saturating_sub(1) as usize % n) * 2;

    let matches = (0..n - n % PLAYERS_PER_MATCH)
        .step_by(PLAYERS_PER_MATCH)
        .enumerate()
        .map(|(g, i)| {
            let at = |k: usize| players[(i + k + offset) % n].as_str();
            GameMatch::new(
                batch_id(g),
                courts.next_court(),
                round,
                TeamScore::new(at(0), at(2)),
                TeamScore::new(at(1), at(3)),
            )
        })
        .collect();
    Ok(matches)
}

/// Mexicano: random groups in round 1, ranked groups afterwards.
pub fn generate_mexicano_pairings<R: Rng + ?Sized>(
    round: u32,
    players: &[PlayerName],
    court_count: usize,
    player_stats: &PlayerStatsMap,
    rng: &mut R,
) -> Result<Vec<GameMatch>, TournamentError> {
    let mut courts = CourtRotation::new(court_count)?;

    let matches = if round <= 1 {
        let mut shuffled = players.to_vec();
        shuffled.shuffle(rng);
        shuffled
            .chunks_exact(PLAYERS_PER_MATCH)
            .enumerate()
            .map(|(g, chunk)| {
                GameMatch::new(
                    batch_id(g),
                    courts.next_court(),
                    round,
                    TeamScore::new(&*chunk[0], &*chunk[1]),
                    TeamScore::new(&*chunk[2], &*chunk[3]),
                )
            })
            .collect()
    } else {
        let ranked: Vec<PlayerName> = get_current_standings(player_stats, players)
            .into_iter()
            .map(|s| s.player)
            .collect();
        let pattern = RotationPattern::for_round(round);
        log::debug!("round {}: mexicano rotation {:?}", round, pattern);
        ranked
            .chunks_exact(PLAYERS_PER_MATCH)
            .enumerate()
            .map(|(g, chunk)| {
                let (team1, team2) = pattern.pair(chunk);
                GameMatch::new(batch_id(g), courts.next_court(), round, team1, team2)
            })
            .collect()
    };
    Ok(matches)
}

/// Partner rotation within a ranked group of four, cycling every three rounds so that each
/// player partners each of the other three once while the group stays together.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RotationPattern {
    /// (p0, p1) vs (p2, p3)
    Adjacent,
    /// (p2, p0) vs (p1, p3)
    Split,
    /// (p0, p3) vs (p1, p2)
    Outside,
}

impl RotationPattern {
    /// Pattern for `round`, keyed on `(round - 1) mod 3`.
    pub fn for_round(round: u32) -> Self {
        match round.saturating_sub(1) % 3 {
            0 => RotationPattern::Adjacent,
            1 => RotationPattern::Split,
            _ => RotationPattern::Outside,
        }
    }

    fn pair(self, group: &[PlayerName]) -> (TeamScore, TeamScore) {
        let p = |k: usize| group[k].as_str();
        match self {
            RotationPattern::Adjacent => (TeamScore::new(p(0), p(1)), TeamScore::new(p(2), p(3))),
            RotationPattern::Split => (TeamScore::new(p(2), p(0)), TeamScore::new(p(1), p(3))),
            RotationPattern::Outside => (TeamScore::new(p(0), p(3)), TeamScore::new(p(1), p(2))),
        }
    }
}

/// Ids restart at 1 for every generated batch.
fn batch_id(group_index: usize) -> MatchId {
    group_index as MatchId + 1
}

/// Round-robin court numbers: 1, 2, .., court_count, 1, ..
struct CourtRotation {
    court_count: usize,
    next: usize,
}

impl CourtRotation {
    fn new(court_count: usize) -> Result<Self, TournamentError> {
        if court_count == 0 {
            return Err(TournamentError::InvalidConfiguration(
                "court count must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            court_count,
            next: 1,
        })
    }

    fn next_court(&mut self) -> usize {
        let court = self.next;
        self.next = (self.next % self.court_count) + 1;
        court
    }
}

//! Standings export as CSV.

use crate::logic::standings::player_number;
use crate::models::{PlayerName, PlayerStanding};
use serde::Serialize;

#[derive(Serialize)]
struct StandingRow<'a> {
    rank: usize,
    /// Roster number (1-based), empty for players not on the roster.
    number: Option<usize>,
    player: &'a str,
    points: u32,
    played: u32,
    won: u32,
    lost: u32,
    tied: u32,
}

/// Render standings as CSV with a header row, one line per player in rank order.
pub fn standings_to_csv(
    standings: &[PlayerStanding],
    players: &[PlayerName],
) -> Result<String, csv::Error> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for s in standings {
        wtr.serialize(StandingRow {
            rank: s.rank,
            number: player_number(&s.player, players),
            player: &s.player,
            points: s.points,
            played: s.played,
            won: s.won,
            lost: s.lost,
            tied: s.tied,
        })?;
    }
    let bytes = wtr
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

//! Fold finished matches into per-player stats (and take them back out on reset).

use crate::models::{GameMatch, PlayerStatsMap, RoundDetail, Team};

/// Return a copy of `player_stats` with `game` applied to its four players.
///
/// Each player gets their team's score added to `points`, one more `played`, exactly one of
/// `won`/`lost`/`tied`, and one appended RoundDetail. Applying the same match twice counts it
/// twice; callers fold each finished match exactly once.
pub fn update_player_stats(game: &GameMatch, player_stats: &PlayerStatsMap) -> PlayerStatsMap {
    let mut new_stats = player_stats.clone();
    let winner = game.winner();
    let tied = game.is_tie();

    for side in [Team::One, Team::Two] {
        let own = game.team(side);
        let won = winner == Some(side);
        for player in own.players() {
            let stats = new_stats.entry(player);
            stats.points = stats.points.saturating_add(own.score);
            stats.played += 1;
            if tied {
                stats.tied += 1;
            } else if won {
                stats.won += 1;
            } else {
                stats.lost += 1;
            }
            stats.round_details.push(round_detail(game, side, player, won, tied));
        }
        log::debug!(
            "round {} court {}: {} + {} scored {} ({})",
            game.round,
            game.court,
            own.player1,
            own.player2,
            own.score,
            if tied { "tie" } else if won { "win" } else { "loss" }
        );
    }

    new_stats
}

/// Inverse of [`update_player_stats`]: remove `game` from each player's record.
///
/// The most recent RoundDetail describing this match is removed and the counters it contributed
/// are decremented. Players with no matching detail are left untouched, so retracting a match
/// that was never applied is a no-op.
pub fn retract_player_stats(game: &GameMatch, player_stats: &PlayerStatsMap) -> PlayerStatsMap {
    let mut new_stats = player_stats.clone();
    let winner = game.winner();
    let tied = winner.is_none();

    for side in [Team::One, Team::Two] {
        let own = game.team(side);
        let won = winner == Some(side);
        for player in own.players() {
            if !new_stats.contains(player) {
                continue;
            }
            let expected = round_detail(game, side, player, won, tied);
            let stats = new_stats.entry(player);
            let Some(pos) = stats.round_details.iter().rposition(|d| *d == expected) else {
                continue;
            };
            stats.round_details.remove(pos);
            stats.points = stats.points.saturating_sub(own.score);
            stats.played = stats.played.saturating_sub(1);
            if tied {
                stats.tied = stats.tied.saturating_sub(1);
            } else if won {
                stats.won = stats.won.saturating_sub(1);
            } else {
                stats.lost = stats.lost.saturating_sub(1);
            }
        }
    }

    new_stats
}

fn round_detail(game: &GameMatch, side: Team, player: &str, won: bool, tied: bool) -> RoundDetail {
    let own = game.team(side);
    let opp = game.team(side.other());
    RoundDetail {
        round: game.round,
        score: own.score,
        opponent_score: opp.score,
        won,
        tied,
        partner: own.partner_of(player).to_string(),
        opponents: [opp.player1.clone(), opp.player2.clone()],
    }
}

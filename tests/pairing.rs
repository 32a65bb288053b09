//! Integration tests for round pairing: courts, Americano rotation, Mexicano grouping.

use padel_tournament_web::{
    generate_americano_pairings, generate_mexicano_pairings, generate_pairings,
    generate_pairings_with_rng, get_current_standings, GameMatch, MatchStatus, PlayerName,
    PlayerStatsMap, RotationPattern, TournamentError, TournamentFormat,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn roster(n: usize) -> Vec<PlayerName> {
    (0..n).map(|i| format!("P{i}")).collect()
}

fn names(m: &GameMatch) -> [String; 4] {
    [
        m.team1.player1.clone(),
        m.team1.player2.clone(),
        m.team2.player1.clone(),
        m.team2.player2.clone(),
    ]
}

fn partner_pair(a: &str, b: &str) -> (String, String) {
    if a < b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

#[test]
fn courts_are_assigned_round_robin() {
    let players = roster(20); // 5 groups
    let stats = PlayerStatsMap::new();
    for format in [TournamentFormat::Americano, TournamentFormat::Mexicano] {
        let matches = generate_pairings(1, format, &players, 2, &stats).unwrap();
        let courts: Vec<usize> = matches.iter().map(|m| m.court).collect();
        assert_eq!(courts, vec![1, 2, 1, 2, 1]);
    }

    let matches = generate_americano_pairings(1, &roster(8), 5).unwrap();
    let courts: Vec<usize> = matches.iter().map(|m| m.court).collect();
    assert_eq!(courts, vec![1, 2]);
}

#[test]
fn zero_courts_is_invalid_configuration() {
    let players = roster(8);
    let stats = PlayerStatsMap::new();
    for format in [TournamentFormat::Americano, TournamentFormat::Mexicano] {
        assert!(matches!(
            generate_pairings(1, format, &players, 0, &stats),
            Err(TournamentError::InvalidConfiguration(_))
        ));
    }
}

#[test]
fn new_matches_are_waiting_with_batch_ids() {
    let players = roster(12);
    let matches =
        generate_pairings(3, TournamentFormat::Americano, &players, 3, &PlayerStatsMap::new())
            .unwrap();
    assert_eq!(matches.len(), 3);
    for (i, m) in matches.iter().enumerate() {
        assert_eq!(m.id as usize, i + 1);
        assert_eq!(m.round, 3);
        assert_eq!(m.status, MatchStatus::Waiting);
        assert_eq!(m.team1.score, 0);
        assert_eq!(m.team2.score, 0);
        assert!(m.finished_at.is_none());
    }
}

#[test]
fn leftover_players_sit_out_without_error() {
    let stats = PlayerStatsMap::new();
    let matches = generate_pairings(1, TournamentFormat::Americano, &roster(10), 2, &stats).unwrap();
    assert_eq!(matches.len(), 2);

    for format in [TournamentFormat::Americano, TournamentFormat::Mexicano] {
        for round in [1, 2] {
            let matches = generate_pairings(round, format, &roster(3), 1, &stats).unwrap();
            assert!(matches.is_empty());
        }
    }
    assert!(generate_pairings(1, TournamentFormat::Mexicano, &[], 1, &stats)
        .unwrap()
        .is_empty());
}

#[test]
fn americano_round_one_cross_pairs_each_group() {
    let players = roster(8);
    let matches = generate_americano_pairings(1, &players, 2).unwrap();
    assert_eq!(names(&matches[0]), ["P0", "P2", "P1", "P3"].map(String::from));
    assert_eq!(names(&matches[1]), ["P4", "P6", "P5", "P7"].map(String::from));
}

#[test]
fn americano_offset_grows_by_two_each_round() {
    let players = roster(8);
    let matches = generate_americano_pairings(2, &players, 2).unwrap();
    assert_eq!(names(&matches[0]), ["P2", "P4", "P3", "P5"].map(String::from));
    assert_eq!(names(&matches[1]), ["P6", "P0", "P7", "P1"].map(String::from));
}

#[test]
fn americano_offset_wraps_around_a_roster_not_divisible_by_four() {
    let players = roster(10);

    // Round 2: offset 2, so P0 and P1 sit out.
    let matches = generate_americano_pairings(2, &players, 2).unwrap();
    assert_eq!(matches.len(), 2);
    assert_eq!(names(&matches[0]), ["P2", "P4", "P3", "P5"].map(String::from));
    assert_eq!(names(&matches[1]), ["P6", "P8", "P7", "P9"].map(String::from));

    // Round 5: offset 8, the first group wraps past the end of the roster.
    let matches = generate_americano_pairings(5, &players, 2).unwrap();
    assert_eq!(names(&matches[0]), ["P8", "P0", "P9", "P1"].map(String::from));
    assert_eq!(names(&matches[1]), ["P2", "P4", "P3", "P5"].map(String::from));

    // Round 6: offset 10 is a full turn, same as round 1.
    assert_eq!(
        generate_americano_pairings(6, &players, 2).unwrap(),
        generate_americano_pairings(1, &players, 2)
            .unwrap()
            .into_iter()
            .map(|mut m| {
                m.round = 6;
                m
            })
            .collect::<Vec<_>>()
    );
}

#[test]
fn americano_is_deterministic() {
    let players = roster(12);
    for round in 1..=6 {
        let a = generate_americano_pairings(round, &players, 2).unwrap();
        let b = generate_americano_pairings(round, &players, 2).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn mexicano_round_one_partitions_the_roster() {
    let players = roster(10);
    let mut rng = StdRng::seed_from_u64(7);
    let matches = generate_mexicano_pairings(1, &players, 2, &PlayerStatsMap::new(), &mut rng)
        .unwrap();
    assert_eq!(matches.len(), 2);

    let seated: Vec<String> = matches.iter().flat_map(names).collect();
    let unique: HashSet<&String> = seated.iter().collect();
    assert_eq!(seated.len(), 8);
    assert_eq!(unique.len(), 8, "a player was seated twice");
    assert!(seated.iter().all(|p| players.contains(p)));
}

#[test]
fn mexicano_round_one_is_reproducible_with_seed() {
    let players = roster(16);
    let stats = PlayerStatsMap::new();
    let a = generate_pairings_with_rng(
        1,
        TournamentFormat::Mexicano,
        &players,
        4,
        &stats,
        &mut StdRng::seed_from_u64(42),
    )
    .unwrap();
    let b = generate_pairings_with_rng(
        1,
        TournamentFormat::Mexicano,
        &players,
        4,
        &stats,
        &mut StdRng::seed_from_u64(42),
    )
    .unwrap();
    assert_eq!(a, b);
}

#[test]
fn rotation_pattern_cycles_every_three_rounds() {
    assert_eq!(RotationPattern::for_round(1), RotationPattern::Adjacent);
    assert_eq!(RotationPattern::for_round(2), RotationPattern::Split);
    assert_eq!(RotationPattern::for_round(3), RotationPattern::Outside);
    assert_eq!(RotationPattern::for_round(4), RotationPattern::Adjacent);
}

#[test]
fn mexicano_later_rounds_group_by_rank() {
    let players = roster(8);
    let mut stats = PlayerStatsMap::for_roster(&players);
    // P7 leads, P0 trails.
    for (i, p) in players.iter().enumerate() {
        let s = stats.entry(p);
        s.points = (i as u32 + 1) * 5;
        s.played = 1;
    }

    let matches = generate_pairings(2, TournamentFormat::Mexicano, &players, 2, &stats).unwrap();
    assert_eq!(matches.len(), 2);
    // Split pattern: (p2, p0) vs (p1, p3).
    assert_eq!(names(&matches[0]), ["P5", "P7", "P6", "P4"].map(String::from));
    assert_eq!(names(&matches[1]), ["P1", "P3", "P2", "P0"].map(String::from));
}

#[test]
fn stable_group_partners_everyone_once_over_three_rounds() {
    let players = roster(4);
    let mut stats = PlayerStatsMap::for_roster(&players);
    for (p, points) in players.iter().zip([40, 30, 20, 10]) {
        stats.entry(p).points = points;
    }
    let ranked: Vec<String> = get_current_standings(&stats, &players)
        .into_iter()
        .map(|s| s.player)
        .collect();
    assert_eq!(ranked, players);

    let mut partners = HashSet::new();
    for round in 2..=4 {
        let matches =
            generate_pairings(round, TournamentFormat::Mexicano, &players, 1, &stats).unwrap();
        assert_eq!(matches.len(), 1);
        let m = &matches[0];
        assert!(partners.insert(partner_pair(&m.team1.player1, &m.team1.player2)));
        assert!(partners.insert(partner_pair(&m.team2.player1, &m.team2.player2)));
    }
    assert_eq!(partners.len(), 6);
}

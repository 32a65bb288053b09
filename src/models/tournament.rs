//! Tournament, TournamentSettings, and TournamentState.

use crate::models::game::{GameMatch, MatchId, MAX_SCORE};
use crate::models::player::{PlayerName, PlayerStatsMap};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Settings that make pairing impossible (e.g. zero courts).
    InvalidConfiguration(String),
    /// Tournament is not in a state that allows this action.
    InvalidState,
    /// Not enough players to start (need at least one full match).
    NotEnoughPlayersToStart { required: usize },
    /// A player with this name already exists (names are unique, case-insensitive).
    DuplicatePlayerName,
    /// Player names must not be blank.
    EmptyPlayerName,
    /// Player not found in the roster.
    PlayerNotFound(PlayerName),
    /// No match with this id.
    MatchNotFound(MatchId),
    /// The match is already finished; reset it first.
    MatchAlreadyFinished(MatchId),
    /// The match belongs to a round that has been closed.
    MatchNotInCurrentRound(MatchId),
    /// Finishing needs a score entered first.
    NoScoreEntered(MatchId),
    /// Score above the configured score limit (or above MAX_SCORE without one).
    ScoreOutOfRange { score: u32, limit: u32 },
    /// Not all matches of the current round are finished.
    IncompleteResults,
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
            TournamentError::InvalidState => write!(f, "Invalid state for this action"),
            TournamentError::NotEnoughPlayersToStart { required } => {
                write!(f, "Need at least {} players to start", required)
            }
            TournamentError::DuplicatePlayerName => write!(f, "A player with this name already exists"),
            TournamentError::EmptyPlayerName => write!(f, "Player name must not be empty"),
            TournamentError::PlayerNotFound(name) => write!(f, "Player not found: {}", name),
            TournamentError::MatchNotFound(id) => write!(f, "Match {} not found", id),
            TournamentError::MatchAlreadyFinished(id) => write!(f, "Match {} is already finished", id),
            TournamentError::MatchNotInCurrentRound(id) => {
                write!(f, "Match {} belongs to a closed round", id)
            }
            TournamentError::NoScoreEntered(id) => write!(f, "Match {} has no score yet", id),
            TournamentError::ScoreOutOfRange { score, limit } => {
                write!(f, "Score {} exceeds the score limit of {}", score, limit)
            }
            TournamentError::IncompleteResults => write!(f, "Not all matches of this round are finished"),
        }
    }
}

impl std::error::Error for TournamentError {}

/// How players are paired each round.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentFormat {
    /// Pairing driven by the current standings.
    #[default]
    Mexicano,
    /// Fixed index rotation, independent of results.
    Americano,
}

/// Current phase of the tournament.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentState {
    /// Adding players and choosing settings; not started.
    #[default]
    Setup,
    /// Rounds are being played.
    InProgress,
}

/// Tournament configuration chosen before the start.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentSettings {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub format: TournamentFormat,
    /// Total points per match. When set, entering one team's score fills in the other as
    /// `limit - score` and reaching the limit finishes the match.
    #[serde(default)]
    pub score_limit: Option<u32>,
    #[serde(default = "default_court_count")]
    pub court_count: usize,
}

fn default_court_count() -> usize {
    1
}

impl Default for TournamentSettings {
    fn default() -> Self {
        Self {
            name: String::new(),
            format: TournamentFormat::default(),
            score_limit: None,
            court_count: default_court_count(),
        }
    }
}

impl TournamentSettings {
    pub fn validate(&self) -> Result<(), TournamentError> {
        if self.court_count == 0 {
            return Err(TournamentError::InvalidConfiguration(
                "court count must be at least 1".to_string(),
            ));
        }
        if self.score_limit == Some(0) {
            return Err(TournamentError::InvalidConfiguration(
                "score limit must be positive".to_string(),
            ));
        }
        if self.score_limit.is_some_and(|limit| limit > MAX_SCORE) {
            return Err(TournamentError::InvalidConfiguration(format!(
                "score limit must be at most {}",
                MAX_SCORE
            )));
        }
        Ok(())
    }
}

/// Snapshot taken when a round is closed.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round: u32,
    pub matches: Vec<GameMatch>,
    pub player_stats: PlayerStatsMap,
}

/// Full tournament state: settings, roster, matches, stats, and history.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tournament {
    pub settings: TournamentSettings,
    pub state: TournamentState,
    /// Roster in registration order.
    pub players: Vec<PlayerName>,
    /// Round being played (1-based); 0 before the start.
    pub current_round: u32,
    /// Matches from every round, never pruned.
    pub matches: Vec<GameMatch>,
    pub player_stats: PlayerStatsMap,
    pub round_history: Vec<RoundResult>,
    /// Next id handed out to a generated match; ids stay unique across rounds.
    pub next_match_id: MatchId,
    pub created_at: DateTime<Utc>,
}

impl Tournament {
    /// Create a new tournament in Setup state with no players.
    pub fn new(settings: TournamentSettings) -> Result<Self, TournamentError> {
        settings.validate()?;
        Ok(Self {
            settings,
            state: TournamentState::Setup,
            players: Vec::new(),
            current_round: 0,
            matches: Vec::new(),
            player_stats: PlayerStatsMap::new(),
            round_history: Vec::new(),
            next_match_id: 1,
            created_at: Utc::now(),
        })
    }

    /// Create a tournament with initial players. Still in Setup until started.
    pub fn with_players<I, S>(settings: TournamentSettings, players: I) -> Result<Self, TournamentError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tournament = Self::new(settings)?;
        for name in players {
            tournament.add_player(name)?;
        }
        Ok(tournament)
    }

    /// Add a player (Setup only). Names are trimmed and must be unique (case-insensitive).
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<(), TournamentError> {
        if self.state != TournamentState::Setup {
            return Err(TournamentError::InvalidState);
        }
        let name = name.into();
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(TournamentError::EmptyPlayerName);
        }
        let is_duplicate = self
            .players
            .iter()
            .any(|p| p.eq_ignore_ascii_case(name_trimmed));
        if is_duplicate {
            return Err(TournamentError::DuplicatePlayerName);
        }
        self.players.push(name_trimmed.to_string());
        self.player_stats.entry(name_trimmed);
        Ok(())
    }

    /// Remove a player by name (Setup only).
    pub fn remove_player(&mut self, name: &str) -> Result<(), TournamentError> {
        if self.state != TournamentState::Setup {
            return Err(TournamentError::InvalidState);
        }
        let idx = self
            .players
            .iter()
            .position(|p| p == name)
            .ok_or_else(|| TournamentError::PlayerNotFound(name.to_string()))?;
        self.players.remove(idx);
        self.player_stats.remove(name);
        Ok(())
    }

    /// Replace the settings (Setup only).
    pub fn update_settings(&mut self, settings: TournamentSettings) -> Result<(), TournamentError> {
        if self.state != TournamentState::Setup {
            return Err(TournamentError::InvalidState);
        }
        settings.validate()?;
        self.settings = settings;
        Ok(())
    }

    pub fn get_match(&self, id: MatchId) -> Option<&GameMatch> {
        self.matches.iter().find(|m| m.id == id)
    }

    pub fn get_match_mut(&mut self, id: MatchId) -> Option<&mut GameMatch> {
        self.matches.iter_mut().find(|m| m.id == id)
    }

    /// Matches of the round currently being played.
    pub fn current_matches(&self) -> impl Iterator<Item = &GameMatch> {
        let round = self.current_round;
        self.matches.iter().filter(move |m| m.round == round)
    }

    /// Roster players not in any match of the current round.
    pub fn sitting_out(&self) -> Vec<&str> {
        self.players
            .iter()
            .filter(|p| !self.current_matches().any(|m| m.has_player(p)))
            .map(|p| p.as_str())
            .collect()
    }
}

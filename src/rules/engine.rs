//! Termination checks and winner resolution.

use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, PlayerMap};
use crate::players::Player;

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Equal scores, nobody knocked out.
    Tie,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Match rules: when a match ends and who wins it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchRules {
    /// The match ends at End once the turn counter reaches this value.
    pub turn_limit: u32,
}

impl MatchRules {
    /// Create rules with the given turn limit.
    #[must_use]
    pub const fn new(turn_limit: u32) -> Self {
        Self { turn_limit }
    }

    /// Whether the match is over: either player knocked out or the turn limit reached.
    #[must_use]
    pub fn is_terminal(&self, players: &PlayerMap<Player>, turn: u32) -> bool {
        players.iter().any(|(_, p)| p.is_knocked_out()) || turn >= self.turn_limit
    }

    /// Resolve the winner.
    ///
    /// Precedence:
    /// 1. A knocked-out player (health 0 or empty hand) loses, first seat checked first
    /// 2. Otherwise the higher score wins
    /// 3. Equal scores tie
    ///
    /// A knockout therefore beats any score difference.
    #[must_use]
    pub fn determine_winner(&self, players: &PlayerMap<Player>) -> GameResult {
        for (seat, player) in players.iter() {
            if player.is_knocked_out() {
                return GameResult::Winner(seat.opponent());
            }
        }

        let first = players[PlayerId::FIRST].score();
        let second = players[PlayerId::SECOND].score();
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::FIRST),
            std::cmp::Ordering::Less => GameResult::Winner(PlayerId::SECOND),
            std::cmp::Ordering::Equal => GameResult::Tie,
        }
    }
}

impl Default for MatchRules {
    fn default() -> Self {
        Self::new(20)
    }
}

/// End-of-match summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    /// Outcome.
    pub result: GameResult,
    /// Display names, in seat order.
    pub names: PlayerMap<String>,
    /// Final scores, in seat order.
    pub scores: PlayerMap<u32>,
    /// Turn counter when the match ended.
    pub turns: u32,
}

impl MatchReport {
    /// Build a report from the final player state.
    #[must_use]
    pub fn new(result: GameResult, players: &PlayerMap<Player>, turns: u32) -> Self {
        Self {
            result,
            names: players.map(|_, p| p.name().to_string()),
            scores: players.map(|_, p| p.score()),
            turns,
        }
    }

    /// Display name of the winner, if there is one.
    #[must_use]
    pub fn winner_name(&self) -> Option<&str> {
        match self.result {
            GameResult::Winner(seat) => Some(&self.names[seat]),
            GameResult::Tie => None,
        }
    }

    /// Human-readable result and final score.
    #[must_use]
    pub fn summary(&self) -> String {
        let headline = match self.winner_name() {
            Some(name) => format!("Game Over! {name} wins!"),
            None => "Game Over! It's a tie!".to_string(),
        };
        format!(
            "{headline}\nFinal Score: {}: {}, {}: {}",
            self.names[PlayerId::FIRST],
            self.scores[PlayerId::FIRST],
            self.names[PlayerId::SECOND],
            self.scores[PlayerId::SECOND],
        )
    }
}

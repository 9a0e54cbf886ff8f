//! Read-only views of a match for presentation layers.
//!
//! Snapshots are plain serde data: no effects, no references back into
//! the engine.

use serde::{Deserialize, Serialize};

use crate::cards::CardView;
use crate::core::{Phase, PlayerId, PlayerMap};
use crate::players::{Equipment, Player};
use crate::rules::GameResult;

/// A resolved play, as reported to collaborators.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayView {
    /// Seat that played.
    pub player: PlayerId,
    /// The card played.
    pub card: CardView,
    /// Resolution message.
    pub message: String,
}

/// One player's visible state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub health: u32,
    pub max_health: u32,
    pub mana: u32,
    pub max_mana: u32,
    pub armor: u32,
    pub equipment: Equipment,
    pub total_bonus: i32,
    pub hand: Vec<CardView>,
    pub score: u32,
}

impl From<&Player> for PlayerSnapshot {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name().to_string(),
            health: player.health(),
            max_health: player.max_health(),
            mana: player.mana(),
            max_mana: player.max_mana(),
            armor: player.armor(),
            equipment: player.equipment().clone(),
            total_bonus: player.total_bonus(),
            hand: player.hand().iter().map(|c| c.view()).collect(),
            score: player.score(),
        }
    }
}

/// Everything a presentation layer reads after a state change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub active_player: PlayerId,
    pub turn: u32,
    pub deck_count: usize,
    pub discard_count: usize,
    pub last_play: Option<PlayView>,
    pub players: PlayerMap<PlayerSnapshot>,
    /// Set once the match is over.
    pub result: Option<GameResult>,
}

impl GameSnapshot {
    /// The active player's view.
    #[must_use]
    pub fn active(&self) -> &PlayerSnapshot {
        &self.players[self.active_player]
    }
}

//! Error types for moves and match configuration.
//!
//! Nothing here is fatal: a rejected move leaves the match untouched and
//! the caller may re-read state and try again.

use thiserror::Error;

use crate::core::{Phase, PlayerId};

/// Why a `play_card` call was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PlayError {
    /// The match has already reached `GameOver`.
    #[error("the match is over")]
    GameOver,

    /// The caller is not the active player.
    #[error("not your turn: {player} tried to play while {active} is active")]
    NotYourTurn {
        /// Seat that attempted the play.
        player: PlayerId,
        /// Seat whose turn it is.
        active: PlayerId,
    },

    /// Cards can only be played during the Play phase.
    #[error("cards cannot be played during the {0} phase")]
    WrongPhase(Phase),

    /// Hand index outside `0..hand_len`.
    #[error("invalid hand index {index} (hand holds {hand_len} cards)")]
    InvalidIndex {
        /// Requested index.
        index: usize,
        /// Size of the hand at the time of the call.
        hand_len: usize,
    },
}

/// Invalid `MatchConfig` values.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A maximum resource value was zero.
    #[error("{resource} maximum must be positive")]
    ZeroMaximum {
        /// "health" or "mana".
        resource: &'static str,
    },

    /// A starting value exceeds its maximum.
    #[error("starting {resource} {start} exceeds maximum {max}")]
    StartAboveMax {
        /// "health" or "mana".
        resource: &'static str,
        /// Configured starting value.
        start: u32,
        /// Configured maximum.
        max: u32,
    },

    /// A match needs at least one turn.
    #[error("turn limit must be positive")]
    ZeroTurnLimit,

    /// Opening hands need more cards than the deck holds.
    #[error("opening hands need {needed} cards but the deck holds {available}")]
    DeckTooSmall {
        /// Cards needed to deal both opening hands.
        needed: usize,
        /// Cards in the starting deck.
        available: usize,
    },
}

/// Failure to start a threaded match.
#[derive(Debug, Error)]
pub enum StartError {
    /// The configuration was rejected.
    #[error("invalid match configuration: {0}")]
    Config(#[from] ConfigError),

    /// The engine thread could not be spawned.
    #[error("failed to spawn engine thread: {0}")]
    Spawn(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_error_messages() {
        let err = PlayError::NotYourTurn {
            player: PlayerId::SECOND,
            active: PlayerId::FIRST,
        };
        assert_eq!(
            err.to_string(),
            "not your turn: Player 2 tried to play while Player 1 is active"
        );

        let err = PlayError::InvalidIndex { index: 7, hand_len: 3 };
        assert_eq!(err.to_string(), "invalid hand index 7 (hand holds 3 cards)");

        assert_eq!(
            PlayError::WrongPhase(Phase::Draw).to_string(),
            "cards cannot be played during the Draw phase"
        );
    }

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::StartAboveMax {
            resource: "health",
            start: 120,
            max: 100,
        };
        assert_eq!(err.to_string(), "starting health 120 exceeds maximum 100");

        let start: StartError = ConfigError::ZeroTurnLimit.into();
        assert_eq!(
            start.to_string(),
            "invalid match configuration: turn limit must be positive"
        );
    }
}

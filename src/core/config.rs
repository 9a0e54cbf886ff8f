//! Match configuration.
//!
//! A `MatchConfig` fixes everything a match needs at startup:
//! - Player names and who controls each seat
//! - Resource maxima and starting values
//! - Opening hand size and turn limit
//! - RNG seed (or OS entropy)
//!
//! Configs are plain serde data, so hosts can load them from JSON or any
//! other serde format.

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PlayerMap};
use crate::error::ConfigError;

/// Who chooses a seat's moves during the Play phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Controller {
    /// Moves arrive from outside; the engine waits for an end-of-turn signal.
    #[default]
    Human,
    /// The engine picks a move itself and ends the turn without waiting.
    Automated,
}

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Display names, in seat order.
    pub names: PlayerMap<String>,

    /// Controller for each seat.
    pub controllers: PlayerMap<Controller>,

    /// Health cap (default: 100).
    pub max_health: u32,

    /// Health at match start (default: `max_health`).
    pub starting_health: u32,

    /// Mana cap (default: 10).
    pub max_mana: u32,

    /// Mana at match start (default: `max_mana`).
    pub starting_mana: u32,

    /// Cards dealt to each player before the first turn (default: 5).
    pub opening_hand_size: usize,

    /// The match ends once the turn counter reaches this value (default: 20).
    pub turn_limit: u32,

    /// RNG seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,

    /// Pause after an automated play, in milliseconds (default: 0).
    /// Only the threaded session honours it.
    pub automated_delay_ms: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            names: PlayerMap::new(|p| p.to_string()),
            controllers: PlayerMap::from_pair(Controller::Human, Controller::Automated),
            max_health: 100,
            starting_health: 100,
            max_mana: 10,
            starting_mana: 10,
            opening_hand_size: 5,
            turn_limit: 20,
            seed: None,
            automated_delay_ms: 0,
        }
    }
}

impl MatchConfig {
    /// Set a fixed RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set a seat's display name.
    #[must_use]
    pub fn with_name(mut self, player: PlayerId, name: impl Into<String>) -> Self {
        self.names[player] = name.into();
        self
    }

    /// Set a seat's controller.
    #[must_use]
    pub fn with_controller(mut self, player: PlayerId, controller: Controller) -> Self {
        self.controllers[player] = controller;
        self
    }

    /// Make both seats automated.
    #[must_use]
    pub fn all_automated(mut self) -> Self {
        self.controllers = PlayerMap::with_value(Controller::Automated);
        self
    }

    /// Set the health cap and starting health together.
    #[must_use]
    pub fn with_health(mut self, health: u32) -> Self {
        self.max_health = health;
        self.starting_health = health;
        self
    }

    /// Set the mana cap and starting mana together.
    #[must_use]
    pub fn with_mana(mut self, mana: u32) -> Self {
        self.max_mana = mana;
        self.starting_mana = mana;
        self
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn with_opening_hand_size(mut self, size: usize) -> Self {
        self.opening_hand_size = size;
        self
    }

    /// Set the turn limit.
    #[must_use]
    pub fn with_turn_limit(mut self, limit: u32) -> Self {
        self.turn_limit = limit;
        self
    }

    /// Set the pause after automated plays.
    #[must_use]
    pub fn with_automated_delay_ms(mut self, delay: u64) -> Self {
        self.automated_delay_ms = delay;
        self
    }

    /// Check the configuration for values a match cannot start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_health == 0 {
            return Err(ConfigError::ZeroMaximum { resource: "health" });
        }
        if self.max_mana == 0 {
            return Err(ConfigError::ZeroMaximum { resource: "mana" });
        }
        if self.starting_health > self.max_health {
            return Err(ConfigError::StartAboveMax {
                resource: "health",
                start: self.starting_health,
                max: self.max_health,
            });
        }
        if self.starting_mana > self.max_mana {
            return Err(ConfigError::StartAboveMax {
                resource: "mana",
                start: self.starting_mana,
                max: self.max_mana,
            });
        }
        if self.turn_limit == 0 {
            return Err(ConfigError::ZeroTurnLimit);
        }
        Ok(())
    }

    /// Whether a seat is engine-controlled.
    #[must_use]
    pub fn is_automated(&self, player: PlayerId) -> bool {
        self.controllers[player] == Controller::Automated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MatchConfig::default();
        assert_eq!(config.names[PlayerId::FIRST], "Player 1");
        assert_eq!(config.names[PlayerId::SECOND], "Player 2");
        assert_eq!(config.controllers[PlayerId::FIRST], Controller::Human);
        assert!(config.is_automated(PlayerId::SECOND));
        assert_eq!(config.max_health, 100);
        assert_eq!(config.max_mana, 10);
        assert_eq!(config.opening_hand_size, 5);
        assert_eq!(config.turn_limit, 20);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = MatchConfig::default()
            .with_seed(123)
            .with_name(PlayerId::FIRST, "Alice")
            .with_health(30)
            .with_turn_limit(4)
            .all_automated();

        assert_eq!(config.seed, Some(123));
        assert_eq!(config.names[PlayerId::FIRST], "Alice");
        assert_eq!(config.starting_health, 30);
        assert_eq!(config.turn_limit, 4);
        assert!(config.is_automated(PlayerId::FIRST));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = MatchConfig::default();
        config.starting_health = 150;
        assert_eq!(
            config.validate(),
            Err(ConfigError::StartAboveMax {
                resource: "health",
                start: 150,
                max: 100
            })
        );

        assert_eq!(
            MatchConfig::default().with_mana(0).validate(),
            Err(ConfigError::ZeroMaximum { resource: "mana" })
        );
        assert_eq!(
            MatchConfig::default().with_turn_limit(0).validate(),
            Err(ConfigError::ZeroTurnLimit)
        );
    }

    #[test]
    fn test_serialization() {
        let config = MatchConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: MatchConfig = serde_json::from_str(r#"{"turn_limit": 6}"#).unwrap();
        assert_eq!(config.turn_limit, 6);
        assert_eq!(config.max_health, 100);
        assert_eq!(config.controllers[PlayerId::SECOND], Controller::Automated);
    }
}

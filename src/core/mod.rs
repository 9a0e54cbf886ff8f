//! Core engine types: seats, phases, RNG, configuration.
//!
//! These are the building blocks every other module depends on.

pub mod config;
pub mod phase;
pub mod player;
pub mod rng;

pub use config::{Controller, MatchConfig};
pub use phase::Phase;
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::GameRng;

//! # card-duel
//!
//! A two-player turn-based card battle engine.
//!
//! Players draw from a shared deck, play cards whose effects change their
//! health, mana and armor, and accumulate score until one of them is
//! knocked out or the turn limit is reached.
//!
//! ## Design
//!
//! 1. **Phase Machine**: Every turn runs `Draw -> Play -> End`; `End`
//!    either passes the turn or enters the absorbing `GameOver` state.
//!
//! 2. **Single Writer**: Only the engine loop advances phases. Human moves
//!    and end-of-turn signals are serialized through the same lock.
//!
//! 3. **Closed Effects**: A card effect is a closure over a concrete
//!    `Player`; it touches resources only, never hands or piles.
//!
//! ## Modules
//!
//! - `core`: Seats, phases, RNG, configuration
//! - `cards`: Card values and the catalog
//! - `players`: Player resources and equipment
//! - `zones`: Draw pile and discard pile
//! - `rules`: Termination and winner resolution
//! - `policy`: Move selection for automated seats
//! - `game`: The phase machine and the threaded match handle
//!
//! ## Example
//!
//! ```
//! use card_duel::core::MatchConfig;
//! use card_duel::game::{Game, Step};
//!
//! let mut game = Game::new(MatchConfig::default().with_seed(7).all_automated()).unwrap();
//! let Step::Finished(result) = game.run_until_blocked() else { unreachable!() };
//! println!("{}", game.report().unwrap().summary());
//! # let _ = result;
//! ```

pub mod cards;
pub mod core;
pub mod error;
pub mod game;
pub mod players;
pub mod policy;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{Controller, GameRng, MatchConfig, Phase, PlayerId, PlayerMap};

pub use crate::cards::{Card, CardCatalog, CardKind, CardView};

pub use crate::players::{EquipSlot, Item, Player};

pub use crate::zones::DeckManager;

pub use crate::rules::{GameResult, MatchReport, MatchRules};

pub use crate::policy::{OpponentPolicy, UniformOpponent};

pub use crate::game::{Game, GameSnapshot, MatchHandle, PlayOutcome, StateChange, Step};

pub use crate::error::{ConfigError, PlayError, StartError};

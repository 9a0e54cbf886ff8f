//! Automated play policies.
//!
//! - `OpponentPolicy`: How an automated seat picks a card
//! - `UniformOpponent`: Uniform random over the hand

pub mod opponent;

pub use opponent::{OpponentPolicy, UniformOpponent};

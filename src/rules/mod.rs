//! Match rules: termination and winner resolution.
//!
//! - `MatchRules::is_terminal`: knockout or turn limit
//! - `MatchRules::determine_winner`: knockout, then score, then tie
//! - `MatchReport`: final scores and a printable summary

pub mod engine;

pub use engine::{GameResult, MatchReport, MatchRules};

//! Card piles outside of hands.
//!
//! ## Key Types
//!
//! - `DeckManager`: Shared draw pile and discard pile with reshuffle-on-empty

pub mod manager;

pub use manager::DeckManager;

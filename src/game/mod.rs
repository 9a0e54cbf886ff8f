//! The match engine.
//!
//! ## Key Types
//!
//! - `Game`: Single-threaded phase machine (Draw -> Play -> End -> ...)
//! - `PlayOutcome`: A resolved play
//! - `MatchHandle`: Runs a `Game` on an engine thread with the human
//!   end-of-turn handoff
//! - `StateChange`: Notifier payload
//! - `GameSnapshot`: Serializable read-only view

pub mod session;
pub mod snapshot;
pub mod state;

pub use session::{MatchHandle, StateChange, StateChangeNotifier};
pub use snapshot::{GameSnapshot, PlayView, PlayerSnapshot};
pub use state::{Game, PlayOutcome, Step};

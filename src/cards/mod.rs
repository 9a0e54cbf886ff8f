//! Card system: definitions and the catalog.
//!
//! ## Key Types
//!
//! - `Card`: Immutable card value (name, kind, power, description, effect)
//! - `CardKind`: Unit, Spell or Item
//! - `CardEffect`: Shared closure applied to the playing `Player`
//! - `CardView`: Serializable card data without the effect
//! - `CardCatalog`: Ordered card collection; `standard()` is process-wide

pub mod definition;
pub mod registry;

pub use definition::{Card, CardEffect, CardKind, CardView};
pub use registry::CardCatalog;

//! Player state: resources, equipment and hand.
//!
//! ## Key Types
//!
//! - `Player`: Health, mana, armor, score, hand and equipment
//! - `Item`: Equipment with a bonus value
//! - `EquipSlot`: Ring, Necklace or Weapon
//! - `Equipment`: One optional item per slot

pub mod equipment;
pub mod player;

pub use equipment::{EquipSlot, Equipment, Item, UnknownSlot};
pub use player::Player;

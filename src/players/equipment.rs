//! Equipment slots and items.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardKind};

/// A piece of equipment.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Display name.
    pub name: String,
    /// Display text.
    pub description: String,
    /// Contribution to `Player::total_bonus`.
    pub bonus: i32,
}

impl Item {
    /// Create a new item.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>, bonus: i32) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            bonus,
        }
    }

    /// Build an item from an Item card; its power becomes the bonus.
    ///
    /// Returns `None` for units and spells.
    #[must_use]
    pub fn from_card(card: &Card) -> Option<Self> {
        if card.kind() != CardKind::Item {
            return None;
        }
        let bonus = i32::try_from(card.power()).unwrap_or(i32::MAX);
        Some(Self::new(card.name(), card.description(), bonus))
    }
}

/// The three equipment slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipSlot {
    Ring,
    Necklace,
    Weapon,
}

impl EquipSlot {
    /// All slots in display order.
    pub const ALL: [EquipSlot; 3] = [EquipSlot::Ring, EquipSlot::Necklace, EquipSlot::Weapon];
}

impl std::fmt::Display for EquipSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EquipSlot::Ring => "Ring",
            EquipSlot::Necklace => "Necklace",
            EquipSlot::Weapon => "Weapon",
        };
        f.write_str(name)
    }
}

impl std::str::FromStr for EquipSlot {
    type Err = UnknownSlot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ring" => Ok(EquipSlot::Ring),
            "necklace" => Ok(EquipSlot::Necklace),
            "weapon" => Ok(EquipSlot::Weapon),
            _ => Err(UnknownSlot(s.to_string())),
        }
    }
}

/// Slot name that is not ring, necklace or weapon.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown equipment slot: {0}")]
pub struct UnknownSlot(pub String);

/// One optional item per slot. Each item is owned by its slot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    ring: Option<Item>,
    necklace: Option<Item>,
    weapon: Option<Item>,
}

impl Equipment {
    fn slot_mut(&mut self, slot: EquipSlot) -> &mut Option<Item> {
        match slot {
            EquipSlot::Ring => &mut self.ring,
            EquipSlot::Necklace => &mut self.necklace,
            EquipSlot::Weapon => &mut self.weapon,
        }
    }

    /// The item in `slot`, if any.
    #[must_use]
    pub fn get(&self, slot: EquipSlot) -> Option<&Item> {
        match slot {
            EquipSlot::Ring => self.ring.as_ref(),
            EquipSlot::Necklace => self.necklace.as_ref(),
            EquipSlot::Weapon => self.weapon.as_ref(),
        }
    }

    /// Put `item` into `slot`, returning whatever was there.
    pub fn equip(&mut self, item: Item, slot: EquipSlot) -> Option<Item> {
        self.slot_mut(slot).replace(item)
    }

    /// Empty `slot`, returning its previous occupant.
    pub fn unequip(&mut self, slot: EquipSlot) -> Option<Item> {
        self.slot_mut(slot).take()
    }

    /// Sum of bonuses over occupied slots.
    #[must_use]
    pub fn total_bonus(&self) -> i32 {
        EquipSlot::ALL
            .iter()
            .filter_map(|&slot| self.get(slot))
            .map(|item| item.bonus)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equip_and_replace() {
        let mut gear = Equipment::default();
        assert_eq!(gear.equip(Item::new("Copper Ring", "", 1), EquipSlot::Ring), None);

        let previous = gear.equip(Item::new("Gold Ring", "", 3), EquipSlot::Ring);
        assert_eq!(previous.map(|i| i.name), Some("Copper Ring".to_string()));
        assert_eq!(gear.get(EquipSlot::Ring).unwrap().name, "Gold Ring");
    }

    #[test]
    fn test_unequip_empty_slot() {
        let mut gear = Equipment::default();
        assert_eq!(gear.unequip(EquipSlot::Weapon), None);
    }

    #[test]
    fn test_total_bonus() {
        let mut gear = Equipment::default();
        assert_eq!(gear.total_bonus(), 0);

        gear.equip(Item::new("Ring", "", 2), EquipSlot::Ring);
        gear.equip(Item::new("Sword", "", 5), EquipSlot::Weapon);
        assert_eq!(gear.total_bonus(), 7);

        gear.unequip(EquipSlot::Ring);
        assert_eq!(gear.total_bonus(), 5);
    }

    #[test]
    fn test_slot_parsing() {
        assert_eq!("ring".parse::<EquipSlot>(), Ok(EquipSlot::Ring));
        assert_eq!("Weapon".parse::<EquipSlot>(), Ok(EquipSlot::Weapon));
        assert_eq!(
            "boots".parse::<EquipSlot>(),
            Err(UnknownSlot("boots".to_string()))
        );
    }

    #[test]
    fn test_item_from_card() {
        let catalog = crate::cards::CardCatalog::standard();
        let shield = Item::from_card(catalog.get("Shield").unwrap()).unwrap();
        assert_eq!(shield.bonus, 1);
        assert!(Item::from_card(catalog.get("Knight").unwrap()).is_none());
    }
}

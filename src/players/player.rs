//! Per-player resources and the mutations card effects invoke.
//!
//! ## Clamping
//!
//! Every mutation keeps the resources in range:
//! - health in `0..=max_health`
//! - mana in `0..=max_mana`
//! - armor `>= 0` (no upper bound)
//!
//! Scores only ever grow within a match.

use im::Vector;

use super::equipment::{EquipSlot, Equipment, Item};
use crate::cards::Card;

/// One side of the table.
///
/// The hand is an `im::Vector` so snapshots clone in O(1).
#[derive(Clone, Debug)]
pub struct Player {
    name: String,
    hand: Vector<Card>,
    score: u32,
    health: u32,
    max_health: u32,
    mana: u32,
    max_mana: u32,
    armor: u32,
    equipment: Equipment,
}

impl Player {
    /// Create a player at full health and mana with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>, max_health: u32, max_mana: u32) -> Self {
        Self {
            name: name.into(),
            hand: Vector::new(),
            score: 0,
            health: max_health,
            max_health,
            mana: max_mana,
            max_mana,
            armor: 0,
            equipment: Equipment::default(),
        }
    }

    /// Override the starting health and mana (clamped to the maxima).
    #[must_use]
    pub fn with_starting(mut self, health: u32, mana: u32) -> Self {
        self.health = health.min(self.max_health);
        self.mana = mana.min(self.max_mana);
        self
    }

    // === Accessors ===

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cards in hand, in draw order.
    #[must_use]
    pub fn hand(&self) -> &Vector<Card> {
        &self.hand
    }

    /// Accumulated score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn health(&self) -> u32 {
        self.health
    }

    #[must_use]
    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    #[must_use]
    pub fn mana(&self) -> u32 {
        self.mana
    }

    #[must_use]
    pub fn max_mana(&self) -> u32 {
        self.max_mana
    }

    #[must_use]
    pub fn armor(&self) -> u32 {
        self.armor
    }

    /// Equipped items.
    #[must_use]
    pub fn equipment(&self) -> &Equipment {
        &self.equipment
    }

    /// Health at zero or an empty hand: the player has lost.
    #[must_use]
    pub fn is_knocked_out(&self) -> bool {
        self.health == 0 || self.hand.is_empty()
    }

    // === Resource mutations ===

    /// Armor absorbs damage first; the remainder comes off health, floored at 0.
    pub fn take_damage(&mut self, amount: u32) {
        if amount <= self.armor {
            self.armor -= amount;
        } else {
            let remaining = amount - self.armor;
            self.armor = 0;
            self.health = self.health.saturating_sub(remaining);
        }
    }

    /// Restore health, capped at the maximum.
    pub fn heal(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount).min(self.max_health);
    }

    /// Add armor. Negative amounts strip armor, floored at 0.
    pub fn add_armor(&mut self, amount: i32) {
        let armor = i64::from(self.armor) + i64::from(amount);
        self.armor = u32::try_from(armor.max(0)).unwrap_or(u32::MAX);
    }

    /// Spend mana if enough is available.
    ///
    /// Returns `false` and leaves mana unchanged when it is not.
    pub fn use_mana(&mut self, amount: u32) -> bool {
        if self.mana >= amount {
            self.mana -= amount;
            true
        } else {
            false
        }
    }

    /// Restore mana, capped at the maximum.
    pub fn restore_mana(&mut self, amount: u32) {
        self.mana = self.mana.saturating_add(amount).min(self.max_mana);
    }

    /// Add points to the score.
    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    // === Equipment ===

    /// Equip `item`, returning the item it displaced (if any).
    pub fn equip(&mut self, item: Item, slot: EquipSlot) -> Option<Item> {
        self.equipment.equip(item, slot)
    }

    /// Empty `slot`, returning its previous occupant.
    pub fn unequip(&mut self, slot: EquipSlot) -> Option<Item> {
        self.equipment.unequip(slot)
    }

    /// Sum of equipped item bonuses.
    #[must_use]
    pub fn total_bonus(&self) -> i32 {
        self.equipment.total_bonus()
    }

    // === Hand (engine only) ===

    pub(crate) fn push_card(&mut self, card: Card) {
        self.hand.push_back(card);
    }

    pub(crate) fn take_card(&mut self, index: usize) -> Option<Card> {
        (index < self.hand.len()).then(|| self.hand.remove(index))
    }
}

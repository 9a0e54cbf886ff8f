//! Card definitions - immutable card values.
//!
//! A `Card` carries its name, kind, power, description and an optional
//! effect. Effects are closures over a concrete `Player`: they may only
//! touch the target's health, mana and armor, never hands or piles.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::players::Player;

/// The three families of cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Plain units; power only.
    Unit,
    /// One-shot spells; power 0.
    Spell,
    /// Items; power doubles as their equipment bonus.
    Item,
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CardKind::Unit => "Unit",
            CardKind::Spell => "Spell",
            CardKind::Item => "Item",
        };
        f.write_str(name)
    }
}

/// A card effect, applied to the player who plays the card.
///
/// Shared behind an `Arc` so cards stay cheap to clone between zones.
#[derive(Clone)]
pub struct CardEffect(Arc<dyn Fn(&mut Player) + Send + Sync>);

impl CardEffect {
    /// Wrap a closure as an effect.
    pub fn new(f: impl Fn(&mut Player) + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Apply the effect to `target`.
    pub fn apply(&self, target: &mut Player) {
        (self.0)(target);
    }
}

impl fmt::Debug for CardEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CardEffect(..)")
    }
}

/// An immutable playable card.
///
/// ## Example
///
/// ```
/// use card_duel::cards::{Card, CardKind};
///
/// let knight = Card::unit("Knight", 3);
/// assert_eq!(knight.kind(), CardKind::Unit);
/// assert_eq!(knight.power(), 3);
/// assert!(!knight.has_effect());
/// ```
#[derive(Clone, Debug)]
pub struct Card {
    name: String,
    kind: CardKind,
    power: u32,
    description: String,
    effect: Option<CardEffect>,
}

impl Card {
    /// Create a unit card with no effect.
    #[must_use]
    pub fn unit(name: impl Into<String>, power: u32) -> Self {
        Self {
            name: name.into(),
            kind: CardKind::Unit,
            power,
            description: format!("A basic unit with {power} power."),
            effect: None,
        }
    }

    /// Create a spell card. Spells have no power.
    #[must_use]
    pub fn spell(
        name: impl Into<String>,
        description: impl Into<String>,
        effect: impl Fn(&mut Player) + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            kind: CardKind::Spell,
            power: 0,
            description: description.into(),
            effect: Some(CardEffect::new(effect)),
        }
    }

    /// Create an item card.
    #[must_use]
    pub fn item(
        name: impl Into<String>,
        power: u32,
        description: impl Into<String>,
        effect: impl Fn(&mut Player) + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            kind: CardKind::Item,
            power,
            description: description.into(),
            effect: Some(CardEffect::new(effect)),
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Card family.
    #[must_use]
    pub fn kind(&self) -> CardKind {
        self.kind
    }

    /// Power (0 for spells).
    #[must_use]
    pub fn power(&self) -> u32 {
        self.power
    }

    /// Display text.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether playing this card does anything beyond moving it.
    #[must_use]
    pub fn has_effect(&self) -> bool {
        self.effect.is_some()
    }

    /// Apply this card's effect to `target`. Cards without an effect do nothing.
    pub fn play(&self, target: &mut Player) {
        if let Some(effect) = &self.effect {
            effect.apply(target);
        }
    }

    /// Multi-line summary: name and power, kind, description.
    #[must_use]
    pub fn info(&self) -> String {
        format!(
            "{} (Power: {})\nType: {}\n{}",
            self.name, self.power, self.kind, self.description
        )
    }

    /// A serializable view of this card without its effect.
    #[must_use]
    pub fn view(&self) -> CardView {
        CardView {
            name: self.name.clone(),
            kind: self.kind,
            power: self.power,
            description: self.description.clone(),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Power: {})", self.name, self.power)
    }
}

/// Plain-data view of a card for snapshots and reports.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardView {
    /// Display name.
    pub name: String,
    /// Card family.
    pub kind: CardKind,
    /// Power.
    pub power: u32,
    /// Display text.
    pub description: String,
}

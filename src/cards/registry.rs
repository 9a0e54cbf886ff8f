//! Card catalog - the fixed set of cards a deck is built from.
//!
//! The `CardCatalog` stores cards in registration order and provides
//! lookup by name. `CardCatalog::standard()` is the process-wide
//! read-only catalog, built once on first use.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use super::definition::{Card, CardKind};

/// Ordered collection of card definitions.
///
/// ## Example
///
/// ```
/// use card_duel::cards::{Card, CardCatalog};
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(Card::unit("Soldier", 1));
/// catalog.register(Card::spell("Heal", "Restore 3 health", |p| p.heal(3)));
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.get("Soldier").unwrap().power(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: Vec<Card>,
    /// Name -> index of the first card registered under that name.
    by_name: FxHashMap<String, usize>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard catalog: ten units of power 1..=10 plus Fireball, Heal and Shield.
    #[must_use]
    pub fn standard() -> &'static CardCatalog {
        static STANDARD: OnceLock<CardCatalog> = OnceLock::new();
        STANDARD.get_or_init(Self::build_standard)
    }

    fn build_standard() -> Self {
        let mut catalog = Self::new();

        let units = [
            "Soldier", "Archer", "Knight", "Mage", "Dragon", "Hero", "Commander", "Wizard",
            "Titan", "Legend",
        ];
        for (power, name) in (1..).zip(units) {
            catalog.register(Card::unit(name, power));
        }

        catalog.register(Card::spell("Fireball", "Deal 3 damage to the opponent", |p| {
            p.take_damage(3);
        }));
        catalog.register(Card::spell("Heal", "Restore 3 health", |p| p.heal(3)));
        catalog.register(Card::item("Shield", 1, "Increase armor by 2", |p| p.add_armor(2)));

        catalog
    }

    /// Register a card.
    ///
    /// Names are display labels and are not required to be unique;
    /// `get` returns the first card registered under a name.
    pub fn register(&mut self, card: Card) {
        self.by_name
            .entry(card.name().to_string())
            .or_insert(self.cards.len());
        self.cards.push(card);
    }

    /// Look up a card by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Card> {
        self.by_name.get(name).map(|&idx| &self.cards[idx])
    }

    /// Check if a card name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over cards in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Find cards of one kind.
    pub fn find_by_kind(&self, kind: CardKind) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |c| c.kind() == kind)
    }

    /// One copy of every card, in registration order.
    #[must_use]
    pub fn deck(&self) -> Vec<Card> {
        self.cards.clone()
    }
}

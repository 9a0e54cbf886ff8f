//! Shared draw pile and discard pile.
//!
//! The `DeckManager` owns the two piles cards move through outside of
//! hands. It supports:
//! - Drawing from the front of the deck, reshuffling the discard pile
//!   in when the deck runs dry
//! - Discarding played cards
//! - Uniform reshuffles (every permutation equally likely)
//!
//! Cards dealt into hands plus the two piles always add up to the number
//! of cards the manager started with.

use im::Vector;
use tracing::debug;

use crate::cards::Card;
use crate::core::rng::GameRng;
use crate::players::Player;

/// Draw pile and discard pile.
///
/// ## Usage
///
/// ```
/// use card_duel::cards::Card;
/// use card_duel::core::GameRng;
/// use card_duel::players::Player;
/// use card_duel::zones::DeckManager;
///
/// let mut piles = DeckManager::new(vec![Card::unit("Soldier", 1), Card::unit("Archer", 2)]);
/// let mut rng = GameRng::new(42);
/// let mut player = Player::new("P1", 100, 10);
///
/// assert!(piles.draw(&mut player, &mut rng));
/// assert_eq!(player.hand()[0].name(), "Soldier");
/// assert_eq!(piles.deck_len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DeckManager {
    /// Front is the next card drawn.
    deck: Vector<Card>,
    /// Most recently discarded card last.
    discard: Vector<Card>,
}

impl DeckManager {
    /// Create a manager whose deck holds `cards` in the given order.
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            deck: cards.into_iter().collect(),
            discard: Vector::new(),
        }
    }

    /// Remove the next card, reshuffling the discard pile in if the deck is empty.
    ///
    /// Returns `None` when both piles are empty.
    pub fn draw_card(&mut self, rng: &mut GameRng) -> Option<Card> {
        if self.deck.is_empty() {
            self.reshuffle_discard_into_deck(rng);
        }
        self.deck.pop_front()
    }

    /// Draw the next card into `player`'s hand.
    ///
    /// Returns `false` (and leaves the hand untouched) when nothing is left to draw.
    pub fn draw(&mut self, player: &mut Player, rng: &mut GameRng) -> bool {
        match self.draw_card(rng) {
            Some(card) => {
                debug!(player = player.name(), card = card.name(), "draw");
                player.push_card(card);
                true
            }
            None => {
                debug!(player = player.name(), "draw skipped: deck and discard empty");
                false
            }
        }
    }

    /// Put a card on the discard pile.
    pub fn discard(&mut self, card: Card) {
        self.discard.push_back(card);
    }

    /// Move the discard pile under the deck and shuffle the combined deck.
    pub fn reshuffle_discard_into_deck(&mut self, rng: &mut GameRng) {
        let returned = self.discard.len();
        self.deck.append(std::mem::take(&mut self.discard));
        self.shuffle_deck(rng);
        debug!(returned, deck = self.deck.len(), "reshuffled discard into deck");
    }

    fn shuffle_deck(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<Card> = self.deck.iter().cloned().collect();
        rng.shuffle(&mut cards);
        self.deck = cards.into_iter().collect();
    }

    /// Cards left to draw.
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// Cards in the discard pile.
    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discard.len()
    }

    /// Total cards across both piles.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.deck.len() + self.discard.len()
    }

    /// The draw pile, front first.
    #[must_use]
    pub fn deck(&self) -> &Vector<Card> {
        &self.deck
    }

    /// The discard pile, oldest first.
    #[must_use]
    pub fn discard_pile(&self) -> &Vector<Card> {
        &self.discard
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rustc_hash::FxHashSet;

    fn units(n: u32) -> Vec<Card> {
        (1..=n).map(|i| Card::unit(format!("U{i}"), i)).collect()
    }

    fn sorted_powers<'a>(cards: impl Iterator<Item = &'a Card>) -> Vec<u32> {
        let mut powers: Vec<_> = cards.map(Card::power).collect();
        powers.sort_unstable();
        powers
    }

    #[test]
    fn test_draw_takes_front_card() {
        let mut piles = DeckManager::new(units(3));
        let mut rng = GameRng::new(1);
        let mut player = Player::new("P", 100, 10);

        assert!(piles.draw(&mut player, &mut rng));
        assert!(piles.draw(&mut player, &mut rng));

        let names: Vec<_> = player.hand().iter().map(Card::name).collect();
        assert_eq!(names, vec!["U1", "U2"]);
        assert_eq!(piles.deck_len(), 1);
    }

    #[test]
    fn test_draw_reshuffles_when_deck_empty() {
        let mut piles = DeckManager::new(Vec::new());
        let mut rng = GameRng::new(1);
        for card in units(4) {
            piles.discard(card);
        }

        let mut player = Player::new("P", 100, 10);
        assert!(piles.draw(&mut player, &mut rng));

        assert_eq!(player.hand().len(), 1);
        assert_eq!(piles.discard_len(), 0);
        assert_eq!(piles.deck_len(), 3);
    }

    #[test]
    fn test_draw_with_both_piles_empty_is_noop() {
        let mut piles = DeckManager::default();
        let mut rng = GameRng::new(1);
        let mut player = Player::new("P", 100, 10);

        assert!(!piles.draw(&mut player, &mut rng));
        assert!(player.hand().is_empty());
        assert_eq!(piles.total_cards(), 0);
    }

    #[test]
    fn test_reshuffle_conserves_cards() {
        let mut piles = DeckManager::new(units(5));
        let mut rng = GameRng::new(3);
        for card in units(10).into_iter().skip(5) {
            piles.discard(card);
        }

        let before = sorted_powers(piles.deck().iter().chain(piles.discard_pile().iter()));
        piles.reshuffle_discard_into_deck(&mut rng);
        let after = sorted_powers(piles.deck().iter());

        assert_eq!(before, after);
        assert_eq!(piles.discard_len(), 0);
    }

    #[test]
    fn test_reshuffle_reaches_every_permutation() {
        let mut rng = GameRng::new(11);
        let mut seen = FxHashSet::default();

        for _ in 0..2000 {
            let mut piles = DeckManager::new(units(2));
            piles.discard(Card::unit("U3", 3));
            piles.discard(Card::unit("U4", 4));
            piles.reshuffle_discard_into_deck(&mut rng);
            let order: Vec<u32> = piles.deck().iter().map(Card::power).collect();
            seen.insert(order);
        }

        assert_eq!(seen.len(), 24);
    }

    proptest! {
        #[test]
        fn prop_draws_conserve_total(deck in 0u32..12, discard in 0u32..12, draws in 0usize..30, seed in any::<u64>()) {
            let mut piles = DeckManager::new(units(deck));
            for card in units(discard) {
                piles.discard(card);
            }
            let total = piles.total_cards();
            let mut rng = GameRng::new(seed);
            let mut player = Player::new("P", 100, 10);

            for _ in 0..draws {
                piles.draw(&mut player, &mut rng);
                prop_assert_eq!(piles.total_cards() + player.hand().len(), total);
            }
        }
    }
}

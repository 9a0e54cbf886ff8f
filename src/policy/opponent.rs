//! Move selection for automated seats.

use crate::core::GameRng;
use crate::players::Player;

/// Chooses which card an automated player plays.
pub trait OpponentPolicy: Send + Sync {
    /// Choose a hand index for `player`.
    ///
    /// Returns `None` if the hand is empty.
    fn choose_card(&self, player: &Player, rng: &mut GameRng) -> Option<usize>;
}

/// Uniform random policy.
///
/// Every card in hand is equally likely.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformOpponent;

impl OpponentPolicy for UniformOpponent {
    fn choose_card(&self, player: &Player, rng: &mut GameRng) -> Option<usize> {
        rng.choose_index(player.hand().len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    #[test]
    fn test_empty_hand_yields_none() {
        let player = Player::new("Bot", 100, 10);
        let mut rng = GameRng::new(42);
        assert_eq!(UniformOpponent.choose_card(&player, &mut rng), None);
    }

    #[test]
    fn test_uniform_covers_hand() {
        let mut player = Player::new("Bot", 100, 10);
        for power in 1..=4 {
            player.push_card(Card::unit(format!("U{power}"), power));
        }

        let mut rng = GameRng::new(42);
        let mut counts = [0u32; 4];
        for _ in 0..4000 {
            let idx = UniformOpponent.choose_card(&player, &mut rng).unwrap();
            counts[idx] += 1;
        }

        for count in counts {
            assert!((800..1200).contains(&count), "skewed selection: {counts:?}");
        }
    }
}

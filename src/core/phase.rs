//! Turn phases.

use serde::{Deserialize, Serialize};

/// A phase within a single player's turn.
///
/// Turns cycle `Draw -> Play -> End`; `End` leads either to the next
/// player's `Draw` or to the absorbing `GameOver` state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The active player draws one card.
    #[default]
    Draw,
    /// The active player may play cards.
    Play,
    /// Termination is evaluated and the turn passes.
    End,
    /// Terminal state; no further transitions.
    GameOver,
}

impl Phase {
    /// The phase that follows this one within the regular cycle.
    ///
    /// `End` maps back to `Draw`; the decision to enter `GameOver`
    /// belongs to the state machine, not to the phase itself.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Phase::Draw => Phase::Play,
            Phase::Play => Phase::End,
            Phase::End => Phase::Draw,
            Phase::GameOver => Phase::GameOver,
        }
    }

    /// Whether this is the terminal phase.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Phase::GameOver)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Draw => "Draw",
            Phase::Play => "Play",
            Phase::End => "End",
            Phase::GameOver => "Game Over",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle() {
        assert_eq!(Phase::default(), Phase::Draw);
        assert_eq!(Phase::Draw.next(), Phase::Play);
        assert_eq!(Phase::Play.next(), Phase::End);
        assert_eq!(Phase::End.next(), Phase::Draw);
    }

    #[test]
    fn test_game_over_absorbs() {
        assert_eq!(Phase::GameOver.next(), Phase::GameOver);
        assert!(Phase::GameOver.is_terminal());
        assert!(!Phase::End.is_terminal());
    }
}

//! Seat identification and per-seat data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier for the two sides of a match.
//!
//! ## PlayerMap
//!
//! Per-seat storage backed by a fixed array for O(1) access.
//! Supports iteration and indexing by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of seats at the table.
pub const PLAYER_COUNT: usize = 2;

/// Seat identifier.
///
/// Seat indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The seat that moves first.
    pub const FIRST: PlayerId = PlayerId(0);

    /// The seat that moves second.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Iterate over both seats in turn order.
    ///
    /// ```
    /// use card_duel::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(seats, vec![PlayerId::FIRST, PlayerId::SECOND]);
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use card_duel::core::{PlayerId, PlayerMap};
///
/// let mut health: PlayerMap<i32> = PlayerMap::new(|_| 100);
/// assert_eq!(health[PlayerId::FIRST], 100);
///
/// health[PlayerId::SECOND] = 85;
/// assert_eq!(health[PlayerId::SECOND], 85);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::FIRST), factory(PlayerId::SECOND)],
        }
    }

    /// Create a PlayerMap from explicit per-seat values.
    pub fn from_pair(first: T, second: T) -> Self {
        Self {
            data: [first, second],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Map every entry into a new PlayerMap.
    pub fn map<U>(&self, f: impl Fn(PlayerId, &T) -> U) -> PlayerMap<U> {
        PlayerMap::new(|player| f(player, self.get(player)))
    }
}

impl<T: Default> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

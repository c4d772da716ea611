//! Players, player identifiers and per-player storage.
//!
//! ## PlayerId
//!
//! Plain 0-based identifier. Tokens refer to their owner by `PlayerId`, never
//! by reference, so players own tokens but tokens never own players.
//!
//! ## PlayerMap
//!
//! The session's lookup table from `PlayerId` to data, backed by a `Vec` for
//! O(1) access. IDs are handed out in join order.
//!
//! ## Player
//!
//! Name, points and the hand of unplaced tokens.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use super::element::Token;
use super::entity::TokenId;

/// Player identifier.
///
/// Player indices are 0-based: the first player to join is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a session with `player_count` players.
    ///
    /// ```
    /// use thunder_truth::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(2).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use thunder_truth::core::{PlayerId, PlayerMap};
///
/// let mut names: PlayerMap<&str> = PlayerMap::new();
/// let alice = names.push("Alice");
/// let bob = names.push("Bob");
///
/// assert_eq!(alice, PlayerId::new(0));
/// assert_eq!(names[bob], "Bob");
/// assert_eq!(names.get(PlayerId::new(2)), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PlayerMap<T> {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Append an entry and return the ID it was stored under.
    pub fn push(&mut self, value: T) -> PlayerId {
        assert!(self.data.len() < 255, "At most 255 players supported");
        let id = PlayerId(self.data.len() as u8);
        self.data.push(value);
        id
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a player's data, if the ID is known.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Get a player's data mutably, if the ID is known.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over values in ID order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate over values mutably in ID order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }

    /// Values as a slice, in ID order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// Hand of unplaced tokens. Four inline slots match the default deal.
pub type Hand = SmallVec<[Token; 4]>;

/// A participant: name, score and hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    pub name: String,
    points: u32,
    tokens: Hand,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            points: 0,
            tokens: Hand::new(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub const fn points(&self) -> u32 {
        self.points
    }

    /// Add (or with a negative delta, remove) points. Never drops below 0.
    pub fn add_points(&mut self, delta: i64) {
        let updated = (i64::from(self.points) + delta).max(0);
        self.points = u32::try_from(updated).unwrap_or(u32::MAX);
    }

    pub fn reset_points(&mut self) {
        self.points = 0;
    }

    /// Unplaced tokens, in the order they were dealt.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    #[must_use]
    pub fn has_tokens(&self) -> bool {
        !self.tokens.is_empty()
    }

    /// Token at a 0-based hand position.
    #[must_use]
    pub fn token_at(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Replace the hand. Duplicate IDs after the first are dropped.
    pub fn set_tokens(&mut self, tokens: impl IntoIterator<Item = Token>) {
        let mut seen = FxHashSet::default();
        self.tokens = tokens.into_iter().filter(|t| seen.insert(t.id)).collect();
    }

    /// Add a token to the end of the hand.
    ///
    /// Returns false if a token with the same ID is already held.
    pub fn add_token(&mut self, token: Token) -> bool {
        if self.tokens.iter().any(|t| t.id == token.id) {
            return false;
        }
        self.tokens.push(token);
        true
    }

    /// Remove a token from the hand, preserving the order of the rest.
    pub fn pop_token(&mut self, id: TokenId) -> Option<Token> {
        let pos = self.tokens.iter().position(|t| t.id == id)?;
        Some(self.tokens.remove(pos))
    }

    pub fn clear_tokens(&mut self) {
        self.tokens.clear();
    }
}

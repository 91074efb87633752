//! Card and column identification.
//!
//! Every card and column on a board carries an opaque string id. Column ids
//! are chosen by the caller when the board is configured; card ids are
//! minted by an [`IdSource`] owned by (or injected into) the engine.
//!
//! ## Id Sources
//!
//! - [`SequentialIds`]: strictly monotonic counter (`card-1`, `card-2`, ...)
//! - [`RandomIds`]: 64-bit ids drawn from a seeded ChaCha8 stream
//!
//! ```
//! use kanban_board::core::{IdSource, SequentialIds};
//!
//! let mut ids = SequentialIds::new();
//! assert_eq!(ids.next_id().as_str(), "card-1");
//! assert_eq!(ids.next_id().as_str(), "card-2");
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Unique identifier for a card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Create a card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CardId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique identifier for a column.
///
/// Column ids are fixed when the board is built and never change.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    /// Create a column ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ColumnId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ColumnId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ColumnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of fresh card ids.
///
/// Implementations must never repeat an id they have already produced.
/// Ids that collide with a card already on the board (e.g. a board restored
/// from a snapshot) are skipped by the engine; a repeated id is an error.
pub trait IdSource {
    /// Produce the next card id.
    fn next_id(&mut self) -> CardId;
}

impl<F> IdSource for F
where
    F: FnMut() -> CardId,
{
    fn next_id(&mut self) -> CardId {
        self()
    }
}

/// Strictly monotonic counter ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    /// Counter starting at `card-1`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_prefix("card-")
    }

    /// Counter starting at 1 with a custom prefix.
    #[must_use]
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }

    /// Start counting from `next` instead of 1.
    #[must_use]
    pub fn starting_at(mut self, next: u64) -> Self {
        self.next = next;
        self
    }

    /// The value the next id will carry.
    #[must_use]
    pub fn peek(&self) -> u64 {
        self.next
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> CardId {
        let id = CardId(format!("{}{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

/// Random 64-bit ids rendered as 16 hex digits.
///
/// Deterministic for a given seed, which keeps tests reproducible.
#[derive(Clone, Debug)]
pub struct RandomIds {
    inner: ChaCha8Rng,
}

impl RandomIds {
    /// Create a generator from a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }
}

impl IdSource for RandomIds {
    fn next_id(&mut self) -> CardId {
        let value: u64 = self.inner.gen();
        CardId(format!("{:016x}", value))
    }
}

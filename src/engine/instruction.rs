//! Instructions accepted by the engine and reports it hands back.
//!
//! Each instruction is fully self-describing: it names the card, the
//! destination column and the destination index. No drag state is carried
//! between calls.
//!
//! ## Index Convention
//!
//! `MoveCard::index` is interpreted *after* the card has been removed from
//! its source column. Moving `c1` in `[c1, c2, c3]` to index 2 yields
//! `[c2, c3, c1]`. Indices past the end clamp to the end.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::ids::{CardId, ColumnId};

/// Relocate one card.
///
/// ```
/// use kanban_board::engine::MoveCard;
///
/// // Move card-3 to the top of "column2"
/// let mv = MoveCard::new("card-3", "column2", 0);
///
/// // Same move, asserting the card currently lives in "column1"
/// let checked = MoveCard::new("card-3", "column2", 0).from_column("column1");
/// assert_eq!(checked.from.as_ref().map(|c| c.as_str()), Some("column1"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveCard {
    /// The card being moved.
    pub card: CardId,

    /// Expected source column. `None` means "wherever the card is".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<ColumnId>,

    /// Destination column.
    pub to: ColumnId,

    /// Destination index, after removal from the source.
    pub index: usize,
}

impl MoveCard {
    /// Create a move instruction.
    #[must_use]
    pub fn new(card: impl Into<CardId>, to: impl Into<ColumnId>, index: usize) -> Self {
        Self {
            card: card.into(),
            from: None,
            to: to.into(),
            index,
        }
    }

    /// Move to the end of a column.
    #[must_use]
    pub fn to_end(card: impl Into<CardId>, to: impl Into<ColumnId>) -> Self {
        Self::new(card, to, usize::MAX)
    }

    /// Require the card to currently sit in `column`.
    #[must_use]
    pub fn from_column(mut self, column: impl Into<ColumnId>) -> Self {
        self.from = Some(column.into());
        self
    }
}

/// Create one card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddCard {
    /// Column receiving the card (appended at the end).
    pub column: ColumnId,

    /// Card text. Trimmed; empty text is rejected.
    pub content: String,
}

impl AddCard {
    /// Create an add instruction.
    #[must_use]
    pub fn new(column: impl Into<ColumnId>, content: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            content: content.into(),
        }
    }
}

/// Any instruction the engine accepts.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    AddCard(AddCard),
    MoveCard(MoveCard),
}

impl From<AddCard> for Command {
    fn from(add: AddCard) -> Self {
        Self::AddCard(add)
    }
}

impl From<MoveCard> for Command {
    fn from(mv: MoveCard) -> Self {
        Self::MoveCard(mv)
    }
}

/// What a successful move did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// The moved card.
    pub card: CardId,

    /// Column the card left.
    pub from: ColumnId,

    /// Column the card entered.
    pub to: ColumnId,

    /// Index the card held before the move.
    pub from_index: usize,

    /// Index the card holds after the move (clamped).
    pub to_index: usize,

    /// Columns whose sequences changed. Empty for a no-op move.
    /// SmallVec: a move touches at most two columns.
    pub changed: SmallVec<[ColumnId; 2]>,
}

impl MoveReport {
    /// Check if the move changed nothing.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.changed.is_empty()
    }

    /// Check if the card changed columns.
    #[must_use]
    pub fn is_cross_column(&self) -> bool {
        self.from != self.to
    }
}

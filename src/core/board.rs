//! The board: an ordered set of columns, each an ordered set of cards.
//!
//! ## Invariants
//!
//! Every `Board` value reachable through the engine satisfies:
//! - column ids are unique and non-empty
//! - card ids are unique across the whole board
//! - each card's `column_id` names the column whose sequence holds it
//! - card content is non-empty
//!
//! `Board::validate` checks all of them. Deserialization goes through the
//! same check, so a malformed snapshot cannot enter the engine.
//!
//! ## Sharing
//!
//! Columns and cards live in `im` vectors. Cloning a board is cheap and a
//! transition that rewrites one column shares every other column with its
//! input.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::card::Card;
use super::column::Column;
use super::config::BoardConfig;
use super::error::{BoardError, Result};
use super::ids::{CardId, ColumnId};

/// Where a card currently sits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardLocation {
    /// Column holding the card.
    pub column: ColumnId,

    /// Index within that column's sequence.
    pub index: usize,
}

/// A complete board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    columns: Vector<Column>,
}

#[derive(Deserialize)]
struct RawBoard {
    columns: Vector<Column>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self> {
        let board = Self {
            columns: raw.columns,
        };
        board.validate()?;
        Ok(board)
    }
}

impl Board {
    /// Build an empty board from a configuration.
    ///
    /// Fails on duplicate or empty column ids.
    pub fn from_config(config: &BoardConfig) -> Result<Self> {
        Self::from_columns(config.columns.iter().map(Column::from))
    }

    /// Build a board from pre-populated columns.
    ///
    /// The result is validated against every board invariant.
    pub fn from_columns(columns: impl IntoIterator<Item = Column>) -> Result<Self> {
        let board = Self {
            columns: columns.into_iter().collect(),
        };
        board.validate()?;
        Ok(board)
    }

    /// All columns, left to right.
    #[must_use]
    pub fn columns(&self) -> &Vector<Column> {
        &self.columns
    }

    /// Get a column by ID.
    #[must_use]
    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    /// Position of a column in display order.
    #[must_use]
    pub fn column_position(&self, id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|c| &c.id == id)
    }

    /// Get a card by ID.
    #[must_use]
    pub fn card(&self, id: &CardId) -> Option<&Card> {
        let (column, index) = self.position_of(id)?;
        self.columns[column].cards.get(index)
    }

    /// Check if any column holds the card.
    #[must_use]
    pub fn contains_card(&self, id: &CardId) -> bool {
        self.position_of(id).is_some()
    }

    /// Find the column and index of a card.
    #[must_use]
    pub fn locate(&self, id: &CardId) -> Option<CardLocation> {
        let (column, index) = self.position_of(id)?;
        Some(CardLocation {
            column: self.columns[column].id.clone(),
            index,
        })
    }

    /// Total number of cards across all columns.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    /// Every card id, column by column, in display order.
    pub fn card_ids(&self) -> impl Iterator<Item = &CardId> + '_ {
        self.columns.iter().flat_map(|column| column.card_ids())
    }

    /// (column position, card index) of a card.
    pub(crate) fn position_of(&self, id: &CardId) -> Option<(usize, usize)> {
        self.columns
            .iter()
            .enumerate()
            .find_map(|(pos, column)| column.index_of(id).map(|index| (pos, index)))
    }

    /// The same board with one column replaced.
    #[must_use]
    pub(crate) fn with_column(&self, position: usize, column: Column) -> Self {
        Self {
            columns: self.columns.update(position, column),
        }
    }

    /// Check every board invariant.
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<()> {
        let mut column_ids = FxHashSet::default();
        let mut card_ids = FxHashSet::default();

        for column in &self.columns {
            if column.id.as_str().is_empty() {
                return Err(BoardError::EmptyColumnId);
            }
            if !column_ids.insert(&column.id) {
                return Err(BoardError::DuplicateColumnId {
                    id: column.id.to_string(),
                });
            }

            for card in &column.cards {
                if !card_ids.insert(&card.id) {
                    return Err(BoardError::DuplicateCardId {
                        id: card.id.to_string(),
                    });
                }
                if card.column_id != column.id {
                    return Err(BoardError::invariant(format!(
                        "card '{}' sits in column '{}' but records column '{}'",
                        card.id, column.id, card.column_id
                    )));
                }
                if card.content.trim().is_empty() {
                    return Err(BoardError::invariant(format!(
                        "card '{}' has empty content",
                        card.id
                    )));
                }
            }
        }

        Ok(())
    }
}

impl Default for Board {
    /// Empty board with the default four columns.
    fn default() -> Self {
        Self {
            columns: BoardConfig::default().columns.iter().map(Column::from).collect(),
        }
    }
}

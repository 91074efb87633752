//! Translating drop targets into engine moves.
//!
//! Input layers rarely know a raw index. A pointer drop reports the element
//! under the pointer: either a card or a column body. These helpers turn
//! that into a `MoveCard` with the engine's index convention, so the engine
//! keeps a single addressing rule.
//!
//! ## Reference Card Rule
//!
//! `Placement::Over(card)` means "take the slot the reference card holds
//! now". Across columns that inserts the moved card directly before the
//! reference card. Within a column it is the array-move convention: the
//! moved card ends up at the reference card's old index. A reference card
//! that is not in the destination column falls back to the end.

use serde::{Deserialize, Serialize};

use crate::core::board::Board;
use crate::core::error::{BoardError, Result};
use crate::core::ids::{CardId, ColumnId};
use crate::engine::instruction::MoveCard;

/// Where in the destination column a card should land.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Placement {
    /// Raw index, after removal from the source.
    Index(usize),
    /// The slot currently held by this card.
    Over(CardId),
    /// After the last card.
    End,
}

/// The element a card was dropped on.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DropTarget {
    /// A column body (empty area, header, footer).
    Column(ColumnId),
    /// Another card.
    Card(CardId),
}

/// Build a move to `to` at the given placement.
///
/// Fails if the moved card or the destination column does not exist.
pub fn resolve_move(
    board: &Board,
    card: &CardId,
    to: &ColumnId,
    placement: &Placement,
) -> Result<MoveCard> {
    if !board.contains_card(card) {
        return Err(BoardError::card_not_found(card));
    }
    let column = board
        .column(to)
        .ok_or_else(|| BoardError::column_not_found(to))?;

    let index = match placement {
        Placement::Index(index) => *index,
        Placement::Over(reference) => column.index_of(reference).unwrap_or(column.len()),
        Placement::End => column.len(),
    };

    Ok(MoveCard::new(card.clone(), to.clone(), index))
}

/// Build a move from a drop on a card or column.
///
/// Dropping on a card targets that card's column with `Placement::Over`;
/// dropping on a column appends to it.
pub fn resolve_drop(board: &Board, card: &CardId, target: &DropTarget) -> Result<MoveCard> {
    match target {
        DropTarget::Column(column) => resolve_move(board, card, column, &Placement::End),
        DropTarget::Card(over) => {
            let location = board
                .locate(over)
                .ok_or_else(|| BoardError::card_not_found(over))?;
            resolve_move(board, card, &location.column, &Placement::Over(over.clone()))
        }
    }
}

/// Interpret a raw drop id the way a pointer layer reports it: column ids
/// and card ids share one namespace, columns are checked first.
#[must_use]
pub fn drop_target_for(board: &Board, id: &str) -> Option<DropTarget> {
    let column = ColumnId::new(id);
    if board.column(&column).is_some() {
        return Some(DropTarget::Column(column));
    }
    let card = CardId::new(id);
    board.contains_card(&card).then_some(DropTarget::Card(card))
}

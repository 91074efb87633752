//! Pure board transitions.
//!
//! Both functions take a board by reference and return a new one; the input
//! is never touched. Only the columns a transition rewrites are rebuilt, the
//! rest are shared with the input.

use smallvec::{smallvec, SmallVec};

use super::instruction::{MoveCard, MoveReport};
use crate::core::board::Board;
use crate::core::card::Card;
use crate::core::error::{BoardError, Result};
use crate::core::ids::{CardId, ColumnId};

/// Append a new card to the end of a column.
///
/// `content` is trimmed and must not be empty. `id` must not already be on
/// the board.
pub fn add_card(board: &Board, column: &ColumnId, content: &str, id: CardId) -> Result<Board> {
    let position = check_add(board, column, content)?;
    let content = content.trim();

    if board.contains_card(&id) {
        return Err(BoardError::DuplicateCardId { id: id.to_string() });
    }

    let target = &board.columns()[position];
    let mut cards = target.cards.clone();
    cards.push_back(Card::new(id, content, target.id.clone()));

    Ok(board.with_column(position, target.with_cards(cards)))
}

/// Check that `content` can be added to `column`, returning the column's
/// position.
pub(crate) fn check_add(board: &Board, column: &ColumnId, content: &str) -> Result<usize> {
    if content.trim().is_empty() {
        return Err(BoardError::EmptyContent);
    }

    board
        .column_position(column)
        .ok_or_else(|| BoardError::column_not_found(column))
}

/// Move a card within or across columns.
///
/// The card is removed from its source first, then inserted at
/// `mv.index` (clamped to the destination length). On a cross-column move
/// the card's `column_id` is rewritten to the destination.
pub fn move_card(board: &Board, mv: &MoveCard) -> Result<(Board, MoveReport)> {
    let (source_pos, source_index) = board
        .position_of(&mv.card)
        .ok_or_else(|| BoardError::card_not_found(&mv.card))?;
    let source = &board.columns()[source_pos];

    if let Some(expected) = &mv.from {
        if board.column_position(expected).is_none() {
            return Err(BoardError::column_not_found(expected));
        }
        if &source.id != expected {
            return Err(BoardError::CardNotInColumn {
                card: mv.card.to_string(),
                column: expected.to_string(),
            });
        }
    }

    let dest_pos = board
        .column_position(&mv.to)
        .ok_or_else(|| BoardError::column_not_found(&mv.to))?;

    if source_pos == dest_pos {
        return Ok(reorder(board, mv, source_pos, source_index));
    }

    let dest = &board.columns()[dest_pos];

    let mut source_cards = source.cards.clone();
    let card = source_cards.remove(source_index).relocated(dest.id.clone());

    let mut dest_cards = dest.cards.clone();
    let to_index = mv.index.min(dest_cards.len());
    dest_cards.insert(to_index, card);

    let next = board
        .with_column(source_pos, source.with_cards(source_cards))
        .with_column(dest_pos, dest.with_cards(dest_cards));

    let report = MoveReport {
        card: mv.card.clone(),
        from: source.id.clone(),
        to: dest.id.clone(),
        from_index: source_index,
        to_index,
        changed: smallvec![source.id.clone(), dest.id.clone()],
    };

    Ok((next, report))
}

/// Same-column case: remove, then reinsert at the clamped index.
fn reorder(board: &Board, mv: &MoveCard, position: usize, from_index: usize) -> (Board, MoveReport) {
    let column = &board.columns()[position];
    let to_index = mv.index.min(column.len() - 1);

    let mut report = MoveReport {
        card: mv.card.clone(),
        from: column.id.clone(),
        to: column.id.clone(),
        from_index,
        to_index,
        changed: SmallVec::new(),
    };

    if to_index == from_index {
        return (board.clone(), report);
    }

    let mut cards = column.cards.clone();
    let card = cards.remove(from_index);
    cards.insert(to_index, card);

    report.changed.push(column.id.clone());
    (board.with_column(position, column.with_cards(cards)), report)
}

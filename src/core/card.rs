//! Cards - the items placed on a board.
//!
//! A `Card` carries an opaque text payload and records which column
//! currently holds it. The `column_id` field is owned by the engine: it is
//! rewritten only when a move relocates the card.

use serde::{Deserialize, Serialize};

use super::ids::{CardId, ColumnId};

/// A card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique id for this card.
    pub id: CardId,

    /// Free-text payload.
    pub content: String,

    /// Column whose sequence currently contains this card.
    pub column_id: ColumnId,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub fn new(id: CardId, content: impl Into<String>, column_id: ColumnId) -> Self {
        Self {
            id,
            content: content.into(),
            column_id,
        }
    }

    /// The same card, owned by another column.
    #[must_use]
    pub fn relocated(mut self, column_id: ColumnId) -> Self {
        self.column_id = column_id;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relocated_keeps_identity() {
        let card = Card::new(CardId::new("card-1"), "Write docs", ColumnId::new("column1"));
        let moved = card.clone().relocated(ColumnId::new("column2"));

        assert_eq!(moved.id, card.id);
        assert_eq!(moved.content, card.content);
        assert_eq!(moved.column_id, ColumnId::new("column2"));
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::new(CardId::new("card-3"), "Ship it", ColumnId::new("column4"));
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}

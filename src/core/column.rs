//! Columns - named, ordered card sequences.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::Card;
use super::config::ColumnConfig;
use super::ids::{CardId, ColumnId};

/// A column on the board.
///
/// `cards` is in display order (index 0 is the top of the column) and uses
/// an `im` vector so that replacing one column never copies the others.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Unique identifier, fixed for the board's lifetime.
    pub id: ColumnId,

    /// Display label.
    pub title: String,

    /// Cards in display order.
    pub cards: Vector<Card>,
}

impl Column {
    /// Create an empty column.
    #[must_use]
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            cards: Vector::new(),
        }
    }

    /// Number of cards in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the column holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Position of a card within this column.
    #[must_use]
    pub fn index_of(&self, card: &CardId) -> Option<usize> {
        self.cards.iter().position(|c| &c.id == card)
    }

    /// Check if this column holds a card.
    #[must_use]
    pub fn contains(&self, card: &CardId) -> bool {
        self.index_of(card).is_some()
    }

    /// Card ids in display order.
    pub fn card_ids(&self) -> impl Iterator<Item = &CardId> + '_ {
        self.cards.iter().map(|c| &c.id)
    }

    /// The same column with a different card sequence.
    #[must_use]
    pub(crate) fn with_cards(&self, cards: Vector<Card>) -> Self {
        Self {
            id: self.id.clone(),
            title: self.title.clone(),
            cards,
        }
    }
}

impl From<&ColumnConfig> for Column {
    fn from(config: &ColumnConfig) -> Self {
        Self::new(config.id.clone(), config.title.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str, column: &str) -> Card {
        Card::new(CardId::new(id), id.to_uppercase(), ColumnId::new(column))
    }

    #[test]
    fn test_new_column_is_empty() {
        let column = Column::new("column1", "To Do");

        assert!(column.is_empty());
        assert_eq!(column.len(), 0);
        assert_eq!(column.index_of(&CardId::new("c1")), None);
    }

    #[test]
    fn test_index_of() {
        let mut column = Column::new("a", "A");
        column.cards.push_back(card("c1", "a"));
        column.cards.push_back(card("c2", "a"));

        assert_eq!(column.index_of(&CardId::new("c1")), Some(0));
        assert_eq!(column.index_of(&CardId::new("c2")), Some(1));
        assert!(column.contains(&CardId::new("c2")));
        assert!(!column.contains(&CardId::new("c3")));

        let ids: Vec<_> = column.card_ids().map(CardId::as_str).collect();
        assert_eq!(ids, ["c1", "c2"]);
    }

    #[test]
    fn test_with_cards_keeps_identity() {
        let column = Column::new("a", "Alpha");
        let replaced = column.with_cards(Vector::unit(card("c1", "a")));

        assert_eq!(replaced.id, column.id);
        assert_eq!(replaced.title, "Alpha");
        assert_eq!(replaced.len(), 1);
        assert!(column.is_empty());
    }

    #[test]
    fn test_from_config() {
        let column = Column::from(&ColumnConfig::new("column3", "Review"));

        assert_eq!(column.id, ColumnId::new("column3"));
        assert_eq!(column.title, "Review");
        assert!(column.is_empty());
    }
}

//! Error types for board operations.
//!
//! Most errors are *not found* conditions raised by stale user gestures.
//! The engine's fail-soft API treats them as no-ops; the strict API
//! (`try_*`) returns them so callers can tell what happened.

use thiserror::Error;

/// Result type for board operations.
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur in board operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Column not found
    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    /// Card not found in any column
    #[error("card not found: {id}")]
    CardNotFound { id: String },

    /// Card exists but not in the column the instruction named as its source
    #[error("card '{card}' is not in column '{column}'")]
    CardNotInColumn { card: String, column: String },

    /// Card content is empty after trimming
    #[error("card content is empty")]
    EmptyContent,

    /// A card id is already in use on this board
    #[error("duplicate card ID: {id}")]
    DuplicateCardId { id: String },

    /// A column id appears twice in the board configuration
    #[error("duplicate column ID: {id}")]
    DuplicateColumnId { id: String },

    /// A column was configured with an empty id
    #[error("column ID is empty")]
    EmptyColumnId,

    /// A board failed its structural invariants
    #[error("invariant violated: {reason}")]
    InvariantViolation { reason: String },

    /// The shared board lock was poisoned by a panicking writer
    #[error("board lock poisoned")]
    Poisoned,
}

impl BoardError {
    /// Create a column-not-found error.
    pub fn column_not_found(id: impl std::fmt::Display) -> Self {
        Self::ColumnNotFound { id: id.to_string() }
    }

    /// Create a card-not-found error.
    pub fn card_not_found(id: impl std::fmt::Display) -> Self {
        Self::CardNotFound { id: id.to_string() }
    }

    /// Create an invariant violation error.
    pub fn invariant(reason: impl Into<String>) -> Self {
        Self::InvariantViolation {
            reason: reason.into(),
        }
    }

    /// Lookup failures caused by stale input rather than a defect.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ColumnNotFound { .. } | Self::CardNotFound { .. } | Self::CardNotInColumn { .. }
        )
    }

    /// Errors that indicate a bug in id generation or board construction.
    #[must_use]
    pub fn is_defect(&self) -> bool {
        matches!(
            self,
            Self::DuplicateCardId { .. } | Self::InvariantViolation { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            BoardError::column_not_found("column9").to_string(),
            "column not found: column9"
        );
        assert_eq!(
            BoardError::CardNotInColumn {
                card: "card-1".into(),
                column: "column2".into(),
            }
            .to_string(),
            "card 'card-1' is not in column 'column2'"
        );
        assert_eq!(BoardError::EmptyContent.to_string(), "card content is empty");
    }

    #[test]
    fn test_classification() {
        assert!(BoardError::card_not_found("x").is_not_found());
        assert!(BoardError::column_not_found("x").is_not_found());
        assert!(!BoardError::EmptyContent.is_not_found());

        assert!(BoardError::DuplicateCardId { id: "x".into() }.is_defect());
        assert!(BoardError::invariant("broken").is_defect());
        assert!(!BoardError::card_not_found("x").is_defect());
    }
}

//! Board configuration types.
//!
//! Callers configure the board at startup by providing:
//! - `ColumnConfig`: One column (id and display title)
//! - `BoardConfig`: The ordered list of columns
//!
//! The engine never creates or destroys columns after construction; the
//! configuration fixes the column set for the board's lifetime.

use serde::{Deserialize, Serialize};

use super::ids::ColumnId;

/// Configuration for a single column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnConfig {
    /// Unique identifier for this column.
    pub id: ColumnId,

    /// Display label.
    pub title: String,
}

impl ColumnConfig {
    /// Create a new column configuration.
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Complete board configuration.
///
/// Column order here is the display order of the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Column configurations, left to right.
    pub columns: Vec<ColumnConfig>,
}

impl BoardConfig {
    /// Create an empty board configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Add a column configuration.
    #[must_use]
    pub fn with_column(mut self, column: ColumnConfig) -> Self {
        self.columns.push(column);
        self
    }

    /// Get a column config by ID.
    #[must_use]
    pub fn get_column(&self, id: &ColumnId) -> Option<&ColumnConfig> {
        self.columns.iter().find(|c| &c.id == id)
    }
}

impl Default for BoardConfig {
    /// The four-column workflow: To Do, In Progress, Review, Done.
    fn default() -> Self {
        Self::new()
            .with_column(ColumnConfig::new("column1", "To Do"))
            .with_column(ColumnConfig::new("column2", "In Progress"))
            .with_column(ColumnConfig::new("column3", "Review"))
            .with_column(ColumnConfig::new("column4", "Done"))
    }
}

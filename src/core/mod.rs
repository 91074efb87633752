//! Core board types: ids, configuration, cards, columns, the board, errors.
//!
//! This module holds plain data and queries. All mutation goes through the
//! transitions in `engine`.

pub mod ids;
pub mod config;
pub mod card;
pub mod column;
pub mod board;
pub mod error;

pub use ids::{CardId, ColumnId, IdSource, SequentialIds, RandomIds};
pub use config::{ColumnConfig, BoardConfig};
pub use card::Card;
pub use column::Column;
pub use board::{Board, CardLocation};
pub use error::{BoardError, Result};

//! # kanban-board
//!
//! A board state engine: named, ordered columns of uniquely identified
//! cards, with one algorithm for adding cards and moving them within or
//! across columns.
//!
//! ## Design Principles
//!
//! 1. **Pure Transitions**: `add_card` and `move_card` map a board and an
//!    instruction to a new board. No drag state survives between calls.
//!
//! 2. **One Addressing Rule**: the engine takes a raw destination index,
//!    counted after the card is removed from its source. Reference-card and
//!    drop-target addressing are translated in `adapter`.
//!
//! 3. **Fail-Soft Lookups**: stale ids from a gesture leave the board
//!    unchanged. Broken invariants and duplicate ids fail loudly in debug
//!    builds.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: columns and cards live in `im`
//!   vectors, so a transition rebuilds only the columns it touches and
//!   snapshots are cheap.
//!
//! - **Injected Ids**: card ids come from an `IdSource` (monotonic counter
//!   by default), never from a clock.
//!
//! ## Modules
//!
//! - `core`: ids, configuration, cards, columns, board, errors
//! - `engine`: instructions, pure transitions, the owning engine
//! - `adapter`: drop-target translation and input normalization

pub mod core;
pub mod engine;
pub mod adapter;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    CardId, ColumnId, IdSource, SequentialIds, RandomIds,
    ColumnConfig, BoardConfig,
    Card, Column, Board, CardLocation,
    BoardError, Result,
};

pub use crate::engine::{
    AddCard, MoveCard, Command, MoveReport,
    Applied, BoardEngine, SharedBoard,
};

pub use crate::adapter::{DropTarget, Placement};

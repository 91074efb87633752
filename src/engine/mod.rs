//! Board engine: instructions, pure transitions, and the owning controller.
//!
//! ## Key Types
//!
//! - `MoveCard` / `AddCard` / `Command`: self-describing instructions
//! - `ops::add_card` / `ops::move_card`: pure `(Board, instruction) -> Board`
//! - `BoardEngine`: owns the current board and the id source
//! - `SharedBoard`: mutex-serialized engine for concurrent callers

pub mod instruction;
pub mod ops;
pub mod controller;
pub mod shared;

pub use instruction::{AddCard, Command, MoveCard, MoveReport};
pub use controller::{Applied, BoardEngine};
pub use shared::SharedBoard;

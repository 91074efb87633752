//! Python bindings for the kanban board engine.
//!
//! # Quick Start
//!
//! ```python
//! import kanban_board as kb
//!
//! board = kb.BoardEngine()
//! card = board.add_card("column1", "Write tests")
//! board.move_over(card, "column2")
//!
//! for column_id, title, cards in board.columns():
//!     print(title, cards)
//! ```

use pyo3::prelude::*;

mod py_board;

pub use py_board::*;

/// kanban_board: ordered columns of cards with move/insert semantics.
#[pymodule]
fn kanban_board(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBoardEngine>()?;

    Ok(())
}

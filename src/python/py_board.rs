//! Board engine bindings for Python.

use pyo3::exceptions::{PyKeyError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::adapter::{drop_target_for, resolve_drop};
use crate::core::{BoardConfig, BoardError, CardId, ColumnConfig, ColumnId};
use crate::engine::{BoardEngine, MoveCard};

impl From<BoardError> for PyErr {
    fn from(err: BoardError) -> Self {
        let message = err.to_string();
        if err.is_not_found() {
            PyKeyError::new_err(message)
        } else if err.is_defect() || matches!(err, BoardError::Poisoned) {
            PyRuntimeError::new_err(message)
        } else {
            PyValueError::new_err(message)
        }
    }
}

/// Snapshot row: (card id, content).
type PyCard = (String, String);

/// Snapshot row: (column id, title, cards).
type PyColumn = (String, String, Vec<PyCard>);

/// Python wrapper for BoardEngine.
///
/// Uses counter ids (`card-1`, `card-2`, ...).
#[pyclass(name = "BoardEngine")]
pub struct PyBoardEngine {
    engine: BoardEngine,
}

#[pymethods]
impl PyBoardEngine {
    /// Create a board engine.
    ///
    /// # Arguments
    /// - columns: list of (id, title) pairs; defaults to the four-column
    ///   To Do / In Progress / Review / Done board
    #[new]
    #[pyo3(signature = (columns = None))]
    fn new(columns: Option<Vec<(String, String)>>) -> PyResult<Self> {
        let config = match columns {
            Some(columns) => columns
                .into_iter()
                .fold(BoardConfig::new(), |config, (id, title)| {
                    config.with_column(ColumnConfig::new(id, title))
                }),
            None => BoardConfig::default(),
        };
        Ok(Self {
            engine: BoardEngine::new(&config)?,
        })
    }

    /// Append a card to a column, returning its id.
    fn add_card(&mut self, column: &str, content: &str) -> PyResult<String> {
        let id = self.engine.try_add_card(&ColumnId::new(column), content)?;
        Ok(id.to_string())
    }

    /// Move a card to `index` in `column` (index counted after removal).
    ///
    /// Returns True if the board changed.
    fn move_card(&mut self, card: &str, column: &str, index: usize) -> PyResult<bool> {
        let report = self.engine.try_move_card(&MoveCard::new(card, column, index))?;
        Ok(!report.is_noop())
    }

    /// Move a card onto a drop target: a column id or another card's id.
    ///
    /// Returns True if the board changed.
    fn move_over(&mut self, card: &str, target: &str) -> PyResult<bool> {
        let board = self.engine.board();
        let target = drop_target_for(board, target)
            .ok_or_else(|| PyKeyError::new_err(format!("unknown drop target: {}", target)))?;
        let mv = resolve_drop(board, &CardId::new(card), &target)?;

        let report = self.engine.try_move_card(&mv)?;
        Ok(!report.is_noop())
    }

    /// Snapshot of the board as nested tuples.
    fn columns(&self) -> Vec<PyColumn> {
        self.engine
            .board()
            .columns()
            .iter()
            .map(|column| {
                let cards = column
                    .cards
                    .iter()
                    .map(|card| (card.id.to_string(), card.content.clone()))
                    .collect();
                (column.id.to_string(), column.title.clone(), cards)
            })
            .collect()
    }

    /// Total number of cards.
    fn card_count(&self) -> usize {
        self.engine.board().card_count()
    }

    fn __repr__(&self) -> String {
        format!(
            "BoardEngine(columns={}, cards={})",
            self.engine.board().columns().len(),
            self.engine.board().card_count()
        )
    }
}

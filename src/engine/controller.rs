//! The board engine: single owner of the current board.
//!
//! `BoardEngine` holds the canonical `Board` and the id source, and applies
//! one instruction at a time. Every successful instruction replaces the
//! board wholesale with the value returned by the pure transitions in
//! `ops`; nothing else writes to it.
//!
//! ## Failure Policy
//!
//! - `add_card` / `move_card`: fail-soft. A rejected instruction is logged
//!   and the board is left unchanged.
//! - `try_add_card` / `try_move_card`: return the error instead.
//! - Ids the source produces that are already on the board are skipped.
//!   A source that repeats its own output is a defect: it is logged at
//!   `error` and reported as `InvariantViolation`.
//! - A transition that breaks board invariants panics in debug builds.

use rustc_hash::FxHashSet;
use tracing::{debug, error, warn};

use super::instruction::{AddCard, Command, MoveCard, MoveReport};
use super::ops;
use crate::core::board::Board;
use crate::core::config::BoardConfig;
use crate::core::error::{BoardError, Result};
use crate::core::ids::{CardId, ColumnId, IdSource, SequentialIds};

/// What `apply` produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Applied {
    /// A card was created.
    Added(CardId),
    /// A card was moved (possibly a no-op move).
    Moved(MoveReport),
}

/// Owner of a board and its id source.
///
/// ## Usage
///
/// ```
/// use kanban_board::core::{BoardConfig, ColumnId};
/// use kanban_board::engine::{BoardEngine, MoveCard};
///
/// let mut engine = BoardEngine::new(&BoardConfig::default()).unwrap();
///
/// let id = engine.try_add_card(&ColumnId::new("column1"), "Write tests").unwrap();
/// engine.move_card(MoveCard::to_end(id.clone(), "column2"));
///
/// let card = engine.board().card(&id).unwrap();
/// assert_eq!(card.column_id.as_str(), "column2");
/// ```
#[derive(Clone, Debug)]
pub struct BoardEngine<S = SequentialIds> {
    board: Board,
    ids: S,
}

impl BoardEngine<SequentialIds> {
    /// Create an engine with an empty board and counter ids.
    pub fn new(config: &BoardConfig) -> Result<Self> {
        Self::with_id_source(config, SequentialIds::new())
    }
}

impl<S: IdSource> BoardEngine<S> {
    /// Create an engine with an empty board and the given id source.
    pub fn with_id_source(config: &BoardConfig, ids: S) -> Result<Self> {
        Ok(Self {
            board: Board::from_config(config)?,
            ids,
        })
    }

    /// Resume from an existing board.
    ///
    /// Ids the source produces that already exist on `board` are skipped,
    /// so a fresh `SequentialIds` works on a restored board.
    #[must_use]
    pub fn from_board(board: Board, ids: S) -> Self {
        Self { board, ids }
    }

    /// Borrow the current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Take a snapshot of the current board.
    ///
    /// Cheap: the snapshot shares structure with the live board.
    #[must_use]
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }

    /// Borrow the id source.
    #[must_use]
    pub fn id_source(&self) -> &S {
        &self.ids
    }

    /// Consume the engine, returning the current board.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }

    // === Fail-soft API ===

    /// Append a card to a column.
    ///
    /// Rejected instructions (unknown column, empty content) leave the
    /// board unchanged.
    pub fn add_card(&mut self, column: &ColumnId, content: &str) -> &Board {
        if let Err(e) = self.try_add_card(column, content) {
            warn!(column = %column, error = %e, "add_card ignored");
        }
        &self.board
    }

    /// Move a card.
    ///
    /// Rejected instructions (unknown card or column) leave the board
    /// unchanged.
    pub fn move_card(&mut self, mv: MoveCard) -> &Board {
        if let Err(e) = self.try_move_card(&mv) {
            warn!(card = %mv.card, to = %mv.to, error = %e, "move_card ignored");
        }
        &self.board
    }

    // === Strict API ===

    /// Append a card to a column, returning its new id.
    pub fn try_add_card(&mut self, column: &ColumnId, content: &str) -> Result<CardId> {
        ops::check_add(&self.board, column, content)?;
        let id = self.fresh_id()?;
        let next = ops::add_card(&self.board, column, content, id.clone())?;

        self.commit(next);
        debug!(card = %id, column = %column, "card added");
        Ok(id)
    }

    /// Move a card, returning what changed.
    pub fn try_move_card(&mut self, mv: &MoveCard) -> Result<MoveReport> {
        let (next, report) = ops::move_card(&self.board, mv)?;

        if !report.is_noop() {
            self.commit(next);
        }
        debug!(
            card = %report.card,
            from = %report.from,
            to = %report.to,
            from_index = report.from_index,
            to_index = report.to_index,
            "card moved"
        );
        Ok(report)
    }

    /// Apply any instruction.
    pub fn apply(&mut self, command: Command) -> Result<Applied> {
        match command {
            Command::AddCard(AddCard { column, content }) => {
                self.try_add_card(&column, &content).map(Applied::Added)
            }
            Command::MoveCard(mv) => self.try_move_card(&mv).map(Applied::Moved),
        }
    }

    /// Draw an id that is not yet on the board.
    ///
    /// A source of distinct ids hits a free one within `card_count + 1`
    /// draws, so only a repeating source can exhaust the loop.
    fn fresh_id(&mut self) -> Result<CardId> {
        let mut drawn = FxHashSet::default();

        for _ in 0..=self.board.card_count() {
            let id = self.ids.next_id();
            if !self.board.contains_card(&id) {
                return Ok(id);
            }
            if !drawn.insert(id.clone()) {
                error!(card = %id, "id source repeated an id");
                return Err(BoardError::invariant(format!("id source repeated id {}", id)));
            }
            debug!(card = %id, "skipping id already on the board");
        }

        Err(BoardError::invariant("id source failed to produce a fresh id"))
    }

    /// Replace the board with the result of a transition.
    fn commit(&mut self, next: Board) {
        debug_assert!(
            next.validate().is_ok(),
            "transition broke board invariants: {:?}",
            next.validate()
        );
        self.board = next;
    }
}

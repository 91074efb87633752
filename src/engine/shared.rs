//! Serialized access to one engine from several threads.
//!
//! The engine itself assumes a single caller. `SharedBoard` puts it behind
//! a mutex so concurrent callers are applied one at a time, each seeing the
//! board left by the previous one.

use std::sync::{Arc, Mutex, MutexGuard};

use super::controller::{Applied, BoardEngine};
use super::instruction::Command;
use crate::core::board::Board;
use crate::core::error::{BoardError, Result};
use crate::core::ids::{IdSource, SequentialIds};

/// Cloneable handle to a mutex-guarded engine.
#[derive(Debug)]
pub struct SharedBoard<S = SequentialIds> {
    inner: Arc<Mutex<BoardEngine<S>>>,
}

impl<S> Clone for SharedBoard<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: IdSource> SharedBoard<S> {
    /// Wrap an engine.
    #[must_use]
    pub fn new(engine: BoardEngine<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Apply one instruction under the lock.
    pub fn apply(&self, command: Command) -> Result<Applied> {
        self.lock()?.apply(command)
    }

    /// Snapshot of the current board.
    pub fn snapshot(&self) -> Result<Board> {
        Ok(self.lock()?.snapshot())
    }

    /// Run several operations against the engine without interleaving.
    pub fn with_engine<T>(&self, f: impl FnOnce(&mut BoardEngine<S>) -> T) -> Result<T> {
        let mut engine = self.lock()?;
        Ok(f(&mut engine))
    }

    fn lock(&self) -> Result<MutexGuard<'_, BoardEngine<S>>> {
        self.inner.lock().map_err(|_| BoardError::Poisoned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::BoardConfig;
    use crate::core::ids::ColumnId;
    use crate::engine::instruction::{AddCard, MoveCard};

    #[test]
    fn test_concurrent_adds_keep_ids_unique() {
        let shared = SharedBoard::new(BoardEngine::new(&BoardConfig::default()).unwrap());

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let shared = shared.clone();
                std::thread::spawn(move || {
                    for i in 0..25 {
                        let column = format!("column{}", t + 1);
                        shared
                            .apply(AddCard::new(column, format!("t{} #{}", t, i)).into())
                            .unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let board = shared.snapshot().unwrap();
        assert_eq!(board.card_count(), 100);
        board.validate().unwrap();
        for column in board.columns() {
            assert_eq!(column.len(), 25);
        }
    }

    #[test]
    fn test_with_engine_batches() {
        let shared = SharedBoard::new(BoardEngine::new(&BoardConfig::default()).unwrap());

        let moved = shared
            .with_engine(|engine| {
                let id = engine.try_add_card(&ColumnId::new("column1"), "x")?;
                engine.try_move_card(&MoveCard::to_end(id, "column4"))
            })
            .unwrap()
            .unwrap();

        assert_eq!(moved.to, ColumnId::new("column4"));
    }

    #[test]
    fn test_poisoned_lock() {
        let shared = SharedBoard::new(BoardEngine::new(&BoardConfig::default()).unwrap());

        let poisoner = shared.clone();
        let _ = std::thread::spawn(move || {
            let _ = poisoner.with_engine(|_| -> () { panic!("writer died") });
        })
        .join();

        assert_eq!(shared.snapshot().unwrap_err(), BoardError::Poisoned);
    }
}

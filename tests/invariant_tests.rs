//! Property tests for board invariants.
//!
//! Random sequences of adds and moves are applied to an engine. After every
//! step the board must:
//! - pass `Board::validate` (unique ids, consistent membership)
//! - conserve the card count on moves and grow by one on adds
//! - keep the relative order of every card that was not moved

use proptest::prelude::*;

use kanban_board::adapter::{resolve_drop, DropTarget};
use kanban_board::core::{Board, BoardConfig, CardId, ColumnConfig, ColumnId, RandomIds};
use kanban_board::engine::{BoardEngine, MoveCard};

const COLUMNS: [&str; 4] = ["todo", "doing", "review", "done"];

#[derive(Clone, Debug)]
enum Op {
    Add { column: usize, content: String },
    Move { card: usize, column: usize, index: usize },
    Drop { card: usize, target: usize, on_card: bool },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..COLUMNS.len(), "[ a-z]{0,8}").prop_map(|(column, content)| Op::Add { column, content }),
        (0..64usize, 0..COLUMNS.len(), 0..12usize)
            .prop_map(|(card, column, index)| Op::Move { card, column, index }),
        (0..64usize, 0..64usize, any::<bool>())
            .prop_map(|(card, target, on_card)| Op::Drop { card, target, on_card }),
    ]
}

fn config() -> BoardConfig {
    COLUMNS
        .iter()
        .fold(BoardConfig::new(), |config, id| config.with_column(ColumnConfig::new(*id, *id)))
}

/// Pick an existing card by wrapping an arbitrary number over the board.
fn pick(board: &Board, n: usize) -> Option<CardId> {
    let all: Vec<_> = board.card_ids().cloned().collect();
    if all.is_empty() {
        None
    } else {
        Some(all[n % all.len()].clone())
    }
}

/// Every column's card order with `moved` filtered out.
fn order_without(board: &Board, moved: &CardId) -> Vec<Vec<CardId>> {
    board
        .columns()
        .iter()
        .map(|column| column.card_ids().filter(|id| *id != moved).cloned().collect())
        .collect()
}

fn check_move(before: &Board, after: &Board, moved: &CardId) -> Result<(), TestCaseError> {
    prop_assert!(after.validate().is_ok(), "invalid board: {:?}", after.validate());
    prop_assert_eq!(after.card_count(), before.card_count());

    // Order preservation for cards that stayed put
    let before_order = order_without(before, moved);
    let after_order = order_without(after, moved);
    for (b, a) in before_order.iter().zip(&after_order) {
        prop_assert_eq!(b, a);
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_invariants_hold(ops in prop::collection::vec(op_strategy(), 1..80)) {
        let mut engine = BoardEngine::new(&config()).unwrap();

        for op in ops {
            let before = engine.snapshot();

            match op {
                Op::Add { column, content } => {
                    engine.add_card(&ColumnId::new(COLUMNS[column]), &content);

                    let expected = before.card_count() + usize::from(!content.trim().is_empty());
                    prop_assert_eq!(engine.board().card_count(), expected);
                    prop_assert!(engine.board().validate().is_ok());
                }
                Op::Move { card, column, index } => {
                    let Some(card) = pick(&before, card) else { continue };
                    engine.move_card(MoveCard::new(card.clone(), COLUMNS[column], index));

                    let location = engine.board().locate(&card).unwrap();
                    prop_assert_eq!(location.column.as_str(), COLUMNS[column]);
                    check_move(&before, engine.board(), &card)?;
                }
                Op::Drop { card, target, on_card } => {
                    let Some(card) = pick(&before, card) else { continue };
                    let target = if on_card {
                        DropTarget::Card(pick(&before, target).unwrap())
                    } else {
                        DropTarget::Column(ColumnId::new(COLUMNS[target % COLUMNS.len()]))
                    };

                    let mv = resolve_drop(&before, &card, &target).unwrap();
                    engine.move_card(mv);

                    check_move(&before, engine.board(), &card)?;
                }
            }
        }
    }

    #[test]
    fn prop_move_to_current_slot_is_identity(ops in prop::collection::vec(op_strategy(), 1..40), pick_n in 0..64usize) {
        let mut engine = BoardEngine::with_id_source(&config(), RandomIds::new(7)).unwrap();
        for op in ops {
            if let Op::Add { column, content } = op {
                engine.add_card(&ColumnId::new(COLUMNS[column]), &content);
            }
        }

        let before = engine.snapshot();
        if let Some(card) = pick(&before, pick_n) {
            let location = before.locate(&card).unwrap();
            let report = engine
                .try_move_card(&MoveCard::new(card, location.column, location.index))
                .unwrap();

            prop_assert!(report.is_noop());
            prop_assert_eq!(engine.board(), &before);
        }
    }

    #[test]
    fn prop_cross_column_lands_at_clamped_index(
        adds in prop::collection::vec((0..COLUMNS.len(), "[a-z]{1,4}"), 2..30),
        pick_n in 0..64usize,
        index in 0..40usize,
        shift in 1..COLUMNS.len(),
    ) {
        let mut engine = BoardEngine::new(&config()).unwrap();
        for (column, content) in adds {
            engine.add_card(&ColumnId::new(COLUMNS[column]), &content);
        }

        let before = engine.snapshot();
        let card = pick(&before, pick_n).unwrap();
        let source = before.locate(&card).unwrap();
        let source_pos = before.column_position(&source.column).unwrap();
        let dest = COLUMNS[(source_pos + shift) % COLUMNS.len()];
        let dest_len = before.column(&ColumnId::new(dest)).unwrap().len();

        engine.move_card(MoveCard::new(card.clone(), dest, index));

        let after = engine.board().locate(&card).unwrap();
        prop_assert_eq!(after.column.as_str(), dest);
        prop_assert_eq!(after.index, index.min(dest_len));
        prop_assert_eq!(engine.board().card(&card).unwrap().column_id.as_str(), dest);
        prop_assert_eq!(
            engine.board().column(&source.column).unwrap().len(),
            before.column(&source.column).unwrap().len() - 1
        );
    }
}

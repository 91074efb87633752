//! Thin helpers for input layers sitting in front of the engine.
//!
//! Nothing here mutates a board. The helpers turn what a gesture or form
//! reports into instructions the engine accepts.

pub mod placement;

pub use placement::{drop_target_for, resolve_drop, resolve_move, DropTarget, Placement};

/// Trim form input, rejecting text that is empty after trimming.
///
/// The engine applies the same rule; checking here lets a form keep its
/// input instead of submitting a no-op.
///
/// ```
/// use kanban_board::adapter::normalize_content;
///
/// assert_eq!(normalize_content("  Fix login  "), Some("Fix login".to_string()));
/// assert_eq!(normalize_content(" \n "), None);
/// ```
#[must_use]
pub fn normalize_content(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

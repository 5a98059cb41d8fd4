//! Board state held in context.
//!
//! SYSTEM CONTEXT
//! ==============
//! The whole builder shares one `BoardCore` wrapped in an `RwSignal`. Every
//! DOM handler goes through [`dispatch`], which mutates the core and logs the
//! resulting actions, so components never touch the element store directly.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use board::config::BoardConfig;
use board::engine::{Action, BoardCore};
use leptos::prelude::*;

use crate::util::storage::LocalStorageRepository;

/// Engine type used by the running app.
pub type BoardState = BoardCore<LocalStorageRepository>;

/// Open the board, rehydrating from `localStorage` under the configured key.
pub fn open_board(config: BoardConfig) -> BoardState {
    let repo = LocalStorageRepository::new(config.storage_key.clone());
    BoardCore::new(repo, config)
}

/// Run one engine handler against the shared board and log what it did.
pub fn dispatch<F>(board: RwSignal<BoardState>, handler: F) -> Vec<Action>
where
    F: FnOnce(&mut BoardState) -> Vec<Action>,
{
    let mut actions = Vec::new();
    board.update(|core| actions = handler(core));
    for action in &actions {
        log::debug!("{}", summarize(action));
    }
    actions
}

/// One-line description of an action for the console.
pub fn summarize(action: &Action) -> String {
    match action {
        Action::ElementCreated(element) => {
            format!("created {} ({}) at {},{}", element.id, element.kind.as_str(), element.top, element.left)
        }
        Action::ElementMoved { id, top, left } => format!("moved {id} to {top},{left}"),
        Action::ElementEdited(element) => format!("edited {}", element.id),
        Action::ElementDeleted { id } => format!("deleted {id}"),
        Action::EditorOpened { target, .. } => format!("editor opened for {target:?}"),
        Action::EditorClosed => "editor closed".to_owned(),
        Action::SelectionChanged(Some(id)) => format!("selected {id}"),
        Action::SelectionChanged(None) => "selection cleared".to_owned(),
        Action::Imported { count } => format!("imported {count} elements"),
    }
}

//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the builder chrome and drop surface while reading and
//! writing the shared `BoardState` from Leptos context. All element mutations
//! go through `state::board::dispatch`.

pub mod board_surface;
pub mod editor_dialog;
pub mod element_view;
pub mod import_export;
pub mod sidebar;

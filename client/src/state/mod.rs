//! Reactive application state shared through Leptos context.

pub mod board;
pub mod ui;

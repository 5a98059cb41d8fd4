//! Element model and interaction engine for the drag-and-drop UI builder.
//!
//! This crate has no browser dependencies. It owns the list of placed
//! elements, their persistence through an injected repository, the JSON
//! snapshot format used for storage and import/export, and the board state
//! machine that turns pointer and keyboard input into element mutations. The
//! Leptos `client` crate only adapts DOM events into [`input::PointerEvent`]s
//! and renders what the [`engine::BoardCore`] holds.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Board state machine ([`engine::BoardCore`]) and the actions it emits |
//! | [`doc`] | Element types and the persisted [`doc::ElementStore`] |
//! | [`snapshot`] | JSON encoding of the element array (storage, export, import) |
//! | [`storage`] | [`storage::SnapshotRepository`] trait and an in-memory implementation |
//! | [`surface`] | Pointer-to-surface coordinate mapping |
//! | [`input`] | Pointer protocol, keys, drafts, and the interaction states |
//! | [`render`] | Per-type widget strategies and inline style helpers |
//! | [`config`] | Storage key, export file name, defaults, key bindings |
//! | [`consts`] | Shared constants |

pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod input;
pub mod render;
pub mod snapshot;
pub mod storage;
pub mod surface;

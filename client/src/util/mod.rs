//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, DOM events, downloads)
//! from component logic so the pure parts stay testable off the browser.

#[cfg(feature = "csr")]
pub mod download;
pub mod pointer;
pub mod storage;

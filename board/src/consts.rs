//! Shared constants for the board crate.

// ── Persistence ─────────────────────────────────────────────────

/// `localStorage` key holding the compact element snapshot.
pub const STORAGE_KEY: &str = "boardElements";

/// File name offered when the board is exported.
pub const EXPORT_FILE_NAME: &str = "board-elements.json";

// ── Elements ────────────────────────────────────────────────────

/// Prefix of every generated element id (`element-0`, `element-1`, ...).
pub const ELEMENT_ID_PREFIX: &str = "element-";

/// Font size of a fresh draft, in CSS pixels.
pub const DEFAULT_FONT_SIZE: f64 = 16.0;

/// Font weight of a fresh draft.
pub const DEFAULT_FONT_WEIGHT: &str = "normal";

// ── Rendering ───────────────────────────────────────────────────

/// Inner padding applied to every rendered widget, in CSS pixels.
pub const WIDGET_PADDING_PX: f64 = 10.0;

/// Border drawn around the selected widget.
pub const SELECTED_BORDER: &str = "2px solid red";

// ── Keys ────────────────────────────────────────────────────────

/// Key that opens the editor for the focused element.
pub const CONFIRM_KEY: &str = "Enter";

/// Key that deletes the selected element.
pub const DELETE_KEY: &str = "Delete";

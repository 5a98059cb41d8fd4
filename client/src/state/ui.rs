//! Local UI chrome state that does not belong to the board model.
//!
//! DESIGN
//! ======
//! Keeps presentation concerns (the import text area and its last result) out
//! of `BoardCore` so a failed import never touches element state.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use board::input::DraftField;

/// One editor dialog row: field, label, and HTML input type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditorRow {
    pub field: DraftField,
    pub label: &'static str,
    pub input_type: &'static str,
}

/// Editor dialog rows, top to bottom.
pub const EDITOR_ROWS: [EditorRow; 5] = [
    EditorRow { field: DraftField::Text, label: "Text", input_type: "text" },
    EditorRow { field: DraftField::Top, label: "Top", input_type: "number" },
    EditorRow { field: DraftField::Left, label: "Left", input_type: "number" },
    EditorRow { field: DraftField::FontSize, label: "Font Size", input_type: "number" },
    EditorRow { field: DraftField::FontWeight, label: "Font Weight", input_type: "text" },
];

/// Field that receives keyboard focus when the editor opens.
pub const EDITOR_FOCUS_FIELD: DraftField = DraftField::Text;

/// Outcome of the most recent import attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImportStatus {
    /// The board was replaced with this many elements.
    Imported(usize),
    /// The pasted text was rejected; the board is unchanged.
    Rejected(String),
}

impl ImportStatus {
    /// Status line shown under the import box.
    pub fn message(&self) -> String {
        match self {
            Self::Imported(1) => "Imported 1 element".to_owned(),
            Self::Imported(count) => format!("Imported {count} elements"),
            Self::Rejected(reason) => format!("Import failed: {reason}"),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

/// UI state for the side panel.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Text pasted into the import box.
    pub import_text: String,
    /// Result of the last import, if any.
    pub import_status: Option<ImportStatus>,
}

impl UiState {
    /// Record a successful import and clear the text box.
    pub fn import_succeeded(&mut self, count: usize) {
        self.import_text.clear();
        self.import_status = Some(ImportStatus::Imported(count));
    }

    /// Record a rejected import, keeping the text for correction.
    pub fn import_failed(&mut self, reason: impl Into<String>) {
        self.import_status = Some(ImportStatus::Rejected(reason.into()));
    }
}

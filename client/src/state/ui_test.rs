use super::*;

#[test]
fn ui_state_default_is_empty() {
    let state = UiState::default();
    assert!(state.import_text.is_empty());
    assert_eq!(state.import_status, None);
}

#[test]
fn import_succeeded_clears_text() {
    let mut state = UiState { import_text: "[]".to_owned(), import_status: None };
    state.import_succeeded(0);
    assert!(state.import_text.is_empty());
    assert_eq!(state.import_status, Some(ImportStatus::Imported(0)));
}

#[test]
fn import_failed_keeps_text() {
    let mut state = UiState { import_text: "[{".to_owned(), import_status: None };
    state.import_failed("EOF while parsing");
    assert_eq!(state.import_text, "[{");
    assert!(state.import_status.as_ref().is_some_and(ImportStatus::is_error));
}

#[test]
fn status_messages() {
    assert_eq!(ImportStatus::Imported(1).message(), "Imported 1 element");
    assert_eq!(ImportStatus::Imported(4).message(), "Imported 4 elements");
    assert_eq!(ImportStatus::Rejected("bad".to_owned()).message(), "Import failed: bad");
    assert!(!ImportStatus::Imported(2).is_error());
}

#[test]
fn editor_rows_cover_every_draft_field_once() {
    let fields: Vec<DraftField> = EDITOR_ROWS.iter().map(|row| row.field).collect();
    assert_eq!(fields, DraftField::ALL.to_vec());
}

#[test]
fn editor_focus_lands_on_first_row() {
    assert_eq!(EDITOR_ROWS[0].field, EDITOR_FOCUS_FIELD);
    assert_eq!(EDITOR_ROWS.iter().filter(|row| row.field == EDITOR_FOCUS_FIELD).count(), 1);
}

#[test]
fn numeric_rows_use_number_inputs() {
    for row in EDITOR_ROWS {
        let expected = if row.field.is_numeric() { "number" } else { "text" };
        assert_eq!(row.input_type, expected, "{}", row.label);
    }
}

use board::doc::{ElementFields, ElementId, ElementKind};
use board::input::EditTarget;

use super::*;

fn element() -> board::doc::Element {
    board::doc::Element {
        id: ElementId::from_seq(2),
        kind: ElementKind::Button,
        top: 10.0,
        left: 20.5,
        text: "Go".to_owned(),
        font_size: 16.0,
        font_weight: "normal".to_owned(),
    }
}

#[test]
fn open_board_uses_configured_key() {
    let core = open_board(BoardConfig::default().with_storage_key("scratch"));
    assert_eq!(core.store.repository().key(), "scratch");
    assert_eq!(core.config.storage_key, "scratch");
}

#[test]
fn open_board_outside_browser_starts_empty() {
    let core = open_board(BoardConfig::default());
    assert!(core.elements().is_empty());
    assert!(core.selection().is_none());
}

#[test]
fn summarize_element_actions() {
    assert_eq!(summarize(&Action::ElementCreated(element())), "created element-2 (button) at 10,20.5");
    assert_eq!(summarize(&Action::ElementEdited(element())), "edited element-2");
    assert_eq!(
        summarize(&Action::ElementMoved { id: ElementId::from_seq(1), top: 3.0, left: 4.0 }),
        "moved element-1 to 3,4"
    );
    assert_eq!(summarize(&Action::ElementDeleted { id: ElementId::from_seq(1) }), "deleted element-1");
}

#[test]
fn summarize_editor_and_selection_actions() {
    let opened = Action::EditorOpened { target: EditTarget::New(ElementKind::Label), draft: ElementFields::default() };
    assert_eq!(summarize(&opened), "editor opened for New(Label)");
    assert_eq!(summarize(&Action::EditorClosed), "editor closed");
    assert_eq!(summarize(&Action::SelectionChanged(Some(ElementId::from_seq(0)))), "selected element-0");
    assert_eq!(summarize(&Action::SelectionChanged(None)), "selection cleared");
    assert_eq!(summarize(&Action::Imported { count: 3 }), "imported 3 elements");
}

#[test]
fn dispatch_applies_handler_and_returns_actions() {
    Owner::new().with(|| {
        let signal = RwSignal::new(open_board(BoardConfig::default()));
        let id = ElementId::from_seq(0);
        let actions = dispatch(signal, |core| core.select(&id));
        assert_eq!(actions, vec![Action::SelectionChanged(Some(id.clone()))]);
        assert!(signal.with_untracked(|core| core.is_selected(&id)));
    });
}

//! Board interaction engine.
//!
//! [`BoardCore`] owns the element store, selection, the active interaction
//! state, and the measured drop surface. Hosts feed it pointer events, key
//! presses, clicks, and dialog edits; each handler mutates state and returns
//! the [`Action`]s that describe what changed so the host can react (focus
//! the dialog, log, re-render).
//!
//! Kept free of browser types so the full state machine is tested natively.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::config::BoardConfig;
use crate::doc::{Element, ElementFields, ElementId, ElementKind, ElementStore};
use crate::input::{
    DraftField, DragPayload, EditTarget, InputState, Key, Modifiers, PointerEvent, PointerPhase, PointerSource, UiState,
};
use crate::snapshot::{self, SnapshotError};
use crate::storage::SnapshotRepository;
use crate::surface::{Position, SurfaceRect};

/// Actions returned from handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ElementCreated(Element),
    ElementMoved { id: ElementId, top: f64, left: f64 },
    ElementEdited(Element),
    ElementDeleted { id: ElementId },
    EditorOpened { target: EditTarget, draft: ElementFields },
    EditorClosed,
    SelectionChanged(Option<ElementId>),
    Imported { count: usize },
}

/// Core board state.
pub struct BoardCore<R> {
    pub store: ElementStore<R>,
    pub ui: UiState,
    pub input: InputState,
    pub surface: SurfaceRect,
    pub config: BoardConfig,
}

impl<R: SnapshotRepository> BoardCore<R> {
    /// Open the board, rehydrating elements from `repo`.
    pub fn new(repo: R, config: BoardConfig) -> Self {
        Self {
            store: ElementStore::open(repo),
            ui: UiState::default(),
            input: InputState::default(),
            surface: SurfaceRect::default(),
            config,
        }
    }

    // --- Geometry ---

    /// Record the current bounding box of the drop surface.
    pub fn set_surface(&mut self, surface: SurfaceRect) {
        self.surface = surface;
    }

    // --- Pointer protocol ---

    /// Handle one step of a mouse or touch gesture.
    pub fn on_pointer(&mut self, event: PointerEvent) -> Vec<Action> {
        match &event.phase {
            PointerPhase::Start(payload) => {
                self.begin_drag(payload.clone(), event.source);
                Vec::new()
            }
            PointerPhase::Move => self.drag_move(&event),
            PointerPhase::End => self.drop_at(&event),
            PointerPhase::Cancel => match std::mem::take(&mut self.input) {
                InputState::Dragging { payload, origin, .. } => {
                    log::debug!("drag cancelled ({:?})", event.source);
                    self.restore(payload, origin)
                }
                other => {
                    self.input = other;
                    Vec::new()
                }
            },
        }
    }

    fn begin_drag(&mut self, payload: DragPayload, source: PointerSource) {
        if self.input.is_modal() {
            log::debug!("drag ignored while editor is open");
            return;
        }
        let origin = match &payload {
            DragPayload::Existing(id) => self.store.get(id).map(|e| Position { top: e.top, left: e.left }),
            DragPayload::Palette(_) => None,
        };
        log::debug!("drag start {payload:?} ({source:?})");
        self.input = InputState::Dragging { payload, source, origin };
    }

    fn drag_move(&mut self, event: &PointerEvent) -> Vec<Action> {
        let InputState::Dragging { payload: DragPayload::Existing(id), .. } = &self.input else {
            return Vec::new();
        };
        if !self.surface.contains(event.client) {
            return Vec::new();
        }
        let id = id.clone();
        let pos = Position::from(self.surface.to_local(event.client));
        self.move_element(id, pos)
    }

    fn drop_at(&mut self, event: &PointerEvent) -> Vec<Action> {
        let InputState::Dragging { payload, origin, .. } = std::mem::take(&mut self.input) else {
            return Vec::new();
        };
        if !self.surface.contains(event.client) {
            log::debug!("drop outside surface ignored");
            return self.restore(payload, origin);
        }
        let pos = Position::from(self.surface.to_local(event.client));
        match payload {
            DragPayload::Existing(id) => self.move_element(id, pos),
            DragPayload::Palette(kind) => {
                let draft = ElementFields::at(
                    pos.top,
                    pos.left,
                    self.config.default_font_size,
                    self.config.default_font_weight.clone(),
                );
                self.input = InputState::PendingCreate { kind, draft: draft.clone() };
                vec![Action::EditorOpened { target: EditTarget::New(kind), draft }]
            }
        }
    }

    /// Put an element dragged by live moves back where its drag began.
    fn restore(&mut self, payload: DragPayload, origin: Option<Position>) -> Vec<Action> {
        let (DragPayload::Existing(id), Some(origin)) = (payload, origin) else {
            return Vec::new();
        };
        let current = self.store.get(&id).map(|e| Position { top: e.top, left: e.left });
        if current.is_none_or(|pos| pos == origin) {
            return Vec::new();
        }
        log::debug!("restoring {id} to {},{}", origin.top, origin.left);
        self.move_element(id, origin)
    }

    fn move_element(&mut self, id: ElementId, pos: Position) -> Vec<Action> {
        if self.store.move_to(&id, pos.top, pos.left) {
            vec![Action::ElementMoved { id, top: pos.top, left: pos.left }]
        } else {
            Vec::new()
        }
    }

    // --- Selection and keys ---

    /// Select `id` (click).
    pub fn select(&mut self, id: &ElementId) -> Vec<Action> {
        if self.ui.selected_id.as_ref() == Some(id) {
            return Vec::new();
        }
        self.ui.selected_id = Some(id.clone());
        vec![Action::SelectionChanged(Some(id.clone()))]
    }

    /// Handle a key press. `focused` is the element holding keyboard focus, if any.
    ///
    /// The confirm key (without Ctrl) opens the editor on `focused`; a delete
    /// key removes the selection. Both are ignored while the editor is open.
    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers, focused: Option<&ElementId>) -> Vec<Action> {
        if self.input.is_modal() {
            return Vec::new();
        }
        if self.config.is_confirm_key(key.as_str()) && !modifiers.ctrl {
            return match focused {
                Some(id) => self.open_editor(id),
                None => Vec::new(),
            };
        }
        if self.config.is_delete_key(key.as_str()) {
            return self.delete_selected();
        }
        Vec::new()
    }

    fn open_editor(&mut self, id: &ElementId) -> Vec<Action> {
        let Some(draft) = self.store.get(id).map(Element::fields) else {
            return Vec::new();
        };
        let mut actions = self.select(id);
        self.input = InputState::Editing { id: id.clone(), draft: draft.clone() };
        actions.push(Action::EditorOpened { target: EditTarget::Existing(id.clone()), draft });
        actions
    }

    /// Delete the selected element and clear the selection.
    pub fn delete_selected(&mut self) -> Vec<Action> {
        let Some(id) = self.ui.selected_id.take() else {
            return Vec::new();
        };
        let mut actions = Vec::new();
        if self.store.delete(&id).is_some() {
            actions.push(Action::ElementDeleted { id });
        }
        actions.push(Action::SelectionChanged(None));
        actions
    }

    // --- Editor ---

    /// Write a raw dialog value into the open draft.
    pub fn update_draft(&mut self, field: DraftField, raw: &str) {
        if let Some(draft) = self.input.draft_mut() {
            field.apply(draft, raw);
        }
    }

    /// Commit the open editor: create the pending element or edit the target.
    pub fn save_editor(&mut self) -> Vec<Action> {
        let state = std::mem::take(&mut self.input);
        let mut actions = match state {
            InputState::PendingCreate { kind, draft } => {
                let element = self.store.create(kind, draft);
                log::debug!("created {} ({})", element.id, kind.as_str());
                vec![Action::ElementCreated(element)]
            }
            InputState::Editing { id, draft } => {
                if self.store.edit(&id, draft) {
                    self.store.get(&id).cloned().map(Action::ElementEdited).into_iter().collect()
                } else {
                    Vec::new()
                }
            }
            other => {
                self.input = other;
                return Vec::new();
            }
        };
        actions.push(Action::EditorClosed);
        actions
    }

    /// Close the editor without saving.
    pub fn cancel_editor(&mut self) -> Vec<Action> {
        if !self.input.is_modal() {
            return Vec::new();
        }
        self.input = InputState::Idle;
        vec![Action::EditorClosed]
    }

    // --- Import / export ---

    /// Pretty-printed JSON of every element, for download.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Encode`] if serialization fails.
    pub fn export_json(&self) -> Result<String, SnapshotError> {
        let json = snapshot::encode_pretty(self.store.elements())?;
        log::info!("exported {} elements", self.store.len());
        Ok(json)
    }

    /// Replace every element with the contents of `raw`.
    ///
    /// On success the selection is cleared and any open editor closed. On
    /// failure nothing changes.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Decode`] when `raw` is not an element array.
    pub fn import_json(&mut self, raw: &str) -> Result<Vec<Action>, SnapshotError> {
        let elements = snapshot::decode(raw).inspect_err(|e| log::warn!("import rejected: {e}"))?;
        let count = elements.len();
        self.store.replace_all(elements);
        log::info!("imported {count} elements");

        let mut actions = Vec::new();
        if self.ui.selected_id.take().is_some() {
            actions.push(Action::SelectionChanged(None));
        }
        if self.input.is_modal() {
            actions.push(Action::EditorClosed);
        }
        self.input = InputState::Idle;
        actions.push(Action::Imported { count });
        Ok(actions)
    }

    // --- Queries ---

    /// Elements in render order.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        self.store.elements()
    }

    /// The currently selected element, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&ElementId> {
        self.ui.selected_id.as_ref()
    }

    /// Whether `id` is selected.
    #[must_use]
    pub fn is_selected(&self, id: &ElementId) -> bool {
        self.ui.selected_id.as_ref() == Some(id)
    }

    /// The draft shown in the open editor.
    #[must_use]
    pub fn draft(&self) -> Option<&ElementFields> {
        self.input.draft()
    }

    /// Kind of element the open editor refers to, for the dialog title.
    #[must_use]
    pub fn editor_kind(&self) -> Option<ElementKind> {
        match self.input.edit_target()? {
            EditTarget::New(kind) => Some(kind),
            EditTarget::Existing(id) => self.store.get(&id).map(|e| e.kind),
        }
    }

    /// Look up an element by id.
    #[must_use]
    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.store.get(id)
    }
}

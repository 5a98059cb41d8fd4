//! Input model: the pointer protocol, keys, and the interaction state machine.
//!
//! Mouse drag-and-drop and touch gestures are both adapted by the host into
//! [`PointerEvent`]s carrying a [`PointerPhase`] and a client-space position.
//! The engine never learns which DOM events produced them beyond the
//! [`PointerSource`] tag, which is kept for logging.
//!
//! `InputState` is the active interaction: an in-flight drag, or an open
//! editor holding a draft of the fields to save.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::doc::{ElementFields, ElementId, ElementKind};
use crate::surface::{Point, Position};

/// Which device produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    /// Mouse, through native HTML drag-and-drop.
    Mouse,
    /// Finger, through touch events.
    Touch,
}

/// What is being dragged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragPayload {
    /// A new block type taken from the sidebar palette.
    Palette(ElementKind),
    /// An element already on the board.
    Existing(ElementId),
}

/// Stage of a pointer gesture.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerPhase {
    /// Gesture begins on a draggable source.
    Start(DragPayload),
    /// Pointer moved while the gesture is active.
    Move,
    /// Pointer released (drop).
    End,
    /// Gesture aborted (drag cancelled, touch interrupted).
    Cancel,
}

/// One step of a pointer gesture, in client coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    pub source: PointerSource,
    pub phase: PointerPhase,
    pub client: Point,
}

impl PointerEvent {
    #[must_use]
    pub fn new(source: PointerSource, phase: PointerPhase, client: Point) -> Self {
        Self { source, phase, client }
    }
}

/// Keyboard modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// A keyboard key, named as the browser reports it (`"Enter"`, `"Delete"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// The id of the currently selected element, if any.
    pub selected_id: Option<ElementId>,
}

/// What the open editor will do on save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditTarget {
    /// Create a new element of this kind.
    New(ElementKind),
    /// Overwrite the fields of an existing element.
    Existing(ElementId),
}

impl EditTarget {
    /// Kind shown in the dialog title, if known without a store lookup.
    #[must_use]
    pub fn new_kind(&self) -> Option<ElementKind> {
        match self {
            Self::New(kind) => Some(*kind),
            Self::Existing(_) => None,
        }
    }
}

/// Internal state for the interaction state machine.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress and no editor open.
    #[default]
    Idle,
    /// A palette item or an existing element is being dragged.
    Dragging {
        payload: DragPayload,
        source: PointerSource,
        /// Where the dragged element sat when the drag began. `None` for
        /// palette drags.
        origin: Option<Position>,
    },
    /// A palette item was dropped; the editor is open with a new-element draft.
    PendingCreate {
        kind: ElementKind,
        draft: ElementFields,
    },
    /// The editor is open on an existing element.
    Editing {
        id: ElementId,
        draft: ElementFields,
    },
}

impl InputState {
    /// Whether the editor dialog is open.
    #[must_use]
    pub fn is_modal(&self) -> bool {
        matches!(self, Self::PendingCreate { .. } | Self::Editing { .. })
    }

    /// The draft being edited, if the editor is open.
    #[must_use]
    pub fn draft(&self) -> Option<&ElementFields> {
        match self {
            Self::PendingCreate { draft, .. } | Self::Editing { draft, .. } => Some(draft),
            Self::Idle | Self::Dragging { .. } => None,
        }
    }

    /// Mutable access to the open draft.
    pub fn draft_mut(&mut self) -> Option<&mut ElementFields> {
        match self {
            Self::PendingCreate { draft, .. } | Self::Editing { draft, .. } => Some(draft),
            Self::Idle | Self::Dragging { .. } => None,
        }
    }

    /// What saving the open editor would do.
    #[must_use]
    pub fn edit_target(&self) -> Option<EditTarget> {
        match self {
            Self::PendingCreate { kind, .. } => Some(EditTarget::New(*kind)),
            Self::Editing { id, .. } => Some(EditTarget::Existing(id.clone())),
            Self::Idle | Self::Dragging { .. } => None,
        }
    }
}

/// One editable field of the draft, as typed into the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Text,
    Top,
    Left,
    FontSize,
    FontWeight,
}

impl DraftField {
    /// Every field, in dialog order.
    pub const ALL: [DraftField; 5] = [Self::Text, Self::Top, Self::Left, Self::FontSize, Self::FontWeight];

    /// Current value of this field as dialog text.
    #[must_use]
    pub fn read(self, draft: &ElementFields) -> String {
        match self {
            Self::Text => draft.text.clone(),
            Self::FontWeight => draft.font_weight.clone(),
            Self::Top => draft.top.to_string(),
            Self::Left => draft.left.to_string(),
            Self::FontSize => draft.font_size.to_string(),
        }
    }

    /// Whether the dialog should offer a numeric input.
    #[must_use]
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Top | Self::Left | Self::FontSize)
    }

    /// Write the raw dialog value into `draft`.
    ///
    /// Numeric fields that do not parse keep their previous value, so a
    /// half-typed number never blanks a coordinate.
    pub fn apply(self, draft: &mut ElementFields, raw: &str) {
        match self {
            Self::Text => draft.text = raw.to_owned(),
            Self::FontWeight => draft.font_weight = raw.to_owned(),
            Self::Top => draft.top = parse_number(raw).unwrap_or(draft.top),
            Self::Left => draft.left = parse_number(raw).unwrap_or(draft.left),
            Self::FontSize => draft.font_size = parse_number(raw).unwrap_or(draft.font_size),
        }
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => None,
    }
}

//! DOM event adapters into the board pointer protocol.
//!
//! Mouse input arrives as native HTML drag-and-drop (`dragstart`, `drop`,
//! `dragend`); touch input arrives as `touchstart`/`touchmove`/`touchend`.
//! Both are turned into `board::input::PointerEvent`s here so the engine sees
//! one vocabulary. Keyboard helpers live here too.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

use board::input::{DragPayload, Modifiers, PointerEvent, PointerPhase, PointerSource};
use board::surface::Point;

/// Data-transfer format set on `dragstart`; browsers refuse to drag without one.
pub const DRAG_FORMAT: &str = "text";

/// Text placed in the drag data transfer for `payload`.
pub fn transfer_text(payload: &DragPayload) -> String {
    match payload {
        DragPayload::Palette(kind) => kind.as_str().to_owned(),
        DragPayload::Existing(id) => id.to_string(),
    }
}

/// Build a pointer event from integer client coordinates.
pub fn pointer_at(source: PointerSource, phase: PointerPhase, client_x: i32, client_y: i32) -> PointerEvent {
    PointerEvent::new(source, phase, Point::new(f64::from(client_x), f64::from(client_y)))
}

/// Map DOM modifier flags.
pub fn map_modifiers(shift: bool, ctrl: bool, alt: bool, meta: bool) -> Modifiers {
    Modifiers { shift, ctrl, alt, meta }
}

/// Selector for targets whose keystrokes belong to text entry, not the board.
pub const TEXT_ENTRY_SELECTOR: &str = "textarea, input:not([readonly]), [contenteditable]";

#[cfg(feature = "csr")]
pub use dom::*;

#[cfg(feature = "csr")]
mod dom {
    use board::input::{Key, PointerEvent, PointerPhase, PointerSource};
    use board::surface::SurfaceRect;
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;

    use super::{DRAG_FORMAT, TEXT_ENTRY_SELECTOR, map_modifiers, pointer_at, transfer_text};
    use crate::state::board::BoardState;

    /// Pointer event for a mouse drag-and-drop DOM event.
    pub fn from_drag(ev: &web_sys::DragEvent, phase: PointerPhase) -> PointerEvent {
        pointer_at(PointerSource::Mouse, phase, ev.client_x(), ev.client_y())
    }

    /// Pointer event for a touch DOM event, using the first changed touch.
    ///
    /// `touchend` has no active touches left, so the changed list is the only
    /// place the release position is reported.
    pub fn from_touch(ev: &web_sys::TouchEvent, phase: PointerPhase) -> Option<PointerEvent> {
        let touch = ev.changed_touches().get(0)?;
        Some(pointer_at(PointerSource::Touch, phase, touch.client_x(), touch.client_y()))
    }

    /// Tag the drag data transfer so the browser starts the drag.
    pub fn mark_drag(ev: &web_sys::DragEvent, phase: &PointerPhase) {
        let PointerPhase::Start(payload) = phase else {
            return;
        };
        if let Some(transfer) = ev.data_transfer() {
            if let Err(e) = transfer.set_data(DRAG_FORMAT, &transfer_text(payload)) {
                log::warn!("could not set drag data: {e:?}");
            }
        }
    }

    /// Key and modifiers of a keyboard event.
    pub fn from_key(ev: &web_sys::KeyboardEvent) -> (Key, board::input::Modifiers) {
        (Key(ev.key()), map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key()))
    }

    /// Whether a key event was typed into a text field rather than the board.
    pub fn targets_text_entry(ev: &web_sys::KeyboardEvent) -> bool {
        let Some(target) = ev.target() else {
            return false;
        };
        let Some(element) = target.dyn_ref::<web_sys::Element>() else {
            return false;
        };
        match element.closest(TEXT_ENTRY_SELECTOR) {
            Ok(found) => found.is_some(),
            Err(e) => {
                log::warn!("text-entry selector failed: {e:?}");
                false
            }
        }
    }

    /// Measure the drop surface and store its rectangle on the board.
    ///
    /// Called before every pointer dispatch so positions stay relative to
    /// wherever the surface currently sits in the page.
    pub fn refresh_surface(board: RwSignal<BoardState>, surface: NodeRef<leptos::html::Div>) {
        let Some(element) = surface.get_untracked() else {
            return;
        };
        let rect = element.get_bounding_client_rect();
        let measured = SurfaceRect::new(rect.left(), rect.top(), rect.width(), rect.height());
        board.update_untracked(|core| core.set_surface(measured));
    }
}

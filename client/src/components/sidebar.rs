//! Sidebar palette of draggable block types.
//!
//! DESIGN
//! ======
//! Entries hold no state. A drag (mouse or touch) only tells the board which
//! kind is in flight; the board decides what a drop means. Touches keep
//! targeting the entry they started on, so palette touch moves and releases
//! are forwarded to the board from here.

use board::doc::ElementKind;
use board::input::{DragPayload, PointerPhase};
use leptos::prelude::*;

use crate::components::board_surface::BoardSurfaceRef;
use crate::state::board::{BoardState, dispatch};
use crate::util::pointer::{from_drag, from_touch, mark_drag, refresh_surface};

/// Palette of block types.
#[component]
pub fn Sidebar() -> impl IntoView {
    let entries = ElementKind::ALL.into_iter().map(|kind| view! { <PaletteEntry kind=kind/> }).collect_view();

    view! {
        <div class="sidebar">
            <div class="sidebar__title">"BLOCKS"</div>
            <div class="sidebar__blocks">{entries}</div>
        </div>
    }
}

#[component]
fn PaletteEntry(kind: ElementKind) -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let BoardSurfaceRef(surface) = expect_context::<BoardSurfaceRef>();

    let on_drag_start = move |ev: leptos::ev::DragEvent| {
        let phase = PointerPhase::Start(DragPayload::Palette(kind));
        mark_drag(&ev, &phase);
        let event = from_drag(&ev, phase);
        dispatch(board, |core| core.on_pointer(event));
    };

    let on_drag_end = move |ev: leptos::ev::DragEvent| {
        let event = from_drag(&ev, PointerPhase::Cancel);
        dispatch(board, |core| core.on_pointer(event));
    };

    let on_touch_start = move |ev: leptos::ev::TouchEvent| {
        if let Some(event) = from_touch(&ev, PointerPhase::Start(DragPayload::Palette(kind))) {
            dispatch(board, |core| core.on_pointer(event));
        }
    };

    let on_touch_move = move |ev: leptos::ev::TouchEvent| {
        ev.prevent_default();
    };

    let on_touch_end = move |ev: leptos::ev::TouchEvent| {
        refresh_surface(board, surface);
        if let Some(event) = from_touch(&ev, PointerPhase::End) {
            dispatch(board, |core| core.on_pointer(event));
        }
    };

    let on_touch_cancel = move |ev: leptos::ev::TouchEvent| {
        if let Some(event) = from_touch(&ev, PointerPhase::Cancel) {
            dispatch(board, |core| core.on_pointer(event));
        }
    };

    view! {
        <div
            class="sidebar__block"
            draggable="true"
            attr:data-kind=kind.as_str()
            on:dragstart=on_drag_start
            on:dragend=on_drag_end
            on:touchstart=on_touch_start
            on:touchmove=on_touch_move
            on:touchend=on_touch_end
            on:touchcancel=on_touch_cancel
        >
            <span class="sidebar__grip" aria-hidden="true">"⋮⋮"</span>
            {kind.widget().palette_label()}
        </div>
    }
}

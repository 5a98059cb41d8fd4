//! Drop surface that renders placed elements and receives drops.
//!
//! ARCHITECTURE
//! ============
//! The surface owns no element state. It measures itself before every pointer
//! dispatch, forwards drops and touch gestures to `BoardCore`, and re-renders
//! the element list whenever the board signal changes. Each placed element is
//! an absolutely positioned frame around the widget view from
//! `element_view`.

use board::doc::Element;
use board::input::{DragPayload, InputState, PointerPhase};
use board::render::{Widget, frame_style};
use leptos::prelude::*;

use crate::components::editor_dialog::EditorDialog;
use crate::components::element_view::view_for;
use crate::state::board::{BoardState, dispatch};
use crate::util::pointer::{from_drag, from_key, from_touch, mark_drag, refresh_surface, targets_text_entry};

/// Node of the drop surface, shared so palette touches can measure it.
#[derive(Clone, Copy)]
pub struct BoardSurfaceRef(pub NodeRef<leptos::html::Div>);

/// Canvas area where blocks are dropped, moved, and selected.
#[component]
pub fn BoardSurface() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let BoardSurfaceRef(surface) = expect_context::<BoardSurfaceRef>();

    let keys = window_event_listener(leptos::ev::keydown, move |ev| {
        if targets_text_entry(&ev) {
            return;
        }
        let (key, modifiers) = from_key(&ev);
        dispatch(board, |core| core.on_key_down(&key, modifiers, None));
    });
    on_cleanup(move || keys.remove());

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        refresh_surface(board, surface);
        let event = from_drag(&ev, PointerPhase::End);
        dispatch(board, |core| core.on_pointer(event));
    };

    let on_touch_move = move |ev: leptos::ev::TouchEvent| {
        refresh_surface(board, surface);
        if board.with_untracked(|core| matches!(core.input, InputState::Dragging { .. })) {
            ev.prevent_default();
        }
        if let Some(event) = from_touch(&ev, PointerPhase::Move) {
            dispatch(board, |core| core.on_pointer(event));
        }
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

    let elements = move || {
        board.with(|core| {
            core.elements()
                .iter()
                .map(|element| {
                    let selected = core.is_selected(&element.id);
                    view! { <ElementFrame element=element.clone() selected=selected/> }
                })
                .collect_view()
        })
    };

    view! {
        <div
            class="board"
            node_ref=surface
            on:dragover=on_drag_over
            on:drop=on_drop
            on:touchmove=on_touch_move
            on:touchend=on_touch_end
            on:touchcancel=on_touch_cancel
        >
            {elements}
        </div>
        <Show when=move || board.with(|core| core.input.is_modal())>
            <EditorDialog/>
        </Show>
    }
}

/// One placed element: a positioned, draggable frame around its widget.
#[component]
fn ElementFrame(element: Element, selected: bool) -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let widget = view_for(element.kind);
    let id = element.id.clone();

    let on_drag_start = {
        let id = id.clone();
        move |ev: leptos::ev::DragEvent| {
            let phase = PointerPhase::Start(DragPayload::Existing(id.clone()));
            mark_drag(&ev, &phase);
            let event = from_drag(&ev, phase);
            dispatch(board, |core| core.on_pointer(event));
        }
    };

    let on_drag_end = move |ev: leptos::ev::DragEvent| {
        let event = from_drag(&ev, PointerPhase::Cancel);
        dispatch(board, |core| core.on_pointer(event));
    };

    let on_touch_start = {
        let id = id.clone();
        move |ev: leptos::ev::TouchEvent| {
            if let Some(event) = from_touch(&ev, PointerPhase::Start(DragPayload::Existing(id.clone()))) {
                dispatch(board, |core| core.on_pointer(event));
            }
        }
    };

    let on_click = {
        let id = id.clone();
        move |_| {
            dispatch(board, |core| core.select(&id));
        }
    };

    let on_key_down = move |ev: leptos::ev::KeyboardEvent| {
        ev.stop_propagation();
        let (key, modifiers) = from_key(&ev);
        let actions = dispatch(board, |core| core.on_key_down(&key, modifiers, Some(&id)));
        if !actions.is_empty() {
            ev.prevent_default();
        }
    };

    view! {
        <div
            class=widget.frame_class()
            style=frame_style(&element)
            draggable="true"
            attr:data-id=element.id.to_string()
            on:dragstart=on_drag_start
            on:dragend=on_drag_end
            on:touchstart=on_touch_start
            on:click=on_click
            on:keydown=on_key_down
        >
            {widget.view(&element, selected)}
        </div>
    }
}

//! Modal dialog for editing a new or existing element's fields.

use leptos::prelude::*;

use crate::state::board::{BoardState, dispatch};
use crate::state::ui::{EDITOR_FOCUS_FIELD, EDITOR_ROWS};

/// Dialog shown while the board's editor is open.
///
/// Inputs write straight into the board draft; nothing is committed to the
/// element store until Save.
#[component]
pub fn EditorDialog() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();

    let title = move || {
        let kind = board.with(|core| core.editor_kind());
        kind.map_or_else(|| "Edit".to_owned(), |kind| format!("Edit {}", kind.as_str()))
    };

    let on_cancel = move || {
        dispatch(board, |core| core.cancel_editor());
    };
    let on_save = move || {
        dispatch(board, |core| core.save_editor());
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        ev.stop_propagation();
        match ev.key().as_str() {
            "Escape" => {
                ev.prevent_default();
                on_cancel();
            }
            "Enter" => {
                ev.prevent_default();
                on_save();
            }
            _ => {}
        }
    };

    let focus_input = NodeRef::<leptos::html::Input>::new();
    Effect::new(move |_| {
        if let Some(input) = focus_input.get() {
            if let Err(e) = input.focus() {
                log::warn!("could not focus editor input: {e:?}");
            }
        }
    });

    let rows = EDITOR_ROWS
        .into_iter()
        .map(|row| {
            let (field, label) = (row.field, row.label);
            let node = if field == EDITOR_FOCUS_FIELD { focus_input } else { NodeRef::new() };
            let initial = board.with_untracked(|core| core.draft().map(|draft| field.read(draft)).unwrap_or_default());
            let step = field.is_numeric().then_some("any");
            view! {
                <label class="dialog__label">
                    {label}
                    <input
                        class="dialog__input"
                        type=row.input_type
                        node_ref=node
                        step=step
                        attr:data-field=label
                        value=initial
                        on:input=move |ev| {
                            let raw = event_target_value(&ev);
                            board.update(|core| core.update_draft(field, &raw));
                        }
                    />
                </label>
            }
        })
        .collect_view();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel()>
            <div
                class="dialog dialog--editor"
                role="dialog"
                aria-modal="true"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <div class="dialog__header">
                    <span class="dialog__title">{title}</span>
                    <button class="dialog__close" title="Close" on:click=move |_| on_cancel()>
                        "×"
                    </button>
                </div>
                {rows}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel()>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_save()>
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}

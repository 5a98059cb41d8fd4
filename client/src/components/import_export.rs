//! Export and import panel for the board snapshot.
//!
//! Export downloads the pretty-printed element list. Import replaces the board
//! with pasted JSON; a rejected import leaves the board untouched and reports
//! the reason under the text box.

use board::engine::Action;
use leptos::prelude::*;

use crate::state::board::{BoardState, summarize};
use crate::state::ui::UiState;
use crate::util::download::download_json;

/// Side panel with the export button and the import text box.
#[component]
pub fn ImportExport() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_export = move |_| {
        let (exported, file_name) =
            board.with_untracked(|core| (core.export_json(), core.config.export_file_name.clone()));
        match exported {
            Ok(json) => {
                if let Err(e) = download_json(&file_name, &json) {
                    log::warn!("export download failed: {e:?}");
                }
            }
            Err(e) => log::warn!("export failed: {e}"),
        }
    };

    let on_import = move |_| {
        let raw = ui.with_untracked(|u| u.import_text.clone());
        let mut outcome = None;
        board.update(|core| outcome = Some(core.import_json(&raw)));
        match outcome {
            Some(Ok(actions)) => {
                for action in &actions {
                    log::debug!("{}", summarize(action));
                }
                let count = actions
                    .iter()
                    .find_map(|action| match action {
                        Action::Imported { count } => Some(*count),
                        _ => None,
                    })
                    .unwrap_or_default();
                ui.update(|u| u.import_succeeded(count));
            }
            Some(Err(e)) => ui.update(|u| u.import_failed(e.to_string())),
            None => {}
        }
    };

    let on_clear_status = move |_| ui.update(|u| u.import_status = None);

    view! {
        <div class="import-export">
            <div class="import-export__title">"EXPORT / IMPORT"</div>
            <button class="btn btn--primary import-export__export" on:click=on_export>
                "Export to JSON"
            </button>
            <textarea
                class="import-export__text"
                placeholder="Paste exported JSON here"
                prop:value=move || ui.with(|u| u.import_text.clone())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    ui.update(|u| u.import_text = text);
                }
            ></textarea>
            <button class="btn import-export__import" on:click=on_import>
                "Import JSON"
            </button>
            {move || {
                ui.with(|u| u.import_status.clone())
                    .map(|status| {
                        view! {
                            <p
                                class="import-export__status"
                                class:import-export__status--error=status.is_error()
                                on:click=on_clear_status
                            >
                                {status.message()}
                            </p>
                        }
                    })
            }}
        </div>
    }
}

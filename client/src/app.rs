//! Root application component and context providers.

use board::config::BoardConfig;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::board_surface::{BoardSurface, BoardSurfaceRef};
use crate::components::import_export::ImportExport;
use crate::components::sidebar::Sidebar;
use crate::state::board::open_board;
use crate::state::ui::UiState;

/// `<meta>` tag whose `content` may carry a JSON `BoardConfig` override.
const CONFIG_META_SELECTOR: &str = "meta[name=builder-config]";

/// Root application component.
///
/// Opens the board from `localStorage` and provides it, the side panel state,
/// and the drop surface node to every child.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let board = RwSignal::new(open_board(load_config()));
    let ui = RwSignal::new(UiState::default());

    provide_context(board);
    provide_context(ui);
    provide_context(BoardSurfaceRef(NodeRef::new()));

    view! {
        <Title text="UI Builder"/>
        <main class="builder">
            <section class="builder__canvas">
                <BoardSurface/>
            </section>
            <aside class="builder__sidebar">
                <Sidebar/>
                <ImportExport/>
            </aside>
        </main>
    }
}

/// Read the page's config override, falling back to defaults.
fn load_config() -> BoardConfig {
    let Some(raw) = config_meta_content() else {
        return BoardConfig::default();
    };
    match BoardConfig::from_json(&raw) {
        Ok(config) => {
            log::info!("using page config (storage key {})", config.storage_key);
            config
        }
        Err(e) => {
            log::warn!("ignoring invalid builder-config meta: {e}");
            BoardConfig::default()
        }
    }
}

fn config_meta_content() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = match document.query_selector(CONFIG_META_SELECTOR) {
        Ok(meta) => meta?,
        Err(e) => {
            log::warn!("could not look up builder-config meta: {e:?}");
            return None;
        }
    };
    meta.get_attribute("content").filter(|content| !content.trim().is_empty())
}

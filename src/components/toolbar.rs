//! Top bar with the color-theme toggle.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Header toolbar; persistence and document styling react to the signal in
/// the app root.
#[component]
pub fn Toolbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <header class="toolbar">
            <span class="toolbar__spacer"></span>
            <button
                class="btn toolbar__dark-toggle"
                on:click=move |_| ui.update(|u| u.dark_mode = !u.dark_mode)
                title="Toggle dark mode"
            >
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>
        </header>
    }
}

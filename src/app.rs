//! Root application component with context providers and theme wiring.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::pages::home::HomePage;
use crate::state::toast::ToastState;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shared state contexts, seeds the color theme from storage or the
/// OS signal, and tracks OS theme changes until an explicit preference is
/// stored.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let toast = RwSignal::new(ToastState::default());
    provide_context(ui);
    provide_context(toast);

    #[cfg(feature = "hydrate")]
    {
        let initial = crate::util::dark_mode::read_preference();
        ui.update(|u| u.dark_mode = initial);

        let listener = crate::util::dark_mode::watch_system_preference(move |prefers_dark| {
            ui.update(|u| u.dark_mode = prefers_dark);
        });
        on_cleanup(move || {
            if let Some(listener) = listener {
                listener.unsubscribe();
            }
        });
    }

    // Mirror every preference change onto the document and into storage.
    Effect::new(move || {
        let enabled = ui.get().dark_mode;
        crate::util::dark_mode::apply(enabled);
        crate::util::dark_mode::persist(enabled);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/tunedrop.css"/>
        <Title text="TuneDrop"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
        <ToastHost/>
    }
}

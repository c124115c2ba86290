//! Landing page with the link submission form.
//!
//! ARCHITECTURE
//! ============
//! The page owns the submission lifecycle: it normalizes the pasted link,
//! drives the four-state status indicator, and hands the resolved media link
//! to the browser capability. Lookup and extraction details live in `net` and
//! `util` so this module stays orchestration-only.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::toolbar::Toolbar;
use crate::state::toast::{ToastKind, ToastState};

/// Lifecycle of a single link submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub(crate) enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Trim the pasted link; `None` rejects an empty submission before any
/// lookup work starts.
pub(crate) fn normalized_link_input(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

/// Landing page: one form that turns a pasted YouTube link into a download
/// opened in a new tab.
#[component]
pub fn HomePage() -> impl IntoView {
    let link_input = RwSignal::new(String::new());
    let status = RwSignal::new(SubmissionStatus::Idle);
    let toast = expect_context::<RwSignal<ToastState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get() == SubmissionStatus::Loading {
            return;
        }
        let Some(link) = normalized_link_input(&link_input.get()) else {
            return;
        };

        status.set(SubmissionStatus::Loading);
        toast.update(|t| t.show(ToastKind::Loading, "Processing download..."));

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let video_id = crate::util::video_id::extract_video_id(&link);
            match crate::net::api::resolve_media_link(&video_id).await {
                Ok(media_link) => {
                    crate::util::browser::open_in_new_tab(&media_link);
                    status.set(SubmissionStatus::Success);
                    toast.update(|t| t.show(ToastKind::Success, "Download started!"));
                }
                Err(e) => {
                    log::error!("lookup failed: {e}");
                    status.set(SubmissionStatus::Error);
                    toast.update(|t| {
                        t.show(ToastKind::Error, "Could not fetch that track. Try again.");
                    });
                }
            }
            // Clear the field after every attempt, success or failure.
            link_input.set(String::new());
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = link;
    };

    view! {
        <div class="home-page">
            <Toolbar/>

            <main class="home-page__main">
                <div class="drop-card">
                    <div class="drop-card__icon" aria-hidden="true">"♪"</div>
                    <h1 class="drop-card__title">"TuneDrop"</h1>
                    <p class="drop-card__subtitle">"Grab your favorite tracks from YouTube"</p>

                    <form class="drop-form" on:submit=on_submit>
                        <div class="drop-form__field">
                            <input
                                class="drop-form__input"
                                type="text"
                                placeholder="Paste a YouTube link here (or a bare video id)"
                                prop:value=move || link_input.get()
                                on:input=move |ev| link_input.set(event_target_value(&ev))
                            />
                            <Show when=move || !link_input.get().is_empty()>
                                <button
                                    type="button"
                                    class="drop-form__clear"
                                    title="Clear"
                                    on:click=move |_| link_input.set(String::new())
                                >
                                    "×"
                                </button>
                            </Show>
                        </div>
                        <button
                            class="drop-form__submit"
                            type="submit"
                            disabled=move || {
                                link_input.get().is_empty() || status.get() == SubmissionStatus::Loading
                            }
                        >
                            {move || {
                                if status.get() == SubmissionStatus::Loading {
                                    "Fetching..."
                                } else {
                                    "Download"
                                }
                            }}
                        </button>
                    </form>

                    <Show when=move || status.get() == SubmissionStatus::Success>
                        <p class="drop-card__banner drop-card__banner--success">
                            "Download started in a new tab."
                        </p>
                    </Show>
                    <Show when=move || status.get() == SubmissionStatus::Error>
                        <p class="drop-card__banner drop-card__banner--error">
                            "Could not fetch that track. Try again."
                        </p>
                    </Show>
                </div>
            </main>

            <footer class="home-page__footer">
                <a
                    href="https://github.com/tunedrop/tunedrop"
                    target="_blank"
                    rel="noopener noreferrer"
                    class="home-page__footer-link"
                >
                    "Source"
                </a>
            </footer>
        </div>
    }
}

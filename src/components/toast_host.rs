//! Bottom-center toast overlay for request lifecycle feedback.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders whatever toast the pages pushed into `ToastState`. Success and
//! error toasts auto-dismiss; loading toasts persist until replaced.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// How long success and error toasts stay visible.
#[cfg(feature = "hydrate")]
const DISMISS_MS: u32 = 4_000;

/// Toast overlay; mount once at the app root.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();

    // Arm a dismiss timer for every settled (non-loading) toast. The seq
    // check keeps a stale timer from dismissing a newer toast.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let state = toast.get();
        if state.kind().is_none() || state.kind() == Some(ToastKind::Loading) {
            return;
        }
        let seq = state.seq();
        gloo_timers::callback::Timeout::new(DISMISS_MS, move || {
            toast.update(|t| {
                if t.seq() == seq {
                    t.dismiss();
                }
            });
        })
        .forget();
    });

    view! {
        <div class="toast-host" aria-live="polite">
            <Show when=move || toast.get().kind().is_some()>
                <div
                    class="toast"
                    class:toast--loading=move || toast.get().kind() == Some(ToastKind::Loading)
                    class:toast--success=move || toast.get().kind() == Some(ToastKind::Success)
                    class:toast--error=move || toast.get().kind() == Some(ToastKind::Error)
                >
                    <span class="toast__message">
                        {move || toast.get().message().unwrap_or_default()}
                    </span>
                </div>
            </Show>
        </div>
    }
}

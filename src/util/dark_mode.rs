//! Dark mode initialization, persistence, and system-preference tracking.
//!
//! Reads the user's preference from `localStorage` and applies a
//! `data-theme` attribute to the `<html>` element. Every preference change is
//! written back to `localStorage`; while no value has been stored, the
//! OS-level `prefers-color-scheme` signal drives the preference.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::util::storage;

const STORAGE_KEY: &str = "tunedrop_dark";

/// Initialization order: stored value, then the OS signal, then light.
fn preference_from(stored: Option<bool>, system_dark: bool) -> bool {
    stored.unwrap_or(system_dark)
}

/// Read the dark mode preference.
///
/// Returns the stored value when one exists, otherwise `true` if the system
/// prefers dark mode, otherwise `false`.
pub fn read_preference() -> bool {
    preference_from(storage::load_json(STORAGE_KEY), system_prefers_dark())
}

/// Whether a preference has ever been written to storage.
pub fn has_stored_preference() -> bool {
    storage::load_json::<bool>(STORAGE_KEY).is_some()
}

/// Current value of the OS `prefers-color-scheme: dark` signal.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", if enabled { "dark" } else { "light" });
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Write the preference to localStorage.
pub fn persist(enabled: bool) {
    storage::save_json(STORAGE_KEY, &enabled);
}

/// Guard for a registered `prefers-color-scheme` change listener.
#[cfg(feature = "hydrate")]
pub struct SystemSchemeListener {
    media_query: web_sys::MediaQueryList,
    callback: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::MediaQueryListEvent)>,
}

#[cfg(feature = "hydrate")]
impl SystemSchemeListener {
    /// Unregister the change listener. Call once on component cleanup.
    pub fn unsubscribe(&self) {
        use wasm_bindgen::JsCast;

        let _ = self
            .media_query
            .remove_event_listener_with_callback("change", self.callback.as_ref().unchecked_ref());
    }
}

/// Follow the OS color-scheme signal while no explicit preference is stored.
///
/// `on_change` receives the new dark flag whenever the OS signal flips and no
/// value is present in storage. Returns `None` when the media query is
/// unavailable; otherwise the listener stays registered until
/// [`SystemSchemeListener::unsubscribe`] is called.
#[cfg(feature = "hydrate")]
pub fn watch_system_preference(on_change: impl Fn(bool) + 'static) -> Option<SystemSchemeListener> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let media_query = web_sys::window()?
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()?;
    let callback = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
        move |ev: web_sys::MediaQueryListEvent| {
            if has_stored_preference() {
                return;
            }
            on_change(ev.matches());
        },
    );
    media_query
        .add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())
        .ok()?;
    Some(SystemSchemeListener { media_query, callback })
}

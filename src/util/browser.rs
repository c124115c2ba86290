//! Browser navigation helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Isolates the new-tab launch side effect from lookup logic so link
//! resolution stays independently testable.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Open `url` in a new browsing context.
///
/// Fire-and-forget: popup blockers or a missing window are ignored, and there
/// is no confirmation that the new context actually loaded.
pub fn open_in_new_tab(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(url, "_blank");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

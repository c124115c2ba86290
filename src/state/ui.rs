//! Local UI chrome state.
//!
//! DESIGN
//! ======
//! Keeps presentation concerns (currently just the color theme) out of page
//! logic so chrome components can read and write them through one context
//! signal.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state shared across chrome components via context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Whether the dark color theme is active.
    pub dark_mode: bool,
}

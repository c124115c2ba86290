//! Shared application state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! State modules hold plain data types; components wrap them in `RwSignal`
//! contexts at the app root.

pub mod toast;
pub mod ui;

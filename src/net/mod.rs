//! Networking modules for the external lookup service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the resolver call, `types` defines the wire schema it
//! validates against.

pub mod api;
pub mod types;

//! Wire DTOs for the lookup-service boundary.
//!
//! DESIGN
//! ======
//! The resolver endpoint is an external, undocumented service; this type
//! mirrors the response shape it is observed to return so validation can stay
//! schema-driven.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// Response returned by the resolver endpoint.
///
/// The service reports `status: "ok"` plus a direct media `link` on success;
/// any other shape is treated as a failed lookup.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LookupResponse {
    /// Service-level status marker; `"ok"` indicates success.
    pub status: String,
    /// Direct media link, present only on successful lookups.
    #[serde(default)]
    pub link: Option<String>,
}

//! HTTP helpers for the media lookup service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since lookups are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a flat `Result<String, String>`; an empty identifier, a
//! transport failure, a non-success HTTP status, and a malformed body all
//! surface as the same error tier. The submission handler maps any of them to
//! one generic failure indicator.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use super::types::LookupResponse;

/// Resolver host, baked in at build time. Requests are sent with an empty
/// host header (and fail at the service) when the variable is absent.
#[cfg(feature = "hydrate")]
fn lookup_host() -> &'static str {
    option_env!("TUNEDROP_RAPIDAPI_HOST").unwrap_or("")
}

/// Resolver access key, baked in at build time.
#[cfg(feature = "hydrate")]
fn lookup_key() -> &'static str {
    option_env!("TUNEDROP_RAPIDAPI_KEY").unwrap_or("")
}

#[cfg(any(test, feature = "hydrate"))]
fn lookup_endpoint(host: &str, video_id: &str) -> String {
    format!("https://{host}/dl?id={video_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn lookup_failed_message(status: u16) -> String {
    format!("lookup request failed: {status}")
}

/// Validate the parsed response body: the lookup succeeds only with an
/// `"ok"` status marker and a non-empty link.
#[cfg(any(test, feature = "hydrate"))]
fn validated_link(body: &LookupResponse) -> Result<String, String> {
    if body.status != "ok" {
        return Err(format!("lookup status was {:?}", body.status));
    }
    match body.link.as_deref() {
        Some(link) if !link.is_empty() => Ok(link.to_owned()),
        _ => Err("lookup response did not include a link".to_owned()),
    }
}

/// Resolve a video id to a direct media link via the external service.
///
/// Issues one `GET https://{host}/dl?id={video_id}` carrying the configured
/// access credentials as request headers. No retry, no timeout, no
/// cancellation.
///
/// # Errors
///
/// Returns an error string when the id is empty, the HTTP request fails, the
/// service responds with a non-success status (the body is not parsed in that
/// case), or the body lacks an `"ok"` marker or a usable link.
pub async fn resolve_media_link(video_id: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        if video_id.is_empty() {
            return Err("no video id to look up".to_owned());
        }
        let host = lookup_host();
        let url = lookup_endpoint(host, video_id);
        let resp = gloo_net::http::Request::get(&url)
            .header("x-rapidapi-key", lookup_key())
            .header("x-rapidapi-host", host)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(lookup_failed_message(resp.status()));
        }
        let body: LookupResponse = resp.json().await.map_err(|e| e.to_string())?;
        validated_link(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = video_id;
        Err("not available on server".to_owned())
    }
}

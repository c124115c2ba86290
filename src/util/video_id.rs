//! YouTube link parsing.

#[cfg(test)]
#[path = "video_id_test.rs"]
mod video_id_test;

use std::sync::LazyLock;

use regex::Regex;

/// Recognizes the standard watch, short-link, embed, and query-parameter
/// link shapes, capturing the 11-character video id that follows.
static VIDEO_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:youtube\.com/(?:[^/]+/.+/|(?:v|embed)/|.*[?&]v=)|youtu\.be/)([^"&?/\s]{11})"#)
        .unwrap()
});

/// Extract the 11-character video id from a pasted link.
///
/// Inputs matching none of the recognized shapes are returned unchanged, so
/// bare ids pass through untouched. No validation is applied to the fallback;
/// an unusable identifier is rejected, if at all, by the lookup service.
pub fn extract_video_id(input: &str) -> String {
    VIDEO_ID_RE
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map_or_else(|| input.to_owned(), |m| m.as_str().to_owned())
}

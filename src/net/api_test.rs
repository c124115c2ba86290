use super::*;

#[test]
fn lookup_endpoint_formats_expected_url() {
    assert_eq!(
        lookup_endpoint("yt-api.example.com", "dQw4w9WgXcQ"),
        "https://yt-api.example.com/dl?id=dQw4w9WgXcQ"
    );
}

#[test]
fn lookup_failed_message_formats_status() {
    assert_eq!(lookup_failed_message(502), "lookup request failed: 502");
}

#[test]
fn validated_link_accepts_ok_status_with_link() {
    let body = LookupResponse {
        status: "ok".to_owned(),
        link: Some("https://cdn.example.com/audio.mp3".to_owned()),
    };
    assert_eq!(
        validated_link(&body),
        Ok("https://cdn.example.com/audio.mp3".to_owned())
    );
}

#[test]
fn validated_link_rejects_non_ok_status() {
    let body = LookupResponse {
        status: "fail".to_owned(),
        link: Some("https://cdn.example.com/audio.mp3".to_owned()),
    };
    assert!(validated_link(&body).is_err());
}

#[test]
fn validated_link_rejects_missing_link() {
    let body = LookupResponse { status: "ok".to_owned(), link: None };
    assert!(validated_link(&body).is_err());
}

#[test]
fn validated_link_rejects_empty_link() {
    let body = LookupResponse { status: "ok".to_owned(), link: Some(String::new()) };
    assert!(validated_link(&body).is_err());
}

use super::*;

#[test]
fn lookup_response_parses_success_shape() {
    let parsed: LookupResponse =
        serde_json::from_str(r#"{"status":"ok","link":"https://cdn.example.com/audio.mp3"}"#)
            .unwrap();
    assert_eq!(parsed.status, "ok");
    assert_eq!(parsed.link.as_deref(), Some("https://cdn.example.com/audio.mp3"));
}

#[test]
fn lookup_response_parses_without_link() {
    let parsed: LookupResponse = serde_json::from_str(r#"{"status":"processing"}"#).unwrap();
    assert_eq!(parsed.status, "processing");
    assert_eq!(parsed.link, None);
}

#[test]
fn lookup_response_ignores_unknown_fields() {
    let parsed: LookupResponse =
        serde_json::from_str(r#"{"status":"ok","link":"x","title":"Song","duration":215}"#)
            .unwrap();
    assert_eq!(parsed.status, "ok");
    assert_eq!(parsed.link.as_deref(), Some("x"));
}

#[test]
fn lookup_response_requires_status_field() {
    let parsed = serde_json::from_str::<LookupResponse>(r#"{"link":"x"}"#);
    assert!(parsed.is_err());
}

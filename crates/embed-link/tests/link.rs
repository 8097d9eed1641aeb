use embed_link::{
    AccessPayload, EmbedLinkError, P256Signer, build_embed_link, sign_payload, validate_base_url,
};

const KEY_BODY: &str = "MIGHAgEAMBMGByqGSM49AgEGCCqGSM49AwEHBG0wawIBAQQgpzoDhdRWm1Rxer5p\
                        ybjQohZxQxtEtHzYGeq444wUPHWhRANCAATp1KE2BP6nqhHEteILgSjXJxwQ3ibq\
                        8jMiNP1fwU3koV8y8BeneITCEZz5vcqOTd9NXLETkM2lvCQjHWOPiZKm";

#[test]
fn base_url_is_checked_before_any_key_work() {
    // ftp:// must be rejected by validation alone — no key material needed.
    let error = validate_base_url("ftp://example.com").unwrap_err();
    assert!(matches!(error, EmbedLinkError::Validation(_)));
}

#[test]
fn empty_filters_are_omitted_from_payload_and_query_alike() {
    let signer = P256Signer::from_pem(KEY_BODY).unwrap();

    // Empty linkAccessFilter: omitted from the signed JSON and the URL.
    let payload = AccessPayload::new(Some("abc"), Some(""), 1_700_000_000_000);
    let (json, raw) = sign_payload(&signer, &payload).unwrap();
    assert_eq!(json, r#"{"cubeAccessFilter":"abc","created":"1700000000000"}"#);
    let url = build_embed_link("https://example.com", &raw, &payload);
    assert!(!url.contains("linkAccessFilter"));

    // Empty cubeAccessFilter gets the same treatment — one rule for
    // both fields, in both places.
    let payload = AccessPayload::new(Some(""), Some("xyz"), 1_700_000_000_000);
    let (json, raw) = sign_payload(&signer, &payload).unwrap();
    assert_eq!(json, r#"{"linkAccessFilter":"xyz","created":"1700000000000"}"#);
    let url = build_embed_link("https://example.com", &raw, &payload);
    assert!(!url.contains("cubeAccessFilter"));
    assert!(url.contains("&linkAccessFilter=xyz"));
}

#[test]
fn full_link_has_the_documented_shape() {
    let signer = P256Signer::from_pem(KEY_BODY).unwrap();
    let payload = AccessPayload::new(Some("region = \"EU\""), Some("tenant 7"), 1_700_000_000_000);
    let (_, raw) = sign_payload(&signer, &payload).unwrap();
    let url = build_embed_link("https://dash.example.com/embed/q1", &raw, &payload);

    assert!(url.starts_with("https://dash.example.com/embed/q1?signature="));
    assert!(url.contains("&cubeAccessFilter=region%20%3D%20%22EU%22"));
    assert!(url.contains("&linkAccessFilter=tenant%207"));
    assert!(url.ends_with("&created=1700000000000"));

    // Exactly one `?`, everything after it `&`-separated.
    assert_eq!(url.matches('?').count(), 1);
    assert_eq!(url.split_once('?').unwrap().1.split('&').count(), 4);
}

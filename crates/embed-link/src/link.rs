use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::error::EmbedLinkError;
use crate::payload::AccessPayload;
use crate::signing::RawSignature;

/// RFC 3986 query component: unreserved characters stay literal,
/// everything else is percent-escaped.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// The base URL must be http(s) and must not be bare scheme-only.
///
/// No query-string merging happens downstream, so the caller is
/// expected to pass a URL without one.
pub fn validate_base_url(base_url: &str) -> Result<(), EmbedLinkError> {
    let rest = base_url
        .strip_prefix("https://")
        .or_else(|| base_url.strip_prefix("http://"));
    match rest {
        Some(rest) if !rest.is_empty() => Ok(()),
        _ => Err(EmbedLinkError::Validation(format!(
            "expected an http:// or https:// URL, got {base_url:?}"
        ))),
    }
}

/// Append the signature and the signed fields as query parameters.
///
/// Parameter order is fixed: `signature`, `cubeAccessFilter`,
/// `linkAccessFilter`, `created`. The filters come from the same
/// `AccessPayload` that was signed, so the query string can never
/// disagree with the signed bytes.
pub fn build_embed_link(
    base_url: &str,
    signature: &RawSignature,
    payload: &AccessPayload,
) -> String {
    let mut link = String::from(base_url);
    link.push_str("?signature=");
    link.push_str(&URL_SAFE_NO_PAD.encode(signature.as_bytes()));

    if let Some(filter) = payload.cube_access_filter() {
        link.push_str("&cubeAccessFilter=");
        link.extend(utf8_percent_encode(filter, QUERY_COMPONENT));
    }
    if let Some(filter) = payload.link_access_filter() {
        link.push_str("&linkAccessFilter=");
        link.extend(utf8_percent_encode(filter, QUERY_COMPONENT));
    }
    link.push_str("&created=");
    link.extend(utf8_percent_encode(payload.created(), QUERY_COMPONENT));
    link
}

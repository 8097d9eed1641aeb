use anyhow::{Context, Result};
use serde::Serialize;

/// The fields covered by the embed-link signature.
///
/// Declaration order is serialization order — the signature is only
/// valid for byte-identical JSON, so the field order and the compact
/// formatting must not change. A filter is carried only when it was
/// provided and non-empty; `created` is always present.
#[derive(Debug, Clone, Serialize)]
pub struct AccessPayload {
    #[serde(rename = "cubeAccessFilter", skip_serializing_if = "Option::is_none")]
    cube_access_filter: Option<String>,
    #[serde(rename = "linkAccessFilter", skip_serializing_if = "Option::is_none")]
    link_access_filter: Option<String>,
    created: String,
}

impl AccessPayload {
    pub fn new(
        cube_access_filter: Option<&str>,
        link_access_filter: Option<&str>,
        created_ms: u64,
    ) -> Self {
        Self {
            cube_access_filter: cube_access_filter
                .filter(|v| !v.is_empty())
                .map(str::to_owned),
            link_access_filter: link_access_filter
                .filter(|v| !v.is_empty())
                .map(str::to_owned),
            created: created_ms.to_string(),
        }
    }

    pub fn cube_access_filter(&self) -> Option<&str> {
        self.cube_access_filter.as_deref()
    }

    pub fn link_access_filter(&self) -> Option<&str> {
        self.link_access_filter.as_deref()
    }

    pub fn created(&self) -> &str {
        &self.created
    }

    /// Compact JSON string whose UTF-8 bytes are what gets signed.
    pub fn canonical_json(&self) -> Result<String> {
        serde_json::to_string(self).context("serializing access payload to canonical JSON")
    }
}

pub fn now_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before unix epoch")
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_filters_serialize_in_declaration_order() {
        let payload = AccessPayload::new(Some("abc"), Some("xyz"), 1_700_000_000_000);
        assert_eq!(
            payload.canonical_json().unwrap(),
            r#"{"cubeAccessFilter":"abc","linkAccessFilter":"xyz","created":"1700000000000"}"#
        );
    }

    #[test]
    fn empty_link_filter_is_omitted() {
        let payload = AccessPayload::new(Some("abc"), Some(""), 1_700_000_000_000);
        assert_eq!(
            payload.canonical_json().unwrap(),
            r#"{"cubeAccessFilter":"abc","created":"1700000000000"}"#
        );
    }

    #[test]
    fn empty_cube_filter_is_omitted() {
        let payload = AccessPayload::new(Some(""), Some("xyz"), 1_700_000_000_000);
        assert_eq!(
            payload.canonical_json().unwrap(),
            r#"{"linkAccessFilter":"xyz","created":"1700000000000"}"#
        );
    }

    #[test]
    fn created_alone_when_no_filters_given() {
        let payload = AccessPayload::new(None, None, 42);
        assert_eq!(payload.canonical_json().unwrap(), r#"{"created":"42"}"#);
    }

    #[test]
    fn deterministic_serialization() {
        let payload = AccessPayload::new(Some("a"), Some("b"), 1);
        assert_eq!(
            payload.canonical_json().unwrap(),
            payload.canonical_json().unwrap()
        );
    }

    #[test]
    fn now_millis_is_past_2023() {
        assert!(now_millis() > 1_700_000_000_000);
    }
}

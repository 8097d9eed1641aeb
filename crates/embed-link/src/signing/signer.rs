use anyhow::Result;

use super::RawSignature;
use crate::payload::AccessPayload;

/// Trait for signing canonical payload bytes.
///
/// Implementations are sync — signing is CPU-bound.
/// For async backends (e.g. KMS), use `spawn_blocking`.
pub trait PayloadSigner: Send + Sync {
    /// Sign canonical bytes. Returns the fixed-width raw signature.
    fn sign(&self, data: &[u8]) -> Result<RawSignature>;

    /// Compressed public key bytes (33 bytes for P-256).
    fn public_key_bytes(&self) -> Vec<u8>;

    /// Algorithm identifier string (e.g. "p256").
    fn algorithm(&self) -> &str;
}

/// Serialize the payload to its canonical JSON and sign those exact
/// bytes. Returns the JSON alongside the signature so the caller can
/// emit both without re-serializing.
pub fn sign_payload(
    signer: &dyn PayloadSigner,
    payload: &AccessPayload,
) -> Result<(String, RawSignature)> {
    let json = payload.canonical_json()?;
    let signature = signer.sign(json.as_bytes())?;
    Ok((json, signature))
}

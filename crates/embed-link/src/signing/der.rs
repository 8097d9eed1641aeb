use crate::error::EmbedLinkError;

const SEQUENCE_TAG: u8 = 0x30;
const INTEGER_TAG: u8 = 0x02;
const COMPONENT_LEN: usize = 32;

/// Fixed-width P1363 signature: 32-byte big-endian R followed by
/// 32-byte big-endian S.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSignature([u8; 64]);

impl RawSignature {
    pub const LEN: usize = 64;

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 64]> for RawSignature {
    fn from(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for RawSignature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Convert a DER-encoded ECDSA signature (`SEQUENCE` of two
/// `INTEGER`s) to the fixed-width P1363 form.
///
/// This is a narrow parser for the exact shape P-256 signing
/// produces: single-byte lengths throughout. Long-form length
/// encoding (any length byte >= 0x80) is rejected rather than
/// misread as a direct length. Each component is normalized to 32
/// bytes — a leading sign-extension byte is dropped, short values
/// are zero-left-padded.
pub fn der_to_p1363(der: &[u8]) -> Result<RawSignature, EmbedLinkError> {
    if der.len() < 8 {
        return Err(EmbedLinkError::InvalidSignature("DER signature too short"));
    }
    if der[0] != SEQUENCE_TAG {
        return Err(EmbedLinkError::InvalidSignature("missing SEQUENCE tag"));
    }
    let seq_len = usize::from(short_form_len(der[1])?);
    if seq_len != der.len() - 2 {
        return Err(EmbedLinkError::InvalidSignature("SEQUENCE length mismatch"));
    }

    if der[2] != INTEGER_TAG {
        return Err(EmbedLinkError::InvalidSignature("missing INTEGER tag for r"));
    }
    let r_len = usize::from(short_form_len(der[3])?);
    let r_end = 4 + r_len;
    if r_end + 2 > der.len() {
        return Err(EmbedLinkError::InvalidSignature("r length out of range"));
    }

    if der[r_end] != INTEGER_TAG {
        return Err(EmbedLinkError::InvalidSignature("missing INTEGER tag for s"));
    }
    let s_len = usize::from(short_form_len(der[r_end + 1])?);
    let s_start = r_end + 2;
    if s_start + s_len != der.len() {
        return Err(EmbedLinkError::InvalidSignature("s length mismatch"));
    }

    let mut raw = [0u8; RawSignature::LEN];
    normalize_into(&der[4..r_end], &mut raw[..COMPONENT_LEN]);
    normalize_into(&der[s_start..], &mut raw[COMPONENT_LEN..]);
    Ok(RawSignature(raw))
}

fn short_form_len(byte: u8) -> Result<u8, EmbedLinkError> {
    if byte >= 0x80 {
        return Err(EmbedLinkError::InvalidSignature(
            "long-form length encoding is unsupported",
        ));
    }
    Ok(byte)
}

/// Copy the low-order bytes of `component` into `out`, which is
/// already zeroed: longer values lose their leading sign bytes,
/// shorter values gain leading zeros.
fn normalize_into(component: &[u8], out: &mut [u8]) {
    let out_len = out.len();
    if component.len() >= out_len {
        out.copy_from_slice(&component[component.len() - out_len..]);
    } else {
        out[out_len - component.len()..].copy_from_slice(component);
    }
}

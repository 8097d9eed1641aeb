use anyhow::Result;
use p256::ecdsa::{Signature, SigningKey, signature::hazmat::PrehashSigner};
use sha2::{Digest, Sha256};

use super::der::der_to_p1363;
use super::signer::PayloadSigner;
use super::RawSignature;
use crate::error::EmbedLinkError;
use crate::key::load_signing_key;

/// ECDSA signer over curve P-256 with SHA-256 digests.
///
/// Signatures come out of the primitive DER-encoded and are converted
/// to the 64-byte P1363 form before they leave this type.
pub struct P256Signer {
    signing_key: SigningKey,
}

impl P256Signer {
    pub fn new(signing_key: SigningKey) -> Self {
        Self { signing_key }
    }

    /// Load from PEM text (full armor or bare PKCS#8 base64 body).
    pub fn from_pem(pem: &str) -> Result<Self, EmbedLinkError> {
        Ok(Self {
            signing_key: load_signing_key(pem)?,
        })
    }
}

impl PayloadSigner for P256Signer {
    fn sign(&self, data: &[u8]) -> Result<RawSignature> {
        let digest = Sha256::digest(data);
        let signature: Signature = self
            .signing_key
            .sign_prehash(&digest)
            .map_err(|e| anyhow::anyhow!("p256 sign_prehash failed: {e}"))?;
        Ok(der_to_p1363(signature.to_der().as_bytes())?)
    }

    fn public_key_bytes(&self) -> Vec<u8> {
        self.signing_key
            .verifying_key()
            .to_encoded_point(true)
            .as_bytes()
            .to_vec()
    }

    fn algorithm(&self) -> &str {
        "p256"
    }
}

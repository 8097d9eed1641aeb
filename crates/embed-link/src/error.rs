#[derive(Debug, thiserror::Error)]
pub enum EmbedLinkError {
    #[error("Failed to decode private key base64: {0}")]
    Decode(#[from] base64::DecodeError),
    #[error("Private key is not a valid PKCS#8 EC key: {0}")]
    KeyFormat(String),
    #[error("Invalid DER signature: {0}")]
    InvalidSignature(&'static str),
    #[error("Invalid base URL: {0}")]
    Validation(String),
}

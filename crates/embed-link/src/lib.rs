pub mod error;
pub mod key;
pub mod link;
pub mod payload;
pub mod signing;

pub use error::EmbedLinkError;
pub use key::load_signing_key;
pub use link::{build_embed_link, validate_base_url};
pub use payload::{AccessPayload, now_millis};
pub use signing::{P256Signer, PayloadSigner, RawSignature, der_to_p1363, sign_payload};

mod der;
mod p256;
mod signer;

pub use der::{RawSignature, der_to_p1363};
pub use self::p256::P256Signer;
pub use signer::{PayloadSigner, sign_payload};

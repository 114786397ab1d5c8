//! Single-pass container encryption and decryption.
//!
//! Both directions work over plain [`Read`](std::io::Read) and
//! [`Write`](std::io::Write) handles and keep only one block in flight, so
//! memory use does not depend on the input size. Where the bytes come from
//! and where they end up is the caller's business.

mod decryptor;
mod encryptor;

pub use decryptor::Decryptor;
pub use encryptor::Encryptor;

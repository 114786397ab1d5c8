//! # Cryptographic Building Blocks
//!
//! Everything the container protocol needs below the stream layer:
//!
//! - [`Hash`]: incremental SHA-256
//! - [`Mac`]: HMAC-SHA-256 accumulator with constant-time verification
//! - [`BlockCipher`]: AES-256 on single blocks, no mode of operation
//! - [`Derive`]: the 8192-round key stretching schedule
//! - [`Chain`]: the block chaining built on top of [`BlockCipher`]
//!
//! The primitives come from the RustCrypto crates (`sha2`, `hmac`, `aes`)
//! and `subtle`. Chaining is done here on raw block calls, with the
//! chaining value owned by one [`Chain`] for the duration of one pass.

mod block;
mod chain;
mod derive;
mod hash;
mod mac;

pub use block::BlockCipher;
pub use chain::Chain;
pub use derive::Derive;
pub use hash::Hash;
pub use mac::{Mac, tags_equal};

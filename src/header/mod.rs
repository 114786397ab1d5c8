//! Container header and geometry.
//!
//! The only header is the IV. It carries no magic, version or length field:
//! the plaintext length is recovered from the container length and the
//! remainder nibble in the IV's last byte.

mod iv;
mod layout;

pub use iv::Iv;
pub use layout::Layout;

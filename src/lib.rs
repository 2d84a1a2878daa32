//! OpenPGP ECDH key-wrapping core (RFC 6637).
//!
//! Turns an elliptic-curve Diffie-Hellman shared point into a wrapped
//! symmetric session key, and back. Four pieces, leaves first:
//!
//! - [`crypto::kek`] — the 4-octet KEK-parameter blob and its default
//!   selection table.
//! - [`crypto::shared_secret`] — extracting the shared X coordinate.
//! - [`crypto::kdf_input`] — the standardized "other info" octet string.
//! - [`crypto::wrap_engine`] — the single-block concatenation KDF plus
//!   AES Key Wrap / Unwrap.
//!
//! [`crypto::ecdh`] composes all four into the encrypt/decrypt pipeline
//! RFC 6637 describes, against an [`crypto::backend::EcdhBackend`] that
//! supplies the raw scalar multiplication this core does not do itself.
//!
//! `packet::session_key` is not part of the core; it demonstrates the
//! packet-layer contract (padding, wire framing) a caller drives the core
//! through.

pub mod crypto;
pub mod errors;
pub mod packet;
pub mod types;

pub use crypto::ecdh::{decrypt, encrypt};
pub use errors::{Error, Result};

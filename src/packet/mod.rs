//! Thin packet-layer demonstration of the contract named in `spec.md` §6.
//! Not part of the ECDH core itself — see `session_key`'s module docs.

pub mod session_key;

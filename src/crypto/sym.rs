//! Symmetric ciphers usable as the AES Key Wrap target, numbered per the
//! OpenPGP symmetric-algorithm registry (RFC 4880 §9.2).

use crate::errors::{bad_public_key, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymmetricKeyAlgorithm {
    Aes128,
    Aes192,
    Aes256,
}

impl SymmetricKeyAlgorithm {
    /// AES key length in octets: 16 / 24 / 32.
    pub fn key_size(self) -> usize {
        match self {
            SymmetricKeyAlgorithm::Aes128 => 16,
            SymmetricKeyAlgorithm::Aes192 => 24,
            SymmetricKeyAlgorithm::Aes256 => 32,
        }
    }
}

impl From<SymmetricKeyAlgorithm> for u8 {
    fn from(a: SymmetricKeyAlgorithm) -> u8 {
        match a {
            SymmetricKeyAlgorithm::Aes128 => 7,
            SymmetricKeyAlgorithm::Aes192 => 8,
            SymmetricKeyAlgorithm::Aes256 => 9,
        }
    }
}

impl TryFrom<u8> for SymmetricKeyAlgorithm {
    type Error = crate::errors::Error;

    fn try_from(id: u8) -> Result<Self> {
        match id {
            7 => Ok(SymmetricKeyAlgorithm::Aes128),
            8 => Ok(SymmetricKeyAlgorithm::Aes192),
            9 => Ok(SymmetricKeyAlgorithm::Aes256),
            other => bad_public_key!("cipher algorithm id {} not allowed for ECDH KEK", other),
        }
    }
}

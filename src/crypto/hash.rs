//! Hash algorithms usable as the ECDH KDF's digest, numbered per the
//! OpenPGP hash-algorithm registry (RFC 4880 §9.4).

use digest::Digest;
use sha2::{Sha256, Sha384, Sha512};

use crate::errors::{bad_public_key, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    /// Digest length in octets.
    pub fn digest_len(self) -> usize {
        match self {
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha384 => 48,
            HashAlgorithm::Sha512 => 64,
        }
    }

    /// Opens a context, absorbs `data` in order, and returns the full
    /// digest. Mirrors the `hash_new` / `hash_absorb` / `hash_finalize`
    /// backend contract as a single call, since this crate never needs to
    /// interleave absorb with other work.
    pub fn digest_concat(self, data: &[&[u8]]) -> Vec<u8> {
        match self {
            HashAlgorithm::Sha256 => {
                let mut h = Sha256::new();
                for chunk in data {
                    h.update(chunk);
                }
                h.finalize().to_vec()
            }
            HashAlgorithm::Sha384 => {
                let mut h = Sha384::new();
                for chunk in data {
                    h.update(chunk);
                }
                h.finalize().to_vec()
            }
            HashAlgorithm::Sha512 => {
                let mut h = Sha512::new();
                for chunk in data {
                    h.update(chunk);
                }
                h.finalize().to_vec()
            }
        }
    }
}

impl From<HashAlgorithm> for u8 {
    fn from(h: HashAlgorithm) -> u8 {
        match h {
            HashAlgorithm::Sha256 => 8,
            HashAlgorithm::Sha384 => 9,
            HashAlgorithm::Sha512 => 10,
        }
    }
}

impl TryFrom<u8> for HashAlgorithm {
    type Error = crate::errors::Error;

    fn try_from(id: u8) -> Result<Self> {
        match id {
            8 => Ok(HashAlgorithm::Sha256),
            9 => Ok(HashAlgorithm::Sha384),
            10 => Ok(HashAlgorithm::Sha512),
            other => bad_public_key!("hash algorithm id {} not allowed for ECDH KDF", other),
        }
    }
}

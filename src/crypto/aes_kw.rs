//! RFC 3394 AES Key Wrap / Unwrap, dispatched over the three AES key sizes
//! the ECDH KEK-parameter table can select. Backed by RustCrypto's
//! `aes-kw` crate, the same one `rpgp` itself depends on.

use aes_kw::{KekAes128, KekAes192, KekAes256};
use generic_array::GenericArray;

use crate::crypto::sym::SymmetricKeyAlgorithm;
use crate::errors::{Error, Result};

/// Wraps `plaintext` (a multiple of 8 octets, at least 16) under `kek`,
/// whose length must equal `cipher`'s key size. Output is `plaintext.len()
/// + 8` octets.
pub fn wrap(cipher: SymmetricKeyAlgorithm, kek: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    assert_eq!(kek.len(), cipher.key_size());
    let result = match cipher {
        SymmetricKeyAlgorithm::Aes128 => {
            KekAes128::new(GenericArray::from_slice(kek)).wrap_vec(plaintext)
        }
        SymmetricKeyAlgorithm::Aes192 => {
            KekAes192::new(GenericArray::from_slice(kek)).wrap_vec(plaintext)
        }
        SymmetricKeyAlgorithm::Aes256 => {
            KekAes256::new(GenericArray::from_slice(kek)).wrap_vec(plaintext)
        }
    };
    result.map_err(|e| Error::CryptoError(format!("aes key wrap failed: {e:?}")))
}

/// Unwraps `ciphertext` under `kek`. On any failure (wrong KEK, tampered
/// wrap, or malformed length) returns `Error::BadKey`, never distinguishing
/// which check tripped (spec.md §7's anti-oracle guidance).
pub fn unwrap(cipher: SymmetricKeyAlgorithm, kek: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    assert_eq!(kek.len(), cipher.key_size());
    let result = match cipher {
        SymmetricKeyAlgorithm::Aes128 => {
            KekAes128::new(GenericArray::from_slice(kek)).unwrap_vec(ciphertext)
        }
        SymmetricKeyAlgorithm::Aes192 => {
            KekAes192::new(GenericArray::from_slice(kek)).unwrap_vec(ciphertext)
        }
        SymmetricKeyAlgorithm::Aes256 => {
            KekAes256::new(GenericArray::from_slice(kek)).unwrap_vec(ciphertext)
        }
    };
    result.map_err(|_| Error::BadKey)
}

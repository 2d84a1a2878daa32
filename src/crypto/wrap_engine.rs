//! The single-block concatenation KDF (NIST SP 800-56A §5.8.1) and the
//! RFC 3394 AES Key Wrap / Unwrap it feeds, bundled into one straight-line
//! pipeline: `Init -> KDFed -> Wrapped/Unwrapped -> Released`. No retries;
//! any failure aborts and the secret buffer is zeroized by `SharedSecret`'s
//! own `Drop`.
//!
//! The `unsafe-debug-logging` Cargo feature additionally traces the derived
//! digest and KEK as hex at `trace` level. Off by default: never enable it
//! in a hardened build.

use crate::crypto::kek::KekParams;
use crate::crypto::shared_secret::SharedSecret;
use crate::crypto::{aes_kw, sym::SymmetricKeyAlgorithm};
use crate::errors::{bad_mpi, ensure_or, Error, Result};

/// Big-endian 32-bit counter fixed at 1: the single block of SP 800-56A's
/// concatenation KDF never needs a second block because every enumerated
/// cipher's key size fits in one hash output.
const KDF_COUNTER: [u8; 4] = [0x00, 0x00, 0x00, 0x01];

pub struct WrapEngine {
    kek_params: KekParams,
    secret: SharedSecret,
    kdf_input: Vec<u8>,
}

impl WrapEngine {
    pub fn new(kek_params: KekParams, secret: SharedSecret, kdf_input: Vec<u8>) -> Self {
        WrapEngine { kek_params, secret, kdf_input }
    }

    /// Runs the KDF and overwrites `self.secret` with the resulting KEK,
    /// zeroizing whatever of the shared-secret buffer lies past the KEK's
    /// length. Consuming `&mut self` keeps this a single, non-retryable
    /// transition, matching the `Init -> KDFed` edge of the state machine.
    fn derive_kek(&mut self) -> Result<()> {
        let digest = self.kek_params.hash.digest_concat(&[
            &KDF_COUNTER,
            self.secret.as_bytes(),
            &self.kdf_input,
        ]);

        let k = self.kek_params.cipher.key_size();
        assert!(
            digest.len() >= k,
            "minimum allowed digest (SHA-256, 32 octets) must cover the largest KEK (32 octets)"
        );

        #[cfg(feature = "unsafe-debug-logging")]
        log::trace!(
            "kdf digest={} kek={}",
            hex::encode(&digest),
            hex::encode(&digest[..k])
        );

        self.secret.overwrite_with(&digest[..k]);
        Ok(())
    }

    fn cipher(&self) -> SymmetricKeyAlgorithm {
        self.kek_params.cipher
    }

    /// Wraps `padded_session_key` (already padded by the caller to a
    /// multiple of 8 octets, at least 16) and returns the on-wire form
    /// `[L+8] || AESWRAP(KEK, padded_session_key)`.
    pub fn wrap(mut self, padded_session_key: &[u8]) -> Result<Vec<u8>> {
        let len = padded_session_key.len();
        ensure_or!(len % 8 == 0 && len >= 16, Error::BadMpi("padded session key length must be a multiple of 8, at least 16".into()));

        self.derive_kek()?;
        let wrapped = aes_kw::wrap(self.cipher(), self.secret.as_bytes(), padded_session_key)?;
        debug_assert_eq!(wrapped.len(), len + 8);

        let mut out = Vec::with_capacity(1 + wrapped.len());
        out.push(wrapped.len() as u8);
        out.extend_from_slice(&wrapped);
        Ok(out)
    }

    /// Unwraps the on-wire form `[len] || W`, validating `len` against the
    /// total payload length before touching the KEK, and returns the still
    /// padded session key (`len - 8` octets; the caller strips padding).
    pub fn unwrap(mut self, wire: &[u8]) -> Result<Vec<u8>> {
        let Some((&len_octet, w)) = wire.split_first() else {
            bad_mpi!("empty ecdh wrapped-key field");
        };
        let len = len_octet as usize;

        if len != w.len() {
            bad_mpi!(
                "wrapped-key length octet {} does not match payload length {}",
                len,
                w.len()
            );
        }
        if len % 8 != 0 || len < 24 {
            bad_mpi!("wrapped-key length {} must be a multiple of 8, at least 24", len);
        }

        self.derive_kek()?;
        aes_kw::unwrap(self.cipher(), self.secret.as_bytes(), w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::hash::HashAlgorithm;
    use crate::types::Mpi;

    fn engine(hash: HashAlgorithm, cipher: SymmetricKeyAlgorithm) -> WrapEngine {
        let qbits = 256;
        let mut point = vec![0x04u8];
        point.extend(vec![0x11; 32]);
        point.extend(vec![0x22; 32]);
        let secret = SharedSecret::extract_x(&Mpi::from_raw(point), qbits).unwrap();
        let kdf_input = vec![0xAB; 45];
        WrapEngine::new(KekParams { hash, cipher }, secret, kdf_input)
    }

    #[test]
    fn round_trips_and_enforces_length_law() {
        let plaintext = [0xAAu8; 16 + 8]; // 16 bytes key + 8 bytes padding
        let wrapped = engine(HashAlgorithm::Sha256, SymmetricKeyAlgorithm::Aes128)
            .wrap(&plaintext)
            .unwrap();

        assert_eq!(wrapped.len(), plaintext.len() + 8 + 1);
        assert_eq!(wrapped[0] as usize, plaintext.len() + 8);

        let unwrapped = engine(HashAlgorithm::Sha256, SymmetricKeyAlgorithm::Aes128)
            .unwrap(&wrapped)
            .unwrap();
        assert_eq!(unwrapped, plaintext);
    }

    #[test]
    fn tamper_detection() {
        let plaintext = [0x5Au8; 24];
        let mut wrapped = engine(HashAlgorithm::Sha384, SymmetricKeyAlgorithm::Aes256)
            .wrap(&plaintext)
            .unwrap();
        *wrapped.last_mut().unwrap() ^= 0x01;

        let err = engine(HashAlgorithm::Sha384, SymmetricKeyAlgorithm::Aes256)
            .unwrap(&wrapped)
            .unwrap_err();
        assert!(matches!(err, Error::BadKey));
    }

    #[test]
    fn rejects_length_octet_mismatch() {
        let plaintext = [0x10u8; 24];
        let mut wrapped = engine(HashAlgorithm::Sha256, SymmetricKeyAlgorithm::Aes128)
            .wrap(&plaintext)
            .unwrap();
        wrapped[0] = 0x10; // claims 16, but payload is still 32 long
        let err = engine(HashAlgorithm::Sha256, SymmetricKeyAlgorithm::Aes128)
            .unwrap(&wrapped)
            .unwrap_err();
        assert!(matches!(err, Error::BadMpi(_)));
    }

    #[test]
    fn rejects_plaintext_not_multiple_of_8() {
        let err = engine(HashAlgorithm::Sha256, SymmetricKeyAlgorithm::Aes128)
            .wrap(&[0u8; 17])
            .unwrap_err();
        assert!(matches!(err, Error::BadMpi(_)));
    }
}

//! KEK-parameter blob: the 4-octet `03 01 hash cipher` framing that binds a
//! curve's default hash/cipher pair, and its (de)serialization.

use crate::crypto::hash::HashAlgorithm;
use crate::crypto::sym::SymmetricKeyAlgorithm;
use crate::errors::{bad_public_key, Result};

/// Reserved version octet for "KDF+AESWRAP"; the only value this crate
/// (or RFC 6637) knows about.
const KDF_VERSION: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KekParams {
    pub hash: HashAlgorithm,
    pub cipher: SymmetricKeyAlgorithm,
}

/// Ascending-`qbits` selection table (`spec.md` §4.1). Read-only, shared
/// freely across threads: a `const` array, not lazily built global state.
const DEFAULT_TABLE: &[(u16, HashAlgorithm, SymmetricKeyAlgorithm)] = &[
    (256, HashAlgorithm::Sha256, SymmetricKeyAlgorithm::Aes128),
    (384, HashAlgorithm::Sha384, SymmetricKeyAlgorithm::Aes256),
    (528, HashAlgorithm::Sha512, SymmetricKeyAlgorithm::Aes256),
];

/// Picks the weakest hash/cipher pair whose strength meets or exceeds
/// `qbits`; falls through to the last (strongest) row if none qualify.
pub fn default_kek_params(qbits: u16) -> KekParams {
    for &(threshold, hash, cipher) in DEFAULT_TABLE {
        if qbits <= threshold {
            return KekParams { hash, cipher };
        }
    }
    let &(_, hash, cipher) = DEFAULT_TABLE.last().expect("table is non-empty");
    KekParams { hash, cipher }
}

impl KekParams {
    /// Canonical 4-octet encoding: `03 01 hash_id cipher_id`.
    pub fn encode(self) -> [u8; 4] {
        [0x03, KDF_VERSION, self.hash.into(), self.cipher.into()]
    }

    /// Decodes a 4-octet blob, rejecting anything not of the form
    /// `03 01 h c` with `h`/`c` in the enumerated sets.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != 4 {
            bad_public_key!("kek params must be 4 octets, got {}", bytes.len());
        }
        if bytes[0] != 0x03 {
            bad_public_key!("kek params leading length octet must be 03, got {:02x}", bytes[0]);
        }
        if bytes[1] != KDF_VERSION {
            bad_public_key!("kek params version must be 01, got {:02x}", bytes[1]);
        }
        let hash = HashAlgorithm::try_from(bytes[2])?;
        let cipher = SymmetricKeyAlgorithm::try_from(bytes[3])?;
        Ok(KekParams { hash, cipher })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_matches_seed_vectors() {
        assert_eq!(
            default_kek_params(256),
            KekParams { hash: HashAlgorithm::Sha256, cipher: SymmetricKeyAlgorithm::Aes128 }
        );
        assert_eq!(
            default_kek_params(384),
            KekParams { hash: HashAlgorithm::Sha384, cipher: SymmetricKeyAlgorithm::Aes256 }
        );
        assert_eq!(
            default_kek_params(521),
            KekParams { hash: HashAlgorithm::Sha512, cipher: SymmetricKeyAlgorithm::Aes256 }
        );
        assert_eq!(
            default_kek_params(1024),
            KekParams { hash: HashAlgorithm::Sha512, cipher: SymmetricKeyAlgorithm::Aes256 }
        );
    }

    #[test]
    fn selection_is_monotonic_in_qbits() {
        let mut prev_strength = 0usize;
        for qbits in (128..=1200).step_by(8) {
            let params = default_kek_params(qbits);
            let strength = params.hash.digest_len();
            assert!(strength >= prev_strength);
            prev_strength = strength;
        }
    }

    #[test]
    fn encode_decode_round_trips() {
        for &(_, hash, cipher) in DEFAULT_TABLE {
            let params = KekParams { hash, cipher };
            let decoded = KekParams::decode(&params.encode()).unwrap();
            assert_eq!(decoded, params);
        }
    }

    #[test]
    fn decode_rejects_wrong_leading_count() {
        let err = KekParams::decode(&[0x04, 0x01, 0x08, 0x07]).unwrap_err();
        assert!(matches!(err, crate::errors::Error::BadPublicKey(_)));
    }

    #[test]
    fn decode_rejects_wrong_length() {
        assert!(KekParams::decode(&[0x03, 0x01, 0x08]).is_err());
        assert!(KekParams::decode(&[0x03, 0x01, 0x08, 0x07, 0x00]).is_err());
    }

    #[test]
    fn decode_rejects_unknown_hash_or_cipher() {
        assert!(KekParams::decode(&[0x03, 0x01, 0x02, 0x07]).is_err());
        assert!(KekParams::decode(&[0x03, 0x01, 0x08, 0x02]).is_err());
    }
}

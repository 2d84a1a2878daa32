//! The ECDH shared secret: the X coordinate of the shared point, extracted
//! from the framed MPI the backend produced and normalized to the curve's
//! byte length. Single-owner, zeroized on drop.

use zeroize::Zeroize;

use crate::errors::{bad_public_key, Result};
use crate::types::Mpi;

/// A short-lived secret buffer, always exactly `ceil(qbits/8)` octets.
/// `WrapEngine` overwrites this buffer in place with the derived KEK so
/// the shared X coordinate never needs a second secret allocation.
pub struct SharedSecret {
    bytes: Vec<u8>,
}

impl Drop for SharedSecret {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl SharedSecret {
    /// Extracts the big-endian X coordinate from a backend-produced shared
    /// point MPI.
    ///
    /// `shared_point_mpi` carries one leading framing octet (`04` for a
    /// Weierstrass uncompressed point, `40` for Curve25519's native
    /// single-coordinate form — see `crypto::backend`) followed by the X
    /// coordinate and, for Weierstrass curves, the Y coordinate. Only the
    /// framing-byte-plus-X-coordinate prefix is ever read.
    pub fn extract_x(shared_point_mpi: &Mpi, qbits: u16) -> Result<Self> {
        let n = (qbits as usize).div_ceil(8);
        let raw = shared_point_mpi.as_bytes();
        if raw.len() <= n {
            bad_public_key!(
                "shared point too short: need framing byte + {} octets, got {}",
                n,
                raw.len()
            );
        }
        let mut bytes = vec![0u8; n];
        bytes.copy_from_slice(&raw[1..1 + n]);
        Ok(SharedSecret { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Overwrites the buffer's first `key.len()` octets with `key` and
    /// zeroizes the remainder — used by `WrapEngine` to turn this buffer
    /// into the KEK without a second secret allocation. `key.len()` must
    /// not exceed the buffer's length.
    pub(crate) fn overwrite_with(&mut self, key: &[u8]) {
        assert!(key.len() <= self.bytes.len());
        self.bytes[..key.len()].copy_from_slice(key);
        // Zero exactly the tail's length, not its address (spec.md §9's
        // note on the reference `memset(ptr, len, 0)` argument swap).
        let tail_len = self.bytes.len() - key.len();
        self.bytes[key.len()..].zeroize();
        debug_assert_eq!(self.bytes[key.len()..].len(), tail_len);
    }
}

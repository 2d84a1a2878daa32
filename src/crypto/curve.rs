//! Curve identity: the OID bytes hashed into the KDF input, and the curve
//! strength in bits (`qbits`) used to pick default KEK parameters.
//!
//! Raw scalar multiplication lives behind [`crate::crypto::backend`], not
//! here — this module only carries the static, public identity of a curve.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EccCurve {
    NistP256,
    NistP384,
    NistP521,
    Curve25519,
}

impl EccCurve {
    /// The curve's registered object identifier, DER-encoded content
    /// octets (no tag/length octets — those don't appear in the ECDH KDF
    /// parameter string either, see `KdfInput`).
    pub fn oid(self) -> &'static [u8] {
        match self {
            EccCurve::NistP256 => &[0x2A, 0x86, 0x48, 0xCE, 0x3D, 0x03, 0x01, 0x07],
            EccCurve::NistP384 => &[0x2B, 0x81, 0x04, 0x00, 0x22],
            EccCurve::NistP521 => &[0x2B, 0x81, 0x04, 0x00, 0x23],
            EccCurve::Curve25519 => {
                &[0x2B, 0x06, 0x01, 0x04, 0x01, 0x97, 0x55, 0x01, 0x05, 0x01]
            }
        }
    }

    /// Curve strength in bits, used to select default KEK parameters
    /// (`spec.md` §4.1). cv25519 is treated as 256-bit strength, matching
    /// GnuPG's and `rpgp`'s own selection behavior.
    pub fn qbits(self) -> u16 {
        match self {
            EccCurve::NistP256 => 256,
            EccCurve::NistP384 => 384,
            EccCurve::NistP521 => 521,
            EccCurve::Curve25519 => 256,
        }
    }
}

//! Assembles the "other info" octet string the concatenation KDF hashes,
//! byte-exact with RFC 6637 §8.

use crate::crypto::kek::KekParams;

/// Public-key algorithm id for ECDH (RFC 4880 §9.1).
const PUBLIC_KEY_ALGORITHM_ECDH: u8 = 0x12;

/// 20 ASCII octets: "Anonymous Sender    " (four trailing spaces).
const ANONYMOUS_SENDER: [u8; 20] = *b"Anonymous Sender    ";

/// Builds the KDF input:
/// `len(oid) || oid || 0x12 || len(kek_params) || kek_params
///     || "Anonymous Sender    " || recipient_fingerprint`.
///
/// `recipient_fp` is expected to be 20 bytes (V4 fingerprint); the layout
/// is preserved verbatim for any other length a V5-capable caller passes,
/// per `spec.md` §4.3.
pub fn build(curve_oid: &[u8], kek_params: KekParams, recipient_fp: &[u8]) -> Vec<u8> {
    debug_assert!(curve_oid.len() <= u8::MAX as usize);

    let encoded_kek = kek_params.encode();

    let mut out = Vec::with_capacity(
        1 + curve_oid.len() + 1 + 1 + encoded_kek.len() + ANONYMOUS_SENDER.len() + recipient_fp.len(),
    );
    out.push(curve_oid.len() as u8);
    out.extend_from_slice(curve_oid);
    out.push(PUBLIC_KEY_ALGORITHM_ECDH);
    out.push(encoded_kek.len() as u8);
    out.extend_from_slice(&encoded_kek);
    out.extend_from_slice(&ANONYMOUS_SENDER);
    out.extend_from_slice(recipient_fp);
    out
}

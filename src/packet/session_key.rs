//! Packet-layer glue around the ECDH core — *not* part of the core itself
//! (`spec.md` §1 scopes "session-key padding/unpadding" out as an external
//! collaborator). Kept here, adapted from `rpgp`'s own
//! `composed::message::decrypt::decrypt_session_key`, so the round-trip
//! tests in `crypto::ecdh` have a realistic caller: PKCS5 padding applied
//! before `crypto::ecdh::encrypt`, stripped after `crypto::ecdh::decrypt`.

use block_padding::{Padding, Pkcs7};
use generic_array::{typenum::U8, GenericArray};
use rand::{CryptoRng, RngCore};

use crate::crypto::backend::{EcdhBackend, Ephemeral};
use crate::crypto::curve::EccCurve;
use crate::crypto::kek::KekParams;
use crate::crypto::ecdh;
use crate::errors::Error;
use crate::errors::Result;
use crate::types::Mpi;

/// Pads `session_key` to the next 8-octet boundary using PKCS5 (PKCS7 with
/// an 8-byte block size), the scheme RFC 6637 names for ECDH session keys.
pub fn pad_pkcs5(session_key: &[u8]) -> Vec<u8> {
    let pos = session_key.len();
    let block_size = 8;
    let bs = block_size * (pos / block_size);

    let mut padded = session_key.to_vec();
    padded.resize(bs + block_size, 0);

    {
        let buf = GenericArray::<u8, U8>::from_mut_slice(&mut padded[bs..bs + block_size]);
        Pkcs7::pad(buf, pos - bs);
    }

    padded
}

/// Strips PKCS5 padding. Per `spec.md` §7's anti-oracle guidance, every
/// failure here — and every `BadKey` from the unwrap that produced
/// `padded` — is surfaced identically, so a tampered wrap and a
/// corrupted-but-authentic padded key look the same to the caller.
pub fn unpad_pkcs5(padded: &[u8]) -> Result<Vec<u8>> {
    let len = padded.len();
    if len == 0 || len % 8 != 0 {
        return Err(Error::BadKey);
    }

    let pad = *padded.last().expect("checked non-empty above") as usize;
    if pad == 0 || pad > len {
        return Err(Error::BadKey);
    }

    let unpadded_len = len - pad;
    if padded[unpadded_len..].iter().any(|&b| b as usize != pad) {
        return Err(Error::BadKey);
    }
    if unpadded_len == 0 {
        return Err(Error::BadKey);
    }

    Ok(padded[..unpadded_len].to_vec())
}

/// Encrypts a session key to a recipient's ECDH public key: pads, then
/// drives `crypto::ecdh::encrypt`.
#[allow(clippy::too_many_arguments)]
pub fn encrypt_session_key<B: EcdhBackend, R: RngCore + CryptoRng>(
    backend: &B,
    rng: &mut R,
    curve: EccCurve,
    recipient_public_point_mpi: &Mpi,
    kek_params: KekParams,
    recipient_fingerprint: &[u8],
    session_key: &[u8],
) -> Result<(Mpi, Vec<u8>)> {
    let padded = pad_pkcs5(session_key);
    ecdh::encrypt(
        backend,
        rng,
        curve,
        recipient_public_point_mpi,
        kek_params,
        recipient_fingerprint,
        &padded,
    )
}

/// Decrypts a session key previously produced by [`encrypt_session_key`]:
/// drives `crypto::ecdh::decrypt`, then strips padding.
pub fn decrypt_session_key<B: EcdhBackend>(
    backend: &B,
    curve: EccCurve,
    our_static_secret: &Ephemeral,
    ephemeral_public_point_mpi: &Mpi,
    kek_params: KekParams,
    recipient_fingerprint: &[u8],
    wrapped_wire: &[u8],
) -> Result<Vec<u8>> {
    let padded = ecdh::decrypt(
        backend,
        curve,
        our_static_secret,
        ephemeral_public_point_mpi,
        kek_params,
        recipient_fingerprint,
        wrapped_wire,
    )?;

    // Map every post-unwrap failure to the same `BadKey`, not a distinct
    // "bad padding" diagnostic (spec.md §7).
    unpad_pkcs5(&padded).map_err(|_| Error::BadKey)
}

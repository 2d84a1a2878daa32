//! Raw EC scalar multiplication, ephemeral scalar generation, and point
//! encoding — the collaborators `spec.md` §1 explicitly scopes out of the
//! core ("raw EC scalar multiplication and point encoding; random scalar
//! generation"). Modeled as a small trait, the way `sequoia-openpgp`
//! separates its `Asymmetric` backend trait from packet-level logic.
//!
//! Everything in `crypto::wrap_engine`, `crypto::kdf_input`, and
//! `crypto::kek` is curve-agnostic and never touches this module directly;
//! only `crypto::ecdh`'s pipeline functions call through it.

use rand::{CryptoRng, RngCore};

use crate::crypto::curve::EccCurve;
use crate::errors::{bad_public_key, bail_crypto, Result};
use crate::types::Mpi;

/// External collaborator contract: `ec_scalar_multiply` and `rand_scalar`
/// from `spec.md` §6, one implementation per curve family.
pub trait EcdhBackend {
    /// Generates an ephemeral scalar and returns it alongside the
    /// corresponding public point, both framed per this curve's MPI
    /// convention.
    fn generate_ephemeral(&self, curve: EccCurve, rng: &mut dyn RngFill) -> Result<Ephemeral>;

    /// Computes the shared point for `ephemeral_scalar` (as produced by
    /// `generate_ephemeral`, or the recipient's static private scalar on
    /// decrypt) against `their_public_point_mpi`.
    fn shared_point(
        &self,
        curve: EccCurve,
        scalar: &Ephemeral,
        their_public_point_mpi: &Mpi,
    ) -> Result<Mpi>;
}

/// Type-erased `CryptoRng + RngCore` so `EcdhBackend` stays object-safe.
pub trait RngFill {
    fn fill(&mut self, buf: &mut [u8]);
}

impl<T: RngCore + CryptoRng> RngFill for T {
    fn fill(&mut self, buf: &mut [u8]) {
        self.fill_bytes(buf);
    }
}

/// An ephemeral (or static, on decrypt) private scalar plus the public
/// point it corresponds to, both curve-specific but opaque to callers
/// outside this module.
pub struct Ephemeral {
    pub public_point_mpi: Mpi,
    secret: zeroize::Zeroizing<Vec<u8>>,
}

impl Ephemeral {
    pub fn from_static_secret(public_point_mpi: Mpi, secret_scalar: Vec<u8>) -> Self {
        Ephemeral { public_point_mpi, secret: zeroize::Zeroizing::new(secret_scalar) }
    }

    fn secret_bytes(&self) -> &[u8] {
        &self.secret
    }
}

/// Default backend dispatching each curve to its RustCrypto
/// implementation. Stateless: safe to share across threads, consistent
/// with `spec.md` §5 ("no shared mutable state exists within the core").
#[derive(Default, Clone, Copy)]
pub struct DefaultBackend;

impl EcdhBackend for DefaultBackend {
    fn generate_ephemeral(&self, curve: EccCurve, rng: &mut dyn RngFill) -> Result<Ephemeral> {
        match curve {
            EccCurve::Curve25519 => generate_x25519(rng),
            EccCurve::NistP256 => generate_nist_p256(rng),
            EccCurve::NistP384 => generate_nist_p384(rng),
            EccCurve::NistP521 => generate_nist_p521(rng),
        }
    }

    fn shared_point(
        &self,
        curve: EccCurve,
        scalar: &Ephemeral,
        their_public_point_mpi: &Mpi,
    ) -> Result<Mpi> {
        match curve {
            EccCurve::Curve25519 => x25519_shared(scalar, their_public_point_mpi),
            EccCurve::NistP256 => p256_shared(scalar, their_public_point_mpi),
            EccCurve::NistP384 => p384_shared(scalar, their_public_point_mpi),
            EccCurve::NistP521 => p521_shared(scalar, their_public_point_mpi),
        }
    }
}

fn generate_x25519(rng: &mut dyn RngFill) -> Result<Ephemeral> {
    use x25519_dalek::{PublicKey, StaticSecret};

    let mut bytes = [0u8; 32];
    rng.fill(&mut bytes);
    let secret = StaticSecret::from(bytes);
    let public = PublicKey::from(&secret);

    let mut framed = Vec::with_capacity(33);
    framed.push(0x40);
    framed.extend_from_slice(public.as_bytes());

    Ok(Ephemeral::from_static_secret(Mpi::from_raw(framed), secret.to_bytes().to_vec()))
}

fn x25519_shared(scalar: &Ephemeral, their_public_point_mpi: &Mpi) -> Result<Mpi> {
    use x25519_dalek::{PublicKey, StaticSecret};

    let their_bytes = their_public_point_mpi.as_bytes();
    if their_bytes.len() != 33 {
        bad_public_key!("invalid public point: expected 33 octets, got {}", their_bytes.len());
    }
    let their_bytes = &their_bytes[1..]; // strip the 0x40 framing octet
    let mut arr = [0u8; 32];
    arr.copy_from_slice(their_bytes);
    let their_public = PublicKey::from(arr);

    let mut our_bytes = [0u8; 32];
    our_bytes.copy_from_slice(scalar.secret_bytes());
    let our_secret = StaticSecret::from(our_bytes);

    let shared = our_secret.diffie_hellman(&their_public);

    // X25519's shared output has no native framing byte on the wire; this
    // crate's `SharedSecret::extract_x` expects one uniformly across
    // curves (spec.md §4.2), so a synthetic `0x40` is prepended here, the
    // same prefix this curve already uses for its public keys.
    let mut framed = Vec::with_capacity(33);
    framed.push(0x40);
    framed.extend_from_slice(shared.as_bytes());
    Ok(Mpi::from_raw(framed))
}

macro_rules! nist_curve_backend {
    ($generate:ident, $shared:ident, $crate_name:ident, $field_len:expr) => {
        fn $generate(rng: &mut dyn RngFill) -> Result<Ephemeral> {
            use $crate_name::ecdh::EphemeralSecret;
            use rand_core::{CryptoRng, RngCore};

            struct Adapter<'a>(&'a mut dyn RngFill);
            impl RngCore for Adapter<'_> {
                fn next_u32(&mut self) -> u32 {
                    let mut b = [0u8; 4];
                    self.0.fill(&mut b);
                    u32::from_le_bytes(b)
                }
                fn next_u64(&mut self) -> u64 {
                    let mut b = [0u8; 8];
                    self.0.fill(&mut b);
                    u64::from_le_bytes(b)
                }
                fn fill_bytes(&mut self, dest: &mut [u8]) {
                    self.0.fill(dest);
                }
                fn try_fill_bytes(
                    &mut self,
                    dest: &mut [u8],
                ) -> std::result::Result<(), rand_core::Error> {
                    self.0.fill(dest);
                    Ok(())
                }
            }
            impl CryptoRng for Adapter<'_> {}

            let mut adapter = Adapter(rng);
            let secret = EphemeralSecret::random(&mut adapter);
            let public = $crate_name::PublicKey::from(&secret);
            let encoded = public.to_encoded_point(false);

            let mut framed = Vec::with_capacity(1 + $field_len * 2);
            framed.push(0x04);
            framed.extend_from_slice(encoded.x().ok_or_else(|| {
                crate::errors::Error::CryptoError("generated point has no x coordinate".into())
            })?);
            framed.extend_from_slice(encoded.y().ok_or_else(|| {
                crate::errors::Error::CryptoError("generated point has no y coordinate".into())
            })?);

            // `EphemeralSecret` derefs to its `NonZeroScalar`; this crate's
            // own secret representation is just those scalar bytes.
            let secret_bytes = secret.as_ref().to_bytes().to_vec();

            Ok(Ephemeral::from_static_secret(Mpi::from_raw(framed), secret_bytes))
        }

        fn $shared(scalar: &Ephemeral, their_public_point_mpi: &Mpi) -> Result<Mpi> {
            use $crate_name::{PublicKey, SecretKey};
            use generic_array::GenericArray;

            let raw = their_public_point_mpi.as_bytes();
            if raw.first() != Some(&0x04) {
                bail_crypto!("expected uncompressed Weierstrass point framing octet 04");
            }
            let their_public = PublicKey::from_sec1_bytes(raw)
                .map_err(|e| crate::errors::Error::BadPublicKey(format!("{e}")))?;

            let our_secret = SecretKey::from_bytes(GenericArray::from_slice(scalar.secret_bytes()))
                .map_err(|e| crate::errors::Error::CryptoError(format!("{e}")))?;

            let shared = $crate_name::ecdh::diffie_hellman(
                our_secret.to_nonzero_scalar(),
                their_public.as_affine(),
            );
            let encoded = shared.raw_secret_bytes();

            // `raw_secret_bytes()` is the X coordinate alone; reframe with
            // the same `04` prefix convention `SharedSecret::extract_x`
            // expects, padding Y with zeros since only X is consumed.
            let mut framed = Vec::with_capacity(1 + $field_len * 2);
            framed.push(0x04);
            framed.extend_from_slice(encoded);
            framed.extend(std::iter::repeat(0u8).take($field_len));
            Ok(Mpi::from_raw(framed))
        }
    };
}

nist_curve_backend!(generate_nist_p256, p256_shared, p256, 32);
nist_curve_backend!(generate_nist_p384, p384_shared, p384, 48);
nist_curve_backend!(generate_nist_p521, p521_shared, p521, 66);

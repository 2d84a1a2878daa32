//! Error types shared by every module in this crate.
//!
//! The five kinds below are the ones named in the specification this crate
//! implements: `BadPublicKey`, `BadMpi`, `BadKey`, `OutOfMemory`, and
//! `CryptoError`. Nothing is swallowed; every fallible operation returns one
//! of these instead of panicking.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// `KekParams` blob malformed, hash/cipher id not in the enumerated set,
    /// or a public-point MPI shorter than `ceil(qbits/8)+1`.
    #[error("bad public key: {0}")]
    BadPublicKey(String),

    /// A session-key (or other) MPI's length is inconsistent with its
    /// self-described size octet.
    #[error("bad mpi: {0}")]
    BadMpi(String),

    /// AES Key Unwrap integrity check failed: wrong KEK, tampered wrap, or
    /// wrong recipient key. Also used for any post-unwrap validation
    /// failure the packet layer performs, so that wrap-tamper and
    /// padding-tamper are indistinguishable to callers (spec §7).
    #[error("bad key")]
    BadKey,

    /// The zeroizing/secure allocator refused an allocation.
    #[error("out of memory")]
    OutOfMemory,

    /// Unexpected backend failure (hash context open, MPI export, etc).
    /// Treated as fatal; callers should not retry.
    #[error("crypto backend error: {0}")]
    CryptoError(String),
}

/// Returns `Err(Error::BadPublicKey(...))` formatted like `format!`.
macro_rules! bad_public_key {
    ($($arg:tt)*) => {
        return Err($crate::errors::Error::BadPublicKey(format!($($arg)*)))
    };
}

/// Returns `Err(Error::BadMpi(...))` formatted like `format!`.
macro_rules! bad_mpi {
    ($($arg:tt)*) => {
        return Err($crate::errors::Error::BadMpi(format!($($arg)*)))
    };
}

/// Returns `Err(Error::CryptoError(...))` formatted like `format!`.
macro_rules! bail_crypto {
    ($($arg:tt)*) => {
        return Err($crate::errors::Error::CryptoError(format!($($arg)*)))
    };
}

/// `ensure!(cond, Variant, "msg {}", arg)` — like `anyhow::ensure!` but
/// picks one of the crate's error constructors instead of a string-only one.
macro_rules! ensure_or {
    ($cond:expr, $err:expr) => {
        if !($cond) {
            return Err($err);
        }
    };
}

pub(crate) use {bad_mpi, bad_public_key, bail_crypto, ensure_or};

//! OpenPGP Multi-Precision Integer (MPI) wire format.
//!
//! An MPI is a 2-octet big-endian bit-length followed by the value's
//! big-endian octets with no leading zero byte (RFC 4880 §3.2). This crate
//! only ever needs import/export, never arithmetic, so `Mpi` is a thin
//! newtype over the value's raw bytes.

use byteorder::{BigEndian, ByteOrder};

use crate::errors::{bad_mpi, Result};

#[derive(Clone, PartialEq, Eq)]
pub struct Mpi(Vec<u8>);

impl std::fmt::Debug for Mpi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Mpi").field(&format!("{} bytes", self.0.len())).finish()
    }
}

impl Mpi {
    /// Wraps already-normalized big-endian bytes (no leading zero, unless
    /// the value is exactly zero).
    pub fn from_raw(bytes: Vec<u8>) -> Self {
        Mpi(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Bit length as carried on the wire: the position of the highest set
    /// bit in the most significant byte, plus the full bytes below it.
    pub fn bit_len(&self) -> u16 {
        match self.0.first() {
            None => 0,
            Some(&msb) => {
                let extra_bits = 8 - msb.leading_zeros();
                (8 * (self.0.len() as u32 - 1) + extra_bits) as u16
            }
        }
    }

    /// Serializes as `[bit_len: u16 BE][value bytes]`.
    pub fn to_wire(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(2 + self.0.len());
        let mut len_buf = [0u8; 2];
        BigEndian::write_u16(&mut len_buf, self.bit_len());
        out.extend_from_slice(&len_buf);
        out.extend_from_slice(&self.0);
        out
    }

    /// Parses `[bit_len: u16 BE][value bytes]`, validating that the byte
    /// count implied by `bit_len` matches the bytes actually supplied.
    pub fn from_wire(buf: &[u8]) -> Result<(Self, &[u8])> {
        if buf.len() < 2 {
            bad_mpi!("mpi too short for length prefix: {} bytes", buf.len());
        }
        let bit_len = BigEndian::read_u16(&buf[..2]) as usize;
        let byte_len = bit_len.div_ceil(8);
        let rest = &buf[2..];
        if rest.len() < byte_len {
            bad_mpi!(
                "mpi length octet claims {} bytes, only {} available",
                byte_len,
                rest.len()
            );
        }
        let (value, tail) = rest.split_at(byte_len);
        Ok((Mpi(value.to_vec()), tail))
    }
}

impl From<Vec<u8>> for Mpi {
    fn from(bytes: Vec<u8>) -> Self {
        Mpi::from_raw(bytes)
    }
}

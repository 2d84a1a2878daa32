pub mod aes_kw;
pub mod backend;
pub mod curve;
pub mod ecdh;
pub mod hash;
pub mod kdf_input;
pub mod kek;
pub mod shared_secret;
pub mod sym;
pub mod wrap_engine;

pub use curve::EccCurve;
pub use hash::HashAlgorithm;
pub use kek::{default_kek_params, KekParams};
pub use shared_secret::SharedSecret;
pub use sym::SymmetricKeyAlgorithm;

//! Textbook RSA over toy parameters.
//!
//! - [`keys`]
//!   Derivation of the modulus and both exponents from two fixed primes.
//!
//! - [`pipeline`]
//!   Chunking a message, encrypting every chunk with the public exponent and
//!   decrypting it with the private one.
//!
//! Nothing here is secure. The parameters are tiny, there is no padding
//! scheme, and the private exponent formula is only correct for some inputs.

pub mod keys;
pub mod pipeline;

pub use keys::{KeyParams, PrivateKey, PublicKey, ToyKeyPair};
pub use pipeline::{Transcript, decrypt_chunks, encrypt_chunks, run};

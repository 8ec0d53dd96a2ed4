//! Arithmetic primitives.
//!
//! Currently a single primitive: modular exponentiation over fixed-width
//! unsigned integers. It is the only operation the encryption and decryption
//! passes need.

pub mod modpow;

pub use modpow::{ModularWord, modpow, modpow_in};

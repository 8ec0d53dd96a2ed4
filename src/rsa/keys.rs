//! Toy key derivation from two fixed primes.
//!
//! The key fields are computed with plain arithmetic:
//!
//! ```text
//! n   = p1 * p2
//! phi = (p1 - 1) * (p2 - 1)
//! d   = (2 * phi + 1) / e        (integer division)
//! ```
//!
//! `d` is **not** the modular inverse of `e` modulo `phi`. It only is when
//! `e` divides `2 * phi + 1` exactly, which happens for the default
//! parameters (`3 * 2011 = 6033 = 2 * 3016 + 1`) but not in general. The
//! formula is kept as is. [`ToyKeyPair::is_consistent`] reports whether the
//! derived pair actually satisfies `e * d ≡ 1 (mod phi)`.
//!
//! No primality or coprimality checks are performed.

use crate::error::{Error, Result};
use tracing::debug;

/// Inputs to key derivation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyParams {
    /// First prime.
    pub p1: u64,
    /// Second prime.
    pub p2: u64,
    /// Public (encryption) exponent.
    pub public_exponent: u64,
}

impl KeyParams {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.p1 < 2 || self.p2 < 2 {
            return Err(Error::InvalidArgument("primes must be at least 2"));
        }

        if self.public_exponent == 0 {
            return Err(Error::InvalidArgument("public exponent must be positive"));
        }

        Ok(())
    }
}

impl Default for KeyParams {
    /// `p1 = 53`, `p2 = 59`, `e = 3`.
    fn default() -> Self {
        Self {
            p1: 53,
            p2: 59,
            public_exponent: 3,
        }
    }
}

/// Encryption half of a key pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKey {
    pub exponent: u64,
    pub modulus: u64,
}

/// Decryption half of a key pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrivateKey {
    pub exponent: u64,
    pub modulus: u64,
}

/// Key fields derived from [`KeyParams`].
///
/// Both exponents are applied modulo the same `modulus`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToyKeyPair {
    modulus: u64,
    phi: u64,
    public_exponent: u64,
    private_exponent: u64,
}

impl ToyKeyPair {
    /// Derives the key fields from `params`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if a prime is below 2 or the public
    ///   exponent is zero.
    /// - [`Error::Overflow`] if `p1 * p2` or `2 * phi + 1` does not fit in a
    ///   `u64`.
    pub fn derive(params: &KeyParams) -> Result<Self> {
        params.validate()?;

        let modulus = params
            .p1
            .checked_mul(params.p2)
            .ok_or(Error::Overflow("p1 * p2 exceeds u64"))?;

        // p1, p2 >= 2, so (p1 - 1) * (p2 - 1) < p1 * p2 cannot overflow.
        let phi = (params.p1 - 1) * (params.p2 - 1);

        let private_exponent = phi
            .checked_mul(2)
            .and_then(|v| v.checked_add(1))
            .ok_or(Error::Overflow("2 * phi + 1 exceeds u64"))?
            / params.public_exponent;

        let keys = Self {
            modulus,
            phi,
            public_exponent: params.public_exponent,
            private_exponent,
        };

        debug!(
            modulus,
            phi,
            e = keys.public_exponent,
            d = keys.private_exponent,
            consistent = keys.is_consistent(),
            "derived toy key pair"
        );

        Ok(keys)
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Euler's totient of the modulus, assuming both inputs were prime.
    pub fn phi(&self) -> u64 {
        self.phi
    }

    pub fn public_exponent(&self) -> u64 {
        self.public_exponent
    }

    pub fn private_exponent(&self) -> u64 {
        self.private_exponent
    }

    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            exponent: self.public_exponent,
            modulus: self.modulus,
        }
    }

    pub fn private_key(&self) -> PrivateKey {
        PrivateKey {
            exponent: self.private_exponent,
            modulus: self.modulus,
        }
    }

    /// Whether `e * d ≡ 1 (mod phi)`.
    ///
    /// When this is `false`, decryption does not in general recover the
    /// plaintext.
    pub fn is_consistent(&self) -> bool {
        let product = self.public_exponent as u128 * self.private_exponent as u128;
        product % self.phi as u128 == 1 % self.phi as u128
    }
}

//! Square-and-multiply modular exponentiation.
//!
//! Computes `base^exponent mod modulus` with the right-to-left binary method:
//! the exponent is consumed one bit at a time from the least significant end,
//! and the running base is squared after every bit. Every product is reduced
//! immediately, so intermediate values never exceed `(modulus - 1)^2`.
//!
//! The running time is `O(log exponent)` modular multiplications. The loop
//! is not constant-time, which is acceptable for the toy parameters this
//! crate is built around and must not be relied upon for real keys.

use crate::error::{Error, Result};
use crate::primitives::modpow::width::ModularWord;

/// Computes `base^exponent mod modulus` over 64-bit words.
///
/// Residue products are formed in 128 bits, so every non-zero `u64` modulus
/// is accepted and the call never overflows.
///
/// # Returns
///
/// A value in `[0, modulus)`. For `exponent == 0` this is `1 mod modulus`,
/// and for `modulus == 1` it is always `0`.
///
/// # Errors
///
/// [`Error::InvalidArgument`] if `modulus` is zero.
///
/// # Example
///
/// ```
/// use textbook_rsa::primitives::modpow;
///
/// assert_eq!(modpow(79, 3, 3127).unwrap(), 2100);
/// ```
pub fn modpow(base: u64, exponent: u64, modulus: u64) -> Result<u64> {
    modpow_in(base, exponent, modulus)
}

/// Width-generic form of [`modpow`].
///
/// Works over any [`ModularWord`]. Widths without a native double-width
/// product reject moduli above [`ModularWord::MAX_SAFE_MODULUS`] before
/// starting the loop.
///
/// # Errors
///
/// - [`Error::InvalidArgument`] if `modulus` is zero.
/// - [`Error::Overflow`] if `modulus` exceeds the width's safe bound.
pub fn modpow_in<W: ModularWord>(base: W, exponent: W, modulus: W) -> Result<W> {
    if modulus == W::ZERO {
        return Err(Error::InvalidArgument("modulus must be positive"));
    }

    if modulus > W::MAX_SAFE_MODULUS {
        return Err(Error::Overflow("modulus too wide for residue products"));
    }

    let mut base = base.reduce(modulus);
    let mut exponent = exponent;
    let mut result = W::ONE.reduce(modulus);

    while exponent != W::ZERO {
        if exponent.is_odd() {
            result = result.mul_mod(base, modulus)?;
        }

        base = base.mul_mod(base, modulus)?;
        exponent = exponent.halve();
    }

    Ok(result)
}

//! Exact 128-bit multiply/divide helpers.
//!
//! Scaling a 64-bit time or cycle count by a 64-bit rate can overflow 64 bits
//! even when the scaled-down result fits. These helpers keep the full product
//! and divide it back down by a 32-bit divisor, so every conversion is bit-exact
//! and independent of host floating-point behavior.

/// Exact product of two 64-bit operands.
///
/// Never overflows: `u64::MAX * u64::MAX < u128::MAX`.
#[must_use]
#[inline]
pub const fn multiply_64_into_128(a: u64, b: u64) -> u128 {
    (a as u128) * (b as u128)
}

/// Divide a 128-bit value by a 32-bit divisor.
///
/// Returns `(quotient, remainder)` with floor rounding. A quotient wider than
/// 64 bits saturates to `u64::MAX`; use [`checked_divide_128_on_32`] to detect
/// that case instead.
///
/// # Panics
///
/// Panics if `divisor` is zero.
#[must_use]
#[inline]
pub fn divide_128_on_32(value: u128, divisor: u32) -> (u64, u32) {
    let divisor = u128::from(divisor);
    let quotient = value / divisor;
    // Remainder is strictly below a 32-bit divisor.
    let remainder = (value % divisor) as u32;
    (u64::try_from(quotient).unwrap_or(u64::MAX), remainder)
}

/// Divide a 128-bit value by a 32-bit divisor, rejecting unusable inputs.
///
/// Returns `None` if `divisor` is zero or the quotient does not fit in 64 bits.
#[must_use]
pub fn checked_divide_128_on_32(value: u128, divisor: u32) -> Option<(u64, u32)> {
    if divisor == 0 {
        return None;
    }
    let divisor = u128::from(divisor);
    let quotient = u64::try_from(value / divisor).ok()?;
    Some((quotient, (value % divisor) as u32))
}

/// `a * b / divisor` with a 128-bit intermediate, floor rounding, saturating
/// at `u64::MAX`.
///
/// # Panics
///
/// Panics if `divisor` is zero.
#[must_use]
#[inline]
pub fn mul_div(a: u64, b: u64, divisor: u32) -> u64 {
    divide_128_on_32(multiply_64_into_128(a, b), divisor).0
}

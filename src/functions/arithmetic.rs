//! Integer arithmetic primitives.
//!
//! Operands are `i64`; results widen to `i128` so that no pair of operands
//! can overflow, including `i64::MIN * i64::MIN` and `i64::MIN / -1`.

/// Multiply two operands without overflow.
pub fn multiply(a: i64, b: i64) -> i128 {
    i128::from(a) * i128::from(b)
}

/// Divide `a` by `b`, rounding the quotient toward zero.
///
/// The caller must ensure `b != 0`.
pub fn trunc_div(a: i64, b: i64) -> i128 {
    debug_assert!(b != 0, "trunc_div called with zero divisor");

    let magnitude = i128::from(a.unsigned_abs() / b.unsigned_abs());
    if (a < 0) != (b < 0) {
        -magnitude
    } else {
        magnitude
    }
}

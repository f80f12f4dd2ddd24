//! Checked numeric narrowing.
//!
//! Float to integer conversion truncates toward zero and raises a range
//! error when the result does not fit.

use crate::errors::{out_of_range, EvalResult};

/// Float to 32-bit integer.
pub fn to_int(value: f64) -> EvalResult<i32> {
    let truncated = value.trunc();
    if truncated.is_nan() || truncated < f64::from(i32::MIN) || truncated > f64::from(i32::MAX) {
        return Err(out_of_range());
    }
    Ok(truncated as i32)
}

/// Float to 64-bit integer.
pub fn to_int64(value: f64) -> EvalResult<i64> {
    let truncated = value.trunc();
    // 2^63 is exactly representable and is the first value out of range.
    if truncated.is_nan()
        || truncated < -9_223_372_036_854_775_808.0
        || truncated >= 9_223_372_036_854_775_808.0
    {
        return Err(out_of_range());
    }
    Ok(truncated as i64)
}

/// 64-bit to 32-bit integer.
pub fn int64_to_32(value: i64) -> EvalResult<i32> {
    i32::try_from(value).map_err(|_| out_of_range())
}

/// Reinterpret a pseudo-variable address as unsigned on 32-bit hosts so it
/// never reads back negative.
pub fn resize32(value: i64) -> i64 {
    value & 0xFFFF_FFFF
}

//! Narrowing conversions from JSON numbers.
//!
//! - [`to_double`] returns the nearest `f64`. Integers above 2^53 lose
//!   precision. With the `arbitrary_precision` feature, literals outside the
//!   `f64` range become infinite.
//! - [`to_int`] and [`to_long`] truncate toward zero and then saturate at the
//!   target type's bounds, the same as an `f64 as i32` cast. Nothing wraps.
//!
//! Every number serde_json can hold converts. The `Option` only covers
//! arbitrary-precision text that fails to parse.

use serde_json::Number;

/// Convert to double precision.
///
/// # Example
///
/// ```
/// use json_property::numeric::to_double;
/// use serde_json::Number;
///
/// assert_eq!(to_double(&Number::from(3)), Some(3.0));
/// ```
pub fn to_double(n: &Number) -> Option<f64> {
    n.as_f64().or_else(|| n.to_string().parse().ok())
}

/// Convert to a 64-bit integer: truncate toward zero, then saturate.
pub fn to_long(n: &Number) -> Option<i64> {
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    // Integer literal above i64::MAX.
    if n.as_u64().is_some() {
        return Some(i64::MAX);
    }
    to_double(n).map(|f| f as i64)
}

/// Convert to a 32-bit integer: truncate toward zero, then saturate.
///
/// # Example
///
/// ```
/// use json_property::numeric::to_int;
/// use serde_json::Number;
///
/// let n = Number::from_f64(-3.7).unwrap();
/// assert_eq!(to_int(&n), Some(-3));
/// assert_eq!(to_int(&Number::from(u64::MAX)), Some(i32::MAX));
/// ```
pub fn to_int(n: &Number) -> Option<i32> {
    to_long(n).map(saturate_i32)
}

fn saturate_i32(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn float(f: f64) -> Number {
        Number::from_f64(f).unwrap()
    }

    #[test]
    fn test_to_double() {
        assert_eq!(to_double(&Number::from(42)), Some(42.0));
        assert_eq!(to_double(&Number::from(-7i64)), Some(-7.0));
        assert_eq!(to_double(&float(3.7)), Some(3.7));
        assert_eq!(to_double(&Number::from(u64::MAX)), Some(u64::MAX as f64));
    }

    #[test]
    fn test_to_long_truncates_toward_zero() {
        assert_eq!(to_long(&float(3.7)), Some(3));
        assert_eq!(to_long(&float(-3.7)), Some(-3));
        assert_eq!(to_long(&float(0.999)), Some(0));
        assert_eq!(to_long(&float(-0.5)), Some(0));
    }

    #[test]
    fn test_to_long_saturates() {
        assert_eq!(to_long(&Number::from(u64::MAX)), Some(i64::MAX));
        assert_eq!(to_long(&float(1e300)), Some(i64::MAX));
        assert_eq!(to_long(&float(-1e300)), Some(i64::MIN));
        assert_eq!(to_long(&Number::from(i64::MIN)), Some(i64::MIN));
    }

    #[test]
    fn test_to_int() {
        assert_eq!(to_int(&Number::from(7)), Some(7));
        assert_eq!(to_int(&float(3.7)), Some(3));
        assert_eq!(to_int(&Number::from(i64::from(i32::MAX) + 1)), Some(i32::MAX));
        assert_eq!(to_int(&Number::from(i64::from(i32::MIN) - 1)), Some(i32::MIN));
        assert_eq!(to_int(&float(-1e20)), Some(i32::MIN));
    }
}

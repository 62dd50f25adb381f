/// Smallest `f64` that is strictly above every `i64` (`2^63`).
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Widens an `i64` to `f64`.
///
/// Magnitudes above `2^53` round to the nearest representable double, which
/// is the promotion rule for mixed `Int`/`Double` arithmetic.
///
/// ## Example
/// ```
/// use russet::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(-3), -3.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Truncates an `f64` toward zero and converts it to `i64`.
///
/// ## Errors
/// Returns `Err(error)` if the value is NaN, infinite, or outside the `i64`
/// range once truncated.
///
/// ## Parameters
/// - `value`: The float to convert.
/// - `error`: The error to return if the conversion is impossible.
///
/// ## Example
/// ```
/// use russet::util::num::f64_to_i64_truncated;
///
/// assert_eq!(f64_to_i64_truncated(7.9, "bad"), Ok(7));
/// assert_eq!(f64_to_i64_truncated(-7.9, "bad"), Ok(-7));
/// assert!(f64_to_i64_truncated(f64::NAN, "bad").is_err());
/// assert!(f64_to_i64_truncated(1e30, "bad").is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i64_truncated<E>(value: f64, error: E) -> Result<i64, E> {
    let truncated = value.trunc();

    if !truncated.is_finite() || truncated >= I64_UPPER_BOUND || truncated < -I64_UPPER_BOUND {
        return Err(error);
    }

    Ok(truncated as i64)
}

/// Converts a `usize` to `i64` if it fits.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `i64::MAX`.
///
/// ## Example
/// ```
/// use russet::util::num::usize_to_i64_checked;
///
/// assert_eq!(usize_to_i64_checked(12, "too big"), Ok(12));
/// ```
pub fn usize_to_i64_checked<E>(value: usize, error: E) -> Result<i64, E> {
    i64::try_from(value).map_err(|_| error)
}

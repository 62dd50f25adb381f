/// Numeric conversion helpers.
///
/// This module provides the conversions between `i64`, `usize` and `f64`
/// that the evaluator needs, with the lossy or fallible cases spelled out in
/// one place instead of scattered `as` casts.
pub mod num;

/// Numeric conversion helpers.
///
/// Safe conversions between `i64`, `u32` and `f64` used by the integer/float
/// promotion rules. Every function returns a `Result` so that a conversion
/// that would silently lose information surfaces as a runtime error instead.
pub mod num;

//! Scalar helpers and annotated constants.

pub const A: i64 = 1;
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.14;
pub const I_UNDERSTAND_ANNOTATIONS: bool = true;
pub const SCHOOL: &str = "Holberton";

#[must_use]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

#[must_use]
pub fn concat(first: &str, second: &str) -> String {
    format!("{first}{second}")
}

/// Largest integer not greater than `n`, saturating at the `i64` bounds.
#[must_use]
pub fn floor(n: f64) -> i64 {
    n.floor() as i64
}

/// Shortest round-tripping form of `n`; integral values keep a trailing `.0`.
#[must_use]
pub fn to_str(n: f64) -> String {
    format!("{n:?}")
}

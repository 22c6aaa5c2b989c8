//! Portable reference maximum.
//!
//! Used as the fallback routine on targets without a hand-written assembly
//! version, and as the oracle the assembly routine and the sandbox are
//! checked against.

/// Greatest of three values.
#[inline]
pub fn max_of_three(a: i64, b: i64, c: i64) -> i64 {
    a.max(b).max(c)
}

/// Greatest of three export-width values.
#[inline]
pub fn max_of_three_i32(a: i32, b: i32, c: i32) -> i32 {
    a.max(b).max(c)
}

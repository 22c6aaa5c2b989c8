//! Widening and checked narrowing between the export width (`i32`) and the
//! routine width (`i64`).

use crate::error::{AbiError, AbiResult};
use crate::types::Operands;

/// Widen one export-width value to the routine width. Lossless.
#[inline]
pub fn widen(v: i32) -> i64 {
    i64::from(v)
}

/// Widen all three export-width operands.
#[inline]
pub fn widen_all(a: i32, b: i32, c: i32) -> Operands {
    Operands::new(widen(a), widen(b), widen(c))
}

/// Narrow a routine-width result back to the export width.
///
/// Returns `AbiError::Narrowing` instead of truncating.
#[inline]
pub fn narrow(v: i64) -> AbiResult<i32> {
    i32::try_from(v).map_err(|_| AbiError::Narrowing { value: v })
}

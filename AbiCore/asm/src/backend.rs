//! Routine interface — abstraction over "compute the maximum of three".
//!
//! The `MaxRoutine` trait decouples callers (the export shim, tests) from the
//! implementation on the far side of the boundary.
//!
//! - In production: implemented by [`AsmRoutine`] (the linked `maxofthree`)
//! - In tests: [`ReferenceRoutine`] (portable Rust) or a test-local double

use maxthree_primitives::{reference, Operands};

use crate::routine;

/// Something that computes the greatest of three signed 64-bit values.
///
/// Implementations must be pure: same inputs, same output, no side effects.
pub trait MaxRoutine {
    fn max_of_three(&self, a: i64, b: i64, c: i64) -> i64;

    /// Short identifier for diagnostics.
    fn name(&self) -> &'static str;

    fn max_of(&self, ops: Operands) -> i64 {
        self.max_of_three(ops.a, ops.b, ops.c)
    }
}

/// The linked `maxofthree` symbol.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsmRoutine;

impl MaxRoutine for AsmRoutine {
    fn max_of_three(&self, a: i64, b: i64, c: i64) -> i64 {
        routine::max_of_three(a, b, c)
    }

    fn name(&self) -> &'static str {
        routine::routine_kind().as_str()
    }
}

/// Portable Rust maximum.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferenceRoutine;

impl MaxRoutine for ReferenceRoutine {
    fn max_of_three(&self, a: i64, b: i64, c: i64) -> i64 {
        reference::max_of_three(a, b, c)
    }

    fn name(&self) -> &'static str {
        "reference"
    }
}

impl<R: MaxRoutine + ?Sized> MaxRoutine for &R {
    fn max_of_three(&self, a: i64, b: i64, c: i64) -> i64 {
        (**self).max_of_three(a, b, c)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

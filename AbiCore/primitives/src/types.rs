//! Core constants and operand types for the `maxofthree` boundary.
//!
//! These are shared by the assembly routine, the export shim, and the
//! sandbox host that validates the shim's exports.

/// Value returned by the `GetAnswerOfLife` export.
pub const ANSWER_OF_LIFE: i32 = 42;

/// Unmangled name of the constant export.
pub const EXPORT_ANSWER_OF_LIFE: &str = "GetAnswerOfLife";

/// Unmangled name of the forwarding export.
pub const EXPORT_MAX_OF_THREE: &str = "CallAsmMaxOfThree";

/// Link name of the external three-argument maximum routine.
///
/// `global_asm!` needs a literal, so the assembly spells it out; keep the two in step.
pub const MAX_OF_THREE_SYMBOL: &str = "maxofthree";

/// The three operands of one `maxofthree` call, already widened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operands {
    pub a: i64,
    pub b: i64,
    pub c: i64,
}

impl Operands {
    pub const fn new(a: i64, b: i64, c: i64) -> Self {
        Self { a, b, c }
    }
}

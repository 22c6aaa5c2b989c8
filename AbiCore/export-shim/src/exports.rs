//! Exported boundary functions.
//!
//! Both functions use C linkage and unmangled names. They must never panic,
//! print, or log: the caller's runtime may not tolerate any of it.

use maxthree_asm::{AsmRoutine, MaxRoutine};
use maxthree_primitives::{narrow, widen_all, AbiResult, ANSWER_OF_LIFE};

/// Returns 42.
#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn GetAnswerOfLife() -> i32 {
    ANSWER_OF_LIFE
}

/// Greatest of `a`, `b`, `c`, computed by the linked `maxofthree` routine.
///
/// Each operand is widened to `i64` for the call and the result is narrowed
/// back with a checked conversion. The maximum of three `i32` values always
/// fits in `i32`, so the check only fails if the routine breaks its contract;
/// in that case the process aborts without output rather than returning a
/// truncated value.
#[no_mangle]
#[allow(non_snake_case)]
pub extern "C" fn CallAsmMaxOfThree(a: i32, b: i32, c: i32) -> i32 {
    match call_max_of_three_with(AsmRoutine, a, b, c) {
        Ok(max) => max,
        Err(_) => std::process::abort(),
    }
}

/// Checked core of `CallAsmMaxOfThree`, generic over the routine.
pub fn call_max_of_three_with<R: MaxRoutine>(routine: R, a: i32, b: i32, c: i32) -> AbiResult<i32> {
    let wide = routine.max_of(widen_all(a, b, c));
    narrow(wide)
}

//! `maxthree-export` — C-linkage export shim for cross-runtime callers.
//!
//! This crate builds to a shared library (and, for the sandbox, a `.wasm`
//! module) exporting two functions:
//!
//! - `GetAnswerOfLife` — constant 42
//! - `CallAsmMaxOfThree` — forward three `i32` operands to `maxofthree`
//!
//! **Side effects:** exported functions do no I/O of any kind. Printing from
//! inside a function invoked across some managed-runtime boundaries takes
//! the caller process down, so the exports stay pure computation. The WASM
//! build therefore imports nothing, which the sandbox checks.
//!
//! The `maxthree-demo` binary in this package is the native entry routine.

mod exports;

// Re-export the exported functions so the linker sees them.
// They are already #[no_mangle] pub extern "C" in exports.rs.
pub use exports::{call_max_of_three_with, CallAsmMaxOfThree, GetAnswerOfLife};

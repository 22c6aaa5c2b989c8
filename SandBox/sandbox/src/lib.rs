//! `maxthree-sandbox` — Wasmtime host for the `maxofthree` export shim.
//!
//! This crate loads a WebAssembly build of `maxthree-export` and calls its
//! exports the way a foreign runtime would. It enforces:
//!
//! - **ABI shape:** `GetAnswerOfLife: () -> i32` and
//!   `CallAsmMaxOfThree: (i32, i32, i32) -> i32` must be exported
//! - **No side-effect channels:** the module may not import anything, so it
//!   cannot print, log, or reach the host
//! - **Fuel metering:** instruction-level metering bounds every call
//! - **Memory limits:** bounded linear memory
//! - **Isolation:** every call runs in a fresh instance
//!
//! The primary entry points are [`ShimSandbox::max_of_three`] and
//! [`ShimSandbox::check_conformance`].

pub mod error;
pub mod config;
pub mod validation;
pub mod runtime;

pub use error::SandboxError;
pub use config::SandboxConfig;
pub use runtime::{ShimSandbox, CONFORMANCE_CASES};

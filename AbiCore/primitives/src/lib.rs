//! `maxthree-primitives` — foundational types for the `maxofthree` ABI boundary.
//!
//! This crate provides the constants, export names, error type, checked
//! integer conversions, and portable reference maximum shared by the
//! assembly routine crate, the export shim, and the sandbox host.
//!
//! Supports `#![no_std]` (use `default-features = false`).

#![cfg_attr(not(feature = "std"), no_std)]

pub mod types;
pub mod error;
pub mod convert;
pub mod reference;

// Re-export commonly used items at the crate root for convenience.
pub use types::{
    Operands, ANSWER_OF_LIFE, EXPORT_ANSWER_OF_LIFE, EXPORT_MAX_OF_THREE, MAX_OF_THREE_SYMBOL,
};
pub use error::{AbiError, AbiResult};
pub use convert::{narrow, widen, widen_all};

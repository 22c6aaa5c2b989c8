//! `maxthree-asm` — the external `maxofthree` routine and its Rust-side seam.
//!
//! This crate owns the one piece of code that lives on the far side of the
//! foreign-function boundary: a three-argument signed maximum written in
//! assembly with an explicitly fixed calling convention.
//!
//! ## Architecture
//!
//! - [`routine`] — the `maxofthree` symbol (`global_asm!` on x86-64 and
//!   AArch64, a Rust `extern "C"` definition elsewhere) and its safe wrapper
//! - [`inline`] — a short register-level add sequence embedded with `asm!`
//! - [`backend::MaxRoutine`] — trait abstracting "something that computes the
//!   maximum of three", implemented by [`AsmRoutine`] and [`ReferenceRoutine`]

#![cfg_attr(not(feature = "std"), no_std)]

pub mod routine;
pub mod inline;
pub mod backend;

// Re-export key items for convenience
pub use routine::{max_of_three, routine_kind, RoutineKind};
pub use inline::add_three;
pub use backend::{AsmRoutine, MaxRoutine, ReferenceRoutine};

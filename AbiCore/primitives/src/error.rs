//! Error types for the `maxofthree` boundary.
//!
//! No boundary operation can fail for inputs that satisfy its precondition.
//! The one checked contract is that a 64-bit intermediate narrows back to the
//! 32-bit export width without loss.

/// Boundary error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AbiError {
    /// A wide intermediate did not fit in the 32-bit export width.
    #[error("value {value} does not fit in i32")]
    Narrowing { value: i64 },
}

/// Convenience result type for boundary operations.
pub type AbiResult<T> = core::result::Result<T, AbiError>;

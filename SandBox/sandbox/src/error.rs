//! Sandbox error types.

/// Top-level error type for the sandbox crate.
#[derive(Debug, thiserror::Error)]
pub enum SandboxError {
    /// Wasmtime engine, compilation, or instantiation error.
    #[error("wasmtime error: {0}")]
    Wasmtime(#[from] anyhow::Error),

    /// Module validation failed (missing exports, imports present, etc.).
    #[error("validation error: {0}")]
    ValidationError(String),

    /// Fuel exhausted during an export call.
    #[error("fuel exhausted (instruction limit)")]
    FuelExhausted,

    /// WASM guest trapped.
    #[error("guest trapped: {0}")]
    GuestTrapped(String),

    /// An export returned a value that breaks its contract.
    #[error("contract violation: {0}")]
    ContractViolation(String),
}

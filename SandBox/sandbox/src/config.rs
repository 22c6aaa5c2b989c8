//! Sandbox configuration.

/// Bytes per WebAssembly page.
pub const WASM_PAGE_SIZE: u64 = 65_536;

/// Configuration for the WASM sandbox.
///
/// Controls memory limits and instruction fuel for each export call.
#[derive(Debug, Clone)]
pub struct SandboxConfig {
    /// Maximum linear memory pages (1 page = 64 KiB).
    /// Default: 256 pages = 16 MiB.
    pub max_memory_pages: u32,

    /// Wasmtime fuel limit per export call.
    /// Prevents a misbehaving shim from hanging its caller.
    pub fuel_limit: u64,
}

impl SandboxConfig {
    /// Linear memory cap in bytes.
    pub fn max_memory_bytes(&self) -> u64 {
        u64::from(self.max_memory_pages) * WASM_PAGE_SIZE
    }

    /// Linear memory cap as a host `usize`, saturating where the host
    /// address space is narrower than the configured cap.
    pub fn max_memory_usize(&self) -> usize {
        usize::try_from(self.max_memory_bytes()).unwrap_or(usize::MAX)
    }
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            max_memory_pages: 256,       // 16 MiB
            fuel_limit: 10_000_000,
        }
    }
}

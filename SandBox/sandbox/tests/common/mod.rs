//! Shared test helpers for integration tests.
//!
//! Provides WAT fixtures standing in for the export shim (well-behaved and
//! deliberately broken), plus a loader for the real WASM artifact.

#![allow(dead_code)]

use maxthree_sandbox::{SandboxConfig, ShimSandbox};

/// WASM artifact path (relative to sandbox crate manifest dir).
///
/// Produced by `AbiCore/wasm/build.sh`.
pub const WASM_ARTIFACT: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../AbiCore/wasm/artifacts/maxthree_export.wasm"
);

// ── WAT fixtures ──

/// Mirrors the shim: widen to i64, take the maximum, narrow back.
pub const SHIM_WAT: &str = r#"
    (module
        (func $maxofthree (param i64 i64 i64) (result i64)
            (local $m i64)
            (local.set $m (local.get 0))
            (if (i64.gt_s (local.get 1) (local.get $m))
                (then (local.set $m (local.get 1))))
            (if (i64.gt_s (local.get 2) (local.get $m))
                (then (local.set $m (local.get 2))))
            (local.get $m))
        (func (export "GetAnswerOfLife") (result i32)
            i32.const 42)
        (func (export "CallAsmMaxOfThree") (param i32 i32 i32) (result i32)
            (i32.wrap_i64
                (call $maxofthree
                    (i64.extend_i32_s (local.get 0))
                    (i64.extend_i32_s (local.get 1))
                    (i64.extend_i32_s (local.get 2)))))
    )
"#;

/// Compares unsigned, so negative operands win.
pub const UNSIGNED_SHIM_WAT: &str = r#"
    (module
        (func (export "GetAnswerOfLife") (result i32)
            i32.const 42)
        (func (export "CallAsmMaxOfThree") (param i32 i32 i32) (result i32)
            (local $m i32)
            (local.set $m (local.get 0))
            (if (i32.gt_u (local.get 1) (local.get $m))
                (then (local.set $m (local.get 1))))
            (if (i32.gt_u (local.get 2) (local.get $m))
                (then (local.set $m (local.get 2))))
            (local.get $m))
    )
"#;

/// Returns the wrong constant.
pub const WRONG_ANSWER_WAT: &str = r#"
    (module
        (func (export "GetAnswerOfLife") (result i32)
            i32.const 41)
        (func (export "CallAsmMaxOfThree") (param i32 i32 i32) (result i32)
            local.get 0)
    )
"#;

/// Counts calls in a mutable global; correct only on a fresh instance.
pub const STATEFUL_SHIM_WAT: &str = r#"
    (module
        (global $calls (mut i32) (i32.const 0))
        (func (export "GetAnswerOfLife") (result i32)
            (global.set $calls (i32.add (global.get $calls) (i32.const 1)))
            (i32.add (i32.const 41) (global.get $calls)))
        (func (export "CallAsmMaxOfThree") (param i32 i32 i32) (result i32)
            (global.set $calls (i32.add (global.get $calls) (i32.const 1)))
            (i32.add (local.get 0) (i32.sub (global.get $calls) (i32.const 1))))
    )
"#;

/// Spins forever in `CallAsmMaxOfThree`.
pub const LOOPING_SHIM_WAT: &str = r#"
    (module
        (func (export "GetAnswerOfLife") (result i32)
            i32.const 42)
        (func (export "CallAsmMaxOfThree") (param i32 i32 i32) (result i32)
            (loop $spin
                (br $spin))
            i32.const 0)
    )
"#;

/// Traps in `CallAsmMaxOfThree`, the way an aborting shim does on wasm32.
pub const TRAPPING_SHIM_WAT: &str = r#"
    (module
        (func (export "GetAnswerOfLife") (result i32)
            i32.const 42)
        (func (export "CallAsmMaxOfThree") (param i32 i32 i32) (result i32)
            unreachable)
    )
"#;

/// A shim that prints through WASI before answering.
pub const PRINTING_SHIM_WAT: &str = r#"
    (module
        (import "wasi_snapshot_preview1" "fd_write"
            (func $fd_write (param i32 i32 i32 i32) (result i32)))
        (memory (export "memory") 1)
        (data (i32.const 16) "42\n")
        (data (i32.const 0) "\10\00\00\00\03\00\00\00")
        (func (export "GetAnswerOfLife") (result i32)
            (drop (call $fd_write (i32.const 1) (i32.const 0) (i32.const 1) (i32.const 8)))
            i32.const 42)
        (func (export "CallAsmMaxOfThree") (param i32 i32 i32) (result i32)
            local.get 0)
    )
"#;

/// Declares a private memory larger than the default limit.
pub const HUNGRY_SHIM_WAT: &str = r#"
    (module
        (memory 300)
        (func (export "GetAnswerOfLife") (result i32)
            i32.const 42)
        (func (export "CallAsmMaxOfThree") (param i32 i32 i32) (result i32)
            local.get 0)
    )
"#;

// ── Sandbox loaders ──

/// Load a WAT fixture with the default config.
pub fn load_wat(wat: &str) -> ShimSandbox {
    load_wat_with_config(wat, SandboxConfig::default())
}

/// Load a WAT fixture with a custom config.
pub fn load_wat_with_config(wat: &str, config: SandboxConfig) -> ShimSandbox {
    ShimSandbox::new(wat.as_bytes(), config).expect("fixture should validate")
}

/// Load the real WASM artifact built from the export shim.
pub fn load_artifact() -> ShimSandbox {
    load_artifact_with_config(SandboxConfig::default())
}

/// Load the real WASM artifact with a custom config.
pub fn load_artifact_with_config(config: SandboxConfig) -> ShimSandbox {
    let path = std::path::Path::new(WASM_ARTIFACT);
    assert!(
        path.exists(),
        "WASM artifact not found at {:?}. Build with: AbiCore/wasm/build.sh",
        path
    );
    ShimSandbox::from_file(path, config).expect("failed to load artifact")
}

// ── Oracles ──

/// Mathematical maximum, written independently of the crates under test.
pub fn expected_max(a: i32, b: i32, c: i32) -> i32 {
    let mut m = a;
    if b > m {
        m = b;
    }
    if c > m {
        m = c;
    }
    m
}

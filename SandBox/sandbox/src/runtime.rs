//! Sandbox runtime — Wasmtime engine, module loading, and export calls.
//!
//! The `ShimSandbox` struct is the main entry point. It loads a WASM build of
//! the export shim, validates it, and calls its exports with the same
//! argument and result widths a foreign caller would use.

use std::path::Path;

use log::{debug, info, warn};
use wasmtime::{
    Config, Engine, Instance, Module, Store, StoreLimits, StoreLimitsBuilder, Trap,
};

use maxthree_primitives::{
    reference, ANSWER_OF_LIFE, EXPORT_ANSWER_OF_LIFE, EXPORT_MAX_OF_THREE,
};

use crate::config::SandboxConfig;
use crate::error::SandboxError;
use crate::validation::validate_module;

/// Default inputs for [`ShimSandbox::check_conformance`].
pub const CONFORMANCE_CASES: &[(i32, i32, i32)] = &[
    (1, 2, 3),
    (150, 12, 11),
    (12, 150, 11),
    (-1, -2, -3),
    (0, 0, 0),
    (i32::MIN, i32::MIN, i32::MIN),
    (i32::MIN, 0, i32::MAX),
    (i32::MAX, i32::MAX - 1, i32::MIN),
];

/// Per-call store data.
struct CallState {
    limits: StoreLimits,
}

/// Wasmtime host for the export shim.
///
/// Compiles and validates the module once, then creates a fresh instance for
/// every export call so no state carries over between calls.
pub struct ShimSandbox {
    engine: Engine,
    module: Module,
    config: SandboxConfig,
}

impl ShimSandbox {
    /// Create a new sandbox from WASM bytecode (binary or text).
    ///
    /// Validates the module's exports and imports before accepting.
    pub fn new(wasm_bytes: &[u8], config: SandboxConfig) -> Result<Self, SandboxError> {
        let engine = create_engine(&config)?;
        let module = Module::new(&engine, wasm_bytes)?;
        validate_module(&module, &config)?;
        debug!("loaded export shim from {} bytes", wasm_bytes.len());
        Ok(Self {
            engine,
            module,
            config,
        })
    }

    /// Load from a `.wasm` file path.
    pub fn from_file(path: &Path, config: SandboxConfig) -> Result<Self, SandboxError> {
        let engine = create_engine(&config)?;
        let module = Module::from_file(&engine, path)?;
        validate_module(&module, &config)?;
        info!("loaded export shim from {}", path.display());
        Ok(Self {
            engine,
            module,
            config,
        })
    }

    /// Call `GetAnswerOfLife`.
    pub fn answer_of_life(&self) -> Result<i32, SandboxError> {
        let (mut store, instance) = self.instantiate()?;
        let func = instance.get_typed_func::<(), i32>(&mut store, EXPORT_ANSWER_OF_LIFE)?;
        handle_trap(func.call(&mut store, ()))
    }

    /// Call `CallAsmMaxOfThree`.
    pub fn max_of_three(&self, a: i32, b: i32, c: i32) -> Result<i32, SandboxError> {
        let (mut store, instance) = self.instantiate()?;
        let func = instance
            .get_typed_func::<(i32, i32, i32), i32>(&mut store, EXPORT_MAX_OF_THREE)?;
        handle_trap(func.call(&mut store, (a, b, c)))
    }

    /// Check both exports against their contracts.
    ///
    /// `GetAnswerOfLife` must return 42 and `CallAsmMaxOfThree` must return the
    /// numerical maximum of every case.
    pub fn check_conformance(&self, cases: &[(i32, i32, i32)]) -> Result<(), SandboxError> {
        let answer = self.answer_of_life()?;
        if answer != ANSWER_OF_LIFE {
            return Err(SandboxError::ContractViolation(format!(
                "{} returned {}, expected {}",
                EXPORT_ANSWER_OF_LIFE, answer, ANSWER_OF_LIFE
            )));
        }

        for &(a, b, c) in cases {
            let got = self.max_of_three(a, b, c)?;
            let expected = reference::max_of_three_i32(a, b, c);
            if got != expected {
                return Err(SandboxError::ContractViolation(format!(
                    "{}({}, {}, {}) returned {}, expected {}",
                    EXPORT_MAX_OF_THREE, a, b, c, got, expected
                )));
            }
        }

        debug!("export shim conforms on {} cases", cases.len());
        Ok(())
    }

    /// Fresh store with fuel and memory limits, plus a new instance.
    fn instantiate(&self) -> Result<(Store<CallState>, Instance), SandboxError> {
        let limits = StoreLimitsBuilder::new()
            .memory_size(self.config.max_memory_usize())
            .instances(1)
            .build();

        let mut store = Store::new(&self.engine, CallState { limits });
        store.limiter(|state| &mut state.limits);
        store.set_fuel(self.config.fuel_limit)?;

        // Validation guarantees there is nothing to import.
        let instance = Instance::new(&mut store, &self.module, &[])?;
        Ok((store, instance))
    }
}

/// Create a Wasmtime engine with deterministic configuration.
fn create_engine(config: &SandboxConfig) -> Result<Engine, SandboxError> {
    let mut wasm_config = Config::new();

    // Fuel metering — bounds every export call
    wasm_config.consume_fuel(true);

    // Determinism enforcement
    wasm_config.wasm_threads(false);
    wasm_config.wasm_simd(false);
    wasm_config.wasm_relaxed_simd(false);
    wasm_config.wasm_multi_memory(false);
    wasm_config.cranelift_nan_canonicalization(true);

    // Memory limits
    wasm_config.memory_guaranteed_dense_image_size(config.max_memory_bytes().min(16 * 1024 * 1024));

    Ok(Engine::new(&wasm_config)?)
}

/// Handle a guest function call result, converting traps to SandboxError.
///
/// Fuel exhaustion → `SandboxError::FuelExhausted`
/// Other traps → `SandboxError::GuestTrapped`
fn handle_trap<R>(result: Result<R, anyhow::Error>) -> Result<R, SandboxError> {
    match result {
        Ok(val) => Ok(val),
        Err(e) => match e.downcast_ref::<Trap>() {
            Some(Trap::OutOfFuel) => {
                warn!("export call ran out of fuel");
                Err(SandboxError::FuelExhausted)
            }
            _ => {
                let msg = format!("{:#}", e);
                warn!("export call trapped: {}", msg);
                Err(SandboxError::GuestTrapped(msg))
            }
        },
    }
}

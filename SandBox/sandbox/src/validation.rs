//! WASM module validation — export ABI and side-effect checks.
//!
//! Validates that a compiled module is a well-formed export shim before the
//! sandbox will call it. Checks:
//!
//! 1. Required exports present with the exact `i32` signatures
//! 2. No imports of any kind (WASI or otherwise)
//! 3. Exported memories, if any, start within the configured page limit

use log::{debug, warn};
use maxthree_primitives::{EXPORT_ANSWER_OF_LIFE, EXPORT_MAX_OF_THREE};
use wasmtime::{ExternType, Module, ValType};

use crate::config::SandboxConfig;
use crate::error::SandboxError;

/// Check if a ValType is i32.
fn is_i32(vt: &ValType) -> bool {
    matches!(vt, ValType::I32)
}

/// Expected export: (name, param_count_of_i32, result_count_of_i32).
/// All params and results are i32 at the export boundary.
const REQUIRED_EXPORTS: &[(&str, usize, usize)] = &[
    (EXPORT_ANSWER_OF_LIFE, 0, 1),
    (EXPORT_MAX_OF_THREE, 3, 1),
];

/// Validate that a WASM module is an acceptable export shim.
pub fn validate_module(module: &Module, config: &SandboxConfig) -> Result<(), SandboxError> {
    let result = validate_exports(module)
        .and_then(|()| validate_imports(module))
        .and_then(|()| validate_memory(module, config));
    match &result {
        Ok(()) => debug!("module passed shim validation"),
        Err(e) => warn!("rejecting module: {}", e),
    }
    result
}

/// Check that all required exports are present with correct signatures.
fn validate_exports(module: &Module) -> Result<(), SandboxError> {
    for &(name, expected_param_count, expected_result_count) in REQUIRED_EXPORTS {
        let export = module
            .exports()
            .find(|e| e.name() == name)
            .ok_or_else(|| {
                SandboxError::ValidationError(format!("missing required export: {}", name))
            })?;

        let func_ty = match export.ty() {
            ExternType::Func(ft) => ft,
            _ => {
                return Err(SandboxError::ValidationError(format!(
                    "export '{}' must be a function",
                    name
                )));
            }
        };

        let params: Vec<ValType> = func_ty.params().collect();
        let results: Vec<ValType> = func_ty.results().collect();

        if params.len() != expected_param_count || !params.iter().all(is_i32) {
            return Err(SandboxError::ValidationError(format!(
                "export '{}' has wrong param signature: expected {} i32 params, got {} params",
                name, expected_param_count, params.len()
            )));
        }

        if results.len() != expected_result_count || !results.iter().all(is_i32) {
            return Err(SandboxError::ValidationError(format!(
                "export '{}' has wrong result signature: expected {} i32 results, got {} results",
                name, expected_result_count, results.len()
            )));
        }
    }

    Ok(())
}

/// Reject every import. A shim that imports can reach the host, and the
/// usual reason to import (WASI `fd_write`) is exactly the printing that
/// crashes managed callers.
fn validate_imports(module: &Module) -> Result<(), SandboxError> {
    if let Some(import) = module.imports().next() {
        let module_name = import.module();

        if module_name.starts_with("wasi") {
            return Err(SandboxError::ValidationError(format!(
                "WASI import not allowed: {}::{}",
                module_name,
                import.name()
            )));
        }

        return Err(SandboxError::ValidationError(format!(
            "export shim must not import anything, found {}::{}",
            module_name,
            import.name()
        )));
    }

    Ok(())
}

/// Check that exported memories fit the configured limit at instantiation.
fn validate_memory(module: &Module, config: &SandboxConfig) -> Result<(), SandboxError> {
    for export in module.exports() {
        if let ExternType::Memory(mem) = export.ty() {
            if mem.minimum() > u64::from(config.max_memory_pages) {
                return Err(SandboxError::ValidationError(format!(
                    "memory '{}' starts at {} pages, limit is {}",
                    export.name(),
                    mem.minimum(),
                    config.max_memory_pages
                )));
            }
        }
    }

    Ok(())
}

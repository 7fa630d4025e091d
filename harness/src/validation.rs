//! Module validation — symbol resolution for the guest ABI.
//!
//! Checks a compiled module against the contract in ABI.md §2 before
//! any guest code runs:
//!
//! 1. The four required exports are present with exact types
//! 2. The only permitted import is the logging bridge
//! 3. No WASI imports
//!
//! A failed check is a `SymbolResolution` error naming the offending
//! symbol, and the module is never instantiated.

use wasmtime::{ExternType, FuncType, Module, Mutability, ValType};

use valhost_primitives::abi;

use crate::error::HostError;

/// Check if a ValType is i32.
fn is_i32(vt: &ValType) -> bool {
    matches!(vt, ValType::I32)
}

/// Check if a ValType is i64.
fn is_i64(vt: &ValType) -> bool {
    matches!(vt, ValType::I64)
}

/// Validate that a module meets the guest ABI requirements.
pub fn validate_module(module: &Module) -> Result<(), HostError> {
    validate_exports(module)?;
    validate_imports(module)?;
    Ok(())
}

/// Find a required function export and return its type.
fn func_export(module: &Module, name: &str) -> Result<FuncType, HostError> {
    let export = module
        .exports()
        .find(|e| e.name() == name)
        .ok_or_else(|| HostError::SymbolResolution(format!("missing required export: {}", name)))?;

    match export.ty() {
        ExternType::Func(ft) => Ok(ft),
        _ => Err(HostError::SymbolResolution(format!(
            "export '{}' must be a function",
            name
        ))),
    }
}

/// Check that all required exports are present with correct types.
fn validate_exports(module: &Module) -> Result<(), HostError> {
    // Shared memory region
    let has_memory = module
        .exports()
        .any(|e| e.name() == abi::MEMORY_EXPORT && matches!(e.ty(), ExternType::Memory(_)));
    if !has_memory {
        return Err(HostError::SymbolResolution(format!(
            "module must export '{}'",
            abi::MEMORY_EXPORT
        )));
    }

    // init_pvf: () -> ()
    let init_ty = func_export(module, abi::INIT_EXPORT)?;
    if init_ty.params().len() != 0 || init_ty.results().len() != 0 {
        return Err(HostError::SymbolResolution(format!(
            "export '{}' must take no arguments and return nothing",
            abi::INIT_EXPORT
        )));
    }

    // validate_block: (i32, i32) -> i64
    let validate_ty = func_export(module, abi::VALIDATE_EXPORT)?;
    let params: Vec<ValType> = validate_ty.params().collect();
    let results: Vec<ValType> = validate_ty.results().collect();
    if params.len() != 2 || !params.iter().all(is_i32) || results.len() != 1 || !is_i64(&results[0])
    {
        return Err(HostError::SymbolResolution(format!(
            "export '{}' must have signature (i32, i32) -> i64",
            abi::VALIDATE_EXPORT
        )));
    }

    // __heap_base: immutable i32 global
    let heap_base = module
        .exports()
        .find(|e| e.name() == abi::HEAP_BASE_EXPORT)
        .ok_or_else(|| {
            HostError::SymbolResolution(format!(
                "missing required export: {}",
                abi::HEAP_BASE_EXPORT
            ))
        })?;
    match heap_base.ty() {
        ExternType::Global(g)
            if is_i32(g.content()) && matches!(g.mutability(), Mutability::Const) => {}
        _ => {
            return Err(HostError::SymbolResolution(format!(
                "export '{}' must be an immutable i32 global",
                abi::HEAP_BASE_EXPORT
            )));
        }
    }

    Ok(())
}

/// Check that the only import is the logging bridge, correctly typed.
fn validate_imports(module: &Module) -> Result<(), HostError> {
    for import in module.imports() {
        let module_name = import.module();

        // Reject WASI imports
        if module_name.starts_with("wasi") {
            return Err(HostError::SymbolResolution(format!(
                "WASI import not allowed: {}::{}",
                module_name,
                import.name()
            )));
        }

        if module_name != abi::LOG_IMPORT_MODULE || import.name() != abi::LOG_IMPORT_NAME {
            return Err(HostError::SymbolResolution(format!(
                "import '{}::{}' is not provided by this host (only '{}::{}')",
                module_name,
                import.name(),
                abi::LOG_IMPORT_MODULE,
                abi::LOG_IMPORT_NAME
            )));
        }

        // Logging bridge: (i32, i64, i64) -> ()
        let func_ty = match import.ty() {
            ExternType::Func(ft) => ft,
            _ => {
                return Err(HostError::SymbolResolution(format!(
                    "import '{}::{}' must be a function",
                    module_name,
                    import.name()
                )));
            }
        };
        let params: Vec<ValType> = func_ty.params().collect();
        if params.len() != 3
            || !is_i32(&params[0])
            || !is_i64(&params[1])
            || !is_i64(&params[2])
            || func_ty.results().len() != 0
        {
            return Err(HostError::SymbolResolution(format!(
                "import '{}::{}' must have signature (i32, i64, i64) -> ()",
                module_name,
                import.name()
            )));
        }
    }

    Ok(())
}

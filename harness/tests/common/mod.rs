//! Shared test helpers for integration tests.
//!
//! Provides WAT guest fixtures and factory functions used across all
//! integration test files. Fixtures are compiled by wasmtime from the
//! text format at test time.

#![allow(dead_code)]

use std::sync::Arc;

use valhost_harness::{GuestInstance, GuestModule, HostConfig, MemSink};

/// Guest that echoes its input: `validate_block` re-packs the
/// `(offset, length)` arguments it received into the result
/// descriptor, so the output is exactly the input range.
pub const ECHO_GUEST: &str = r#"
    (module
        (memory (export "memory") 1)
        (global (export "__heap_base") i32 (i32.const 100))
        (func (export "init_pvf"))
        (func (export "validate_block") (param i32 i32) (result i64)
            (i64.or
                (i64.shl (i64.extend_i32_u (local.get 1)) (i64.const 32))
                (i64.extend_i32_u (local.get 0))))
    )
"#;

/// Guest that logs once — level 2, target "core" at offset 16,
/// message "started" at offset 32 — then echoes its input.
/// 0x400000010 packs (offset 16, len 4); 0x700000020 packs (32, 7).
pub const LOGGING_GUEST: &str = r#"
    (module
        (import "env" "ext_logging_log_version_1"
            (func $log (param i32 i64 i64)))
        (memory (export "memory") 1)
        (global (export "__heap_base") i32 (i32.const 1024))
        (data (i32.const 16) "core")
        (data (i32.const 32) "started")
        (func (export "init_pvf"))
        (func (export "validate_block") (param i32 i32) (result i64)
            (call $log
                (i32.const 2)
                (i64.const 0x400000010)
                (i64.const 0x700000020))
            (i64.or
                (i64.shl (i64.extend_i32_u (local.get 1)) (i64.const 32))
                (i64.extend_i32_u (local.get 0))))
    )
"#;

/// Guest that logs with level 9 (outside the severity alphabet),
/// then echoes its input.
pub const BAD_LEVEL_GUEST: &str = r#"
    (module
        (import "env" "ext_logging_log_version_1"
            (func $log (param i32 i64 i64)))
        (memory (export "memory") 1)
        (global (export "__heap_base") i32 (i32.const 1024))
        (data (i32.const 16) "core")
        (func (export "init_pvf"))
        (func (export "validate_block") (param i32 i32) (result i64)
            (call $log
                (i32.const 9)
                (i64.const 0x400000010)
                (i64.const 0x400000010))
            (i64.or
                (i64.shl (i64.extend_i32_u (local.get 1)) (i64.const 32))
                (i64.extend_i32_u (local.get 0))))
    )
"#;

/// Guest whose result descriptor names a range far outside its one
/// page of memory: offset 0, length 0xFFFFFFFF.
pub const BAD_DESCRIPTOR_GUEST: &str = r#"
    (module
        (memory (export "memory") 1)
        (global (export "__heap_base") i32 (i32.const 100))
        (func (export "init_pvf"))
        (func (export "validate_block") (param i32 i32) (result i64)
            i64.const 0xFFFFFFFF00000000)
    )
"#;

/// Guest that traps inside `validate_block`.
pub const TRAPPING_GUEST: &str = r#"
    (module
        (memory (export "memory") 1)
        (global (export "__heap_base") i32 (i32.const 100))
        (func (export "init_pvf"))
        (func (export "validate_block") (param i32 i32) (result i64)
            unreachable)
    )
"#;

/// Guest that never returns from `validate_block`.
pub const LOOPING_GUEST: &str = r#"
    (module
        (memory (export "memory") 1)
        (global (export "__heap_base") i32 (i32.const 100))
        (func (export "init_pvf"))
        (func (export "validate_block") (param i32 i32) (result i64)
            (loop $forever (br $forever))
            i64.const 0)
    )
"#;

/// Guest missing the `init_pvf` export.
pub const MISSING_INIT_GUEST: &str = r#"
    (module
        (memory (export "memory") 1)
        (global (export "__heap_base") i32 (i32.const 100))
        (func (export "validate_block") (param i32 i32) (result i64)
            i64.const 0)
    )
"#;

/// Load a WAT fixture with the default configuration.
pub fn load(wat: &str) -> GuestModule {
    GuestModule::new(wat.as_bytes(), HostConfig::default()).expect("fixture must load")
}

/// Instantiate a WAT fixture with an in-memory log sink.
pub fn instance_with_sink(wat: &str) -> (GuestInstance, Arc<MemSink>) {
    let sink = Arc::new(MemSink::new());
    let instance = load(wat)
        .instantiate(sink.clone())
        .expect("fixture must instantiate");
    (instance, sink)
}

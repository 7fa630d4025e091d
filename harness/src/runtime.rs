//! Guest module loading and the validation invoker.
//!
//! [`GuestModule`] is the loaded, validated module: a capability
//! object whose construction guarantees the four required exports
//! resolved. [`GuestInstance`] is one live instantiation, driving the
//! lifecycle from ABI.md §5: `init` exactly once, then one `validate`
//! call that writes input at the heap base, invokes `validate_block`,
//! and copies the result range back out.

use std::path::Path;
use std::sync::Arc;

use wasmtime::{Config, Engine, Linker, Module, Store, Trap, TypedFunc, Val};

use valhost_primitives::{abi, Descriptor};

use crate::config::HostConfig;
use crate::error::HostError;
use crate::linker::{register_logging, HostCtx};
use crate::logging::LogSink;
use crate::memory;
use crate::validation::validate_module;

/// A loaded and validated guest module.
///
/// Holds the compiled module and engine; instantiation creates an
/// isolated [`GuestInstance`] with its own store, memory, and log sink.
pub struct GuestModule {
    engine: Engine,
    module: Module,
    config: HostConfig,
}

impl GuestModule {
    /// Compile and validate a guest module from bytes.
    ///
    /// All four required exports must resolve with exact types before
    /// this returns; see `validation`.
    pub fn new(bytes: &[u8], config: HostConfig) -> Result<Self, HostError> {
        let engine = create_engine(&config)?;
        let module = Module::new(&engine, bytes)?;
        validate_module(&module)?;
        Ok(Self {
            engine,
            module,
            config,
        })
    }

    /// Load a guest module from a file path.
    ///
    /// A module that cannot be opened or compiled is a `ModuleLoad`
    /// error carrying the loader's diagnostic text.
    pub fn from_file(path: &Path, config: HostConfig) -> Result<Self, HostError> {
        let engine = create_engine(&config)?;
        let module = Module::from_file(&engine, path)?;
        validate_module(&module)?;
        Ok(Self {
            engine,
            module,
            config,
        })
    }

    /// Instantiate the module, delivering guest log records to `sink`.
    pub fn instantiate(&self, sink: Arc<dyn LogSink>) -> Result<GuestInstance, HostError> {
        let mut store = Store::new(&self.engine, HostCtx::new(sink));
        store.set_fuel(self.config.fuel_limit)?;

        let mut linker = Linker::new(&self.engine);
        register_logging(&mut linker)?;

        let instance = linker.instantiate(&mut store, &self.module)?;

        let shared_memory = instance
            .get_memory(&mut store, abi::MEMORY_EXPORT)
            .ok_or_else(|| HostError::Memory("no memory export on instance".into()))?;

        let heap_base = match instance
            .get_global(&mut store, abi::HEAP_BASE_EXPORT)
            .map(|g| g.get(&mut store))
        {
            Some(Val::I32(v)) => v as u32,
            _ => {
                return Err(HostError::SymbolResolution(format!(
                    "missing required export: {}",
                    abi::HEAP_BASE_EXPORT
                )));
            }
        };

        let region = shared_memory.data_size(&store);
        if heap_base as usize > region {
            return Err(HostError::Memory(format!(
                "heap base {} lies outside the shared region of {} bytes",
                heap_base, region
            )));
        }

        let init_fn = instance
            .get_typed_func::<(), ()>(&mut store, abi::INIT_EXPORT)
            .map_err(|e| HostError::SymbolResolution(format!("{}: {}", abi::INIT_EXPORT, e)))?;
        let validate_fn = instance
            .get_typed_func::<(u32, u32), u64>(&mut store, abi::VALIDATE_EXPORT)
            .map_err(|e| HostError::SymbolResolution(format!("{}: {}", abi::VALIDATE_EXPORT, e)))?;

        Ok(GuestInstance {
            store,
            shared_memory,
            heap_base,
            init_fn,
            validate_fn,
            initialized: false,
        })
    }
}

impl std::fmt::Debug for GuestModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuestModule")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// One live instantiation of a guest module.
pub struct GuestInstance {
    store: Store<HostCtx>,
    shared_memory: wasmtime::Memory,
    heap_base: u32,
    init_fn: TypedFunc<(), ()>,
    validate_fn: TypedFunc<(u32, u32), u64>,
    initialized: bool,
}

impl std::fmt::Debug for GuestInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GuestInstance")
            .field("heap_base", &self.heap_base)
            .field("initialized", &self.initialized)
            .finish_non_exhaustive()
    }
}

impl GuestInstance {
    /// Offset at which host-supplied input is written.
    pub fn heap_base(&self) -> u32 {
        self.heap_base
    }

    /// Run the guest's initialization entry point.
    ///
    /// Runs at most once per instance; repeated calls are no-ops.
    /// `validate` performs it on first use, so the init-before-validate
    /// ordering holds regardless of the caller.
    pub fn init(&mut self) -> Result<(), HostError> {
        if self.initialized {
            return Ok(());
        }
        handle_trap(self.init_fn.call(&mut self.store, ()))?;
        self.initialized = true;
        Ok(())
    }

    /// Validate a block of input bytes.
    ///
    /// Writes `input` verbatim at the heap base, calls
    /// `validate_block(heap_base, len)`, decodes the returned packed
    /// descriptor with bounds checks, and copies the result range out
    /// of the shared region.
    pub fn validate(&mut self, input: &[u8]) -> Result<Vec<u8>, HostError> {
        self.init()?;

        let len = u32::try_from(input.len()).map_err(|_| {
            HostError::Memory(format!(
                "input of {} bytes cannot be described by a u32 length",
                input.len()
            ))
        })?;

        {
            let data = self.shared_memory.data_mut(&mut self.store);
            memory::write_at(data, self.heap_base, input).map_err(|_| {
                HostError::Memory(format!(
                    "input of {} bytes does not fit at heap base {} in a region of {} bytes",
                    input.len(),
                    self.heap_base,
                    data.len()
                ))
            })?;
        }

        let packed = handle_trap(self.validate_fn.call(&mut self.store, (self.heap_base, len)))?;
        let result = Descriptor::unpack(packed);

        // Re-read the region after the call: the guest may have grown it.
        let data = self.shared_memory.data(&self.store);
        Ok(memory::read_range(data, result)?)
    }

    /// Logging calls rejected as protocol violations and dropped.
    pub fn dropped_records(&self) -> u32 {
        self.store.data().dropped_records
    }
}

/// Create a wasmtime engine for running validation modules.
fn create_engine(_config: &HostConfig) -> Result<Engine, HostError> {
    let mut wasm_config = Config::new();

    // Fuel metering bounds a looping guest.
    wasm_config.consume_fuel(true);

    // One unbroken synchronous call chain in one thread.
    wasm_config.wasm_threads(false);

    Ok(Engine::new(&wasm_config)?)
}

/// Handle a guest call result, converting traps to HostError.
///
/// Fuel exhaustion → `HostError::FuelExhausted`
/// Other traps → `HostError::GuestTrapped`
fn handle_trap<R>(result: Result<R, anyhow::Error>) -> Result<R, HostError> {
    match result {
        Ok(val) => Ok(val),
        Err(e) => {
            if matches!(e.downcast_ref::<Trap>(), Some(Trap::OutOfFuel)) {
                Err(HostError::FuelExhausted)
            } else {
                Err(HostError::GuestTrapped(format!("{}", e)))
            }
        }
    }
}

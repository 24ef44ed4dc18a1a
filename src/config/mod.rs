//! Engine Configuration Module
//!
//! Runtime settings for the CLI and batch runner, loaded from TOML.
//!
//! ## Loading Order
//!
//! 1. `PEDSTAT_CONFIG` environment variable (path to TOML file)
//! 2. `pedstat.toml` in the current working directory
//! 3. Built-in defaults
//!
//! ## Usage
//!
//! Call `config::init()` once at startup, then `config::get()` anywhere:
//!
//! ```ignore
//! config::init(EngineConfig::load());
//! let decimals = config::get().output.decimals;
//! ```

mod engine_config;
pub mod defaults;
pub mod validation;

pub use engine_config::*;

use std::sync::OnceLock;

static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Install the global configuration. Later calls are ignored with a warning.
pub fn init(config: EngineConfig) {
    if ENGINE_CONFIG.set(config).is_err() {
        tracing::warn!("config::init() called more than once, ignoring");
    }
}

/// The global configuration, or built-in defaults if `init()` was never
/// called (library use without the CLI).
pub fn get() -> &'static EngineConfig {
    ENGINE_CONFIG.get_or_init(EngineConfig::default)
}

pub fn is_initialized() -> bool {
    ENGINE_CONFIG.get().is_some()
}

//! Configuration system for the emulator.
//!
//! This module defines the configuration structures used to parameterize a run.
//! It provides:
//! 1. **Defaults:** Baseline constants (DRAM base and size, dump behaviour).
//! 2. **Structures:** Hierarchical config for general run options and memory.
//! 3. **Loading:** JSON parsing from a string or a file.
//!
//! Every field is optional in JSON; missing fields take the values from the
//! private `defaults` module, so `{}` is a valid configuration.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::{EmuError, Result};

/// Default configuration constants for the emulator.
mod defaults {
    use crate::common::constants;

    /// Base address of DRAM.
    pub const RAM_BASE: u64 = constants::DRAM_BASE;

    /// Size of DRAM in bytes (1 MiB).
    pub const RAM_SIZE: usize = constants::DRAM_SIZE;

    /// Register dump after every step is on by default.
    pub const DUMP_REGISTERS: bool = true;
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use rvemu_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_instructions": true, "max_steps": 100 },
///     "memory": { "ram_size": 4096 }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_instructions);
/// assert_eq!(config.general.max_steps, Some(100));
/// assert_eq!(config.memory.ram_base, 0x8000_0000);
/// assert_eq!(config.memory.ram_size, 4096);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General run settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Main memory configuration
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`EmuError::Config`] if the JSON is malformed or has
    /// fields of the wrong type.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| EmuError::Config {
            path: "<inline>".into(),
            reason: e.to_string(),
        })
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`EmuError::Config`] if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| EmuError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&text).map_err(|e| EmuError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}

/// General run settings and options.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Log every executed instruction at `trace` level
    #[serde(default)]
    pub trace_instructions: bool,

    /// Print the register file after every successful step
    #[serde(default = "GeneralConfig::default_dump_registers")]
    pub dump_registers: bool,

    /// Stop after this many steps (no limit if unset)
    #[serde(default)]
    pub max_steps: Option<u64>,

    /// Initial stack pointer. Defaults to the end of DRAM.
    #[serde(default)]
    pub initial_sp: Option<u64>,
}

impl GeneralConfig {
    /// Returns the default register-dump setting.
    const fn default_dump_registers() -> bool {
        defaults::DUMP_REGISTERS
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            dump_registers: defaults::DUMP_REGISTERS,
            max_steps: None,
            initial_sp: None,
        }
    }
}

/// Main memory configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Physical address of the first DRAM byte
    #[serde(default = "MemoryConfig::default_ram_base")]
    pub ram_base: u64,

    /// DRAM capacity in bytes
    #[serde(default = "MemoryConfig::default_ram_size")]
    pub ram_size: usize,
}

impl MemoryConfig {
    /// Returns the default DRAM base address.
    const fn default_ram_base() -> u64 {
        defaults::RAM_BASE
    }

    /// Returns the default DRAM size in bytes.
    const fn default_ram_size() -> usize {
        defaults::RAM_SIZE
    }

    /// Returns the first address past the end of DRAM.
    pub const fn ram_end(&self) -> u64 {
        self.ram_base.wrapping_add(self.ram_size as u64)
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            ram_base: defaults::RAM_BASE,
            ram_size: defaults::RAM_SIZE,
        }
    }
}

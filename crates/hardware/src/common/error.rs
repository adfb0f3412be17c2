//! Error definitions.
//!
//! This module defines the failure modes of the emulator. It provides:
//! 1. **Memory Faults:** `MemError` for accesses that leave the backing store.
//! 2. **Run Failures:** `EmuError`, the crate-level error that ends a run.
//!
//! Every failure is terminal to the current run; nothing is retried.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::data::AccessWidth;

/// Fault raised by the memory system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MemError {
    /// Some byte of the access lies outside every mapped range.
    ///
    /// The associated values are the first byte address and the access width.
    #[error("out-of-bounds {width} access at {addr:#x}")]
    OutOfBounds {
        /// Physical address of the first byte of the access.
        addr: u64,
        /// Width of the rejected access.
        width: AccessWidth,
    },
}

/// Error that terminates an emulator run.
#[derive(Debug, Error)]
pub enum EmuError {
    /// No operation is defined for the decoded (opcode, funct3, funct7) triple.
    #[error(
        "unrecognized instruction {raw:#010x} at {pc:#x} \
         (opcode={opcode:#04x}, funct3={funct3:#x}, funct7={funct7:#04x})"
    )]
    UnrecognizedInstruction {
        /// Address the instruction was fetched from.
        pc: u64,
        /// Raw instruction word.
        raw: u32,
        /// Decoded opcode field.
        opcode: u32,
        /// Decoded funct3 field.
        funct3: u32,
        /// Decoded funct7 field.
        funct7: u32,
    },

    /// A load or store left the mapped address space.
    #[error(transparent)]
    Memory(#[from] MemError),

    /// The program image could not be opened or read.
    #[error("failed to load image '{}': {source}", path.display())]
    ImageLoad {
        /// Path of the image file.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The image carries the ELF magic but cannot be parsed.
    #[error("invalid ELF image: {0}")]
    InvalidElf(String),

    /// A configuration file could not be read or parsed.
    #[error("invalid configuration '{}': {reason}", path.display())]
    Config {
        /// Path of the configuration file.
        path: PathBuf,
        /// Description of the failure.
        reason: String,
    },
}

impl EmuError {
    /// Returns `true` if this error is an out-of-bounds memory access.
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(self, Self::Memory(MemError::OutOfBounds { .. }))
    }

    /// Returns `true` if this error is an unrecognized instruction.
    pub const fn is_unrecognized_instruction(&self) -> bool {
        matches!(self, Self::UnrecognizedInstruction { .. })
    }
}

/// Result type used throughout the emulator.
pub type Result<T> = std::result::Result<T, EmuError>;

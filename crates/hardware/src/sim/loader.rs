//! Binary Loader.
//!
//! This module places a program image into emulated memory. It performs:
//! 1. **Binary loading:** Reads the image file from disk into a byte buffer.
//! 2. **Flat images:** Copies headerless bytes verbatim to the DRAM base.
//! 3. **ELF images:** Copies each loadable segment to its physical address and
//!    points the program counter at the entry symbol.

use std::fs;
use std::path::Path;

use object::elf::PT_LOAD;
use object::read::elf::{ElfFile64, ProgramHeader};
use object::{FileKind, Object};
use tracing::debug;

use crate::common::{EmuError, Result};
use crate::core::Cpu;

const ELF_MAGIC: &[u8; 4] = b"\x7fELF";

/// Reads an image file from disk into a byte vector.
///
/// # Errors
///
/// [`EmuError::ImageLoad`] if the file cannot be opened or read.
pub fn load_image(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| EmuError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), len = bytes.len(), "image read");
    Ok(bytes)
}

/// Returns `true` if `bytes` start with the ELF magic number.
pub fn is_elf(bytes: &[u8]) -> bool {
    bytes.starts_with(ELF_MAGIC)
}

/// Places `bytes` into the memory attached to `cpu`.
///
/// A flat image is written starting at the current program counter, which a
/// freshly constructed CPU holds at the DRAM base. An ELF image has its
/// `PT_LOAD` segments written at their physical addresses and the program
/// counter set to the entry point.
///
/// # Errors
///
/// - [`EmuError::Memory`] if the image does not fit in mapped memory.
/// - [`EmuError::InvalidElf`] if the ELF headers cannot be parsed.
pub fn load_into(cpu: &mut Cpu, bytes: &[u8]) -> Result<()> {
    if is_elf(bytes) {
        load_elf(cpu, bytes)
    } else {
        debug!(
            base = format_args!("{:#x}", cpu.pc),
            len = bytes.len(),
            "loading flat image"
        );
        cpu.bus.load_binary_at(bytes, cpu.pc)?;
        Ok(())
    }
}

/// Reads `path` and loads it into `cpu`.
///
/// # Errors
///
/// Any error from [`load_image`] or [`load_into`].
pub fn load_file(cpu: &mut Cpu, path: impl AsRef<Path>) -> Result<()> {
    let bytes = load_image(path)?;
    load_into(cpu, &bytes)
}

fn load_elf(cpu: &mut Cpu, bytes: &[u8]) -> Result<()> {
    let kind = FileKind::parse(bytes).map_err(|e| EmuError::InvalidElf(e.to_string()))?;
    if kind != FileKind::Elf64 {
        return Err(EmuError::InvalidElf("only 64-bit ELF images are supported".into()));
    }
    let file: ElfFile64<'_> =
        ElfFile64::parse(bytes).map_err(|e| EmuError::InvalidElf(e.to_string()))?;
    let endian = file.endian();

    for phdr in file.elf_program_headers() {
        if phdr.p_type(endian) != PT_LOAD {
            continue;
        }
        let data = phdr
            .data(endian, bytes)
            .map_err(|()| EmuError::InvalidElf("segment data lies outside the file".into()))?;
        if data.is_empty() {
            continue;
        }
        let paddr = phdr.p_paddr(endian);
        debug!(
            paddr = format_args!("{paddr:#x}"),
            filesz = data.len(),
            memsz = phdr.p_memsz(endian),
            "loading ELF segment"
        );
        cpu.bus.load_binary_at(data, paddr)?;
    }

    cpu.pc = file.entry();
    debug!(entry = format_args!("{:#x}", cpu.pc), "ELF entry point");
    Ok(())
}

//! System interconnect (bus) for memory and device access.
//!
//! This module implements the bus that routes physical addresses to devices. It provides:
//! 1. **Device registration:** Devices are added by address range and kept sorted.
//! 2. **Access routing:** A load or store goes to the single device that covers
//!    every byte of it, with a last-device hint for the common DRAM case.
//! 3. **Image loading:** Bulk writes of program images.
//!
//! An access that no device fully covers is rejected with
//! [`MemError::OutOfBounds`].

use std::fmt;

use crate::common::{AccessWidth, MemError};
use crate::config::MemoryConfig;
use crate::soc::memory::Memory;
use crate::soc::traits::Device;

/// System bus connecting the CPU to memory and devices.
pub struct Bus {
    /// Registered devices, sorted by base address.
    devices: Vec<Box<dyn Device>>,
    last_device_idx: usize,
}

impl Bus {
    /// Creates an empty bus; add devices with [`Bus::add_device`].
    pub fn new() -> Self {
        Self {
            devices: Vec::new(),
            last_device_idx: 0,
        }
    }

    /// Creates a bus with a single zeroed DRAM device sized by `config`.
    pub fn with_dram(config: &MemoryConfig) -> Self {
        let mut bus = Self::new();
        bus.add_device(Box::new(Memory::new(config.ram_base, config.ram_size)));
        bus
    }

    /// Registers a device on the bus; devices are sorted by base address for lookup.
    pub fn add_device(&mut self, dev: Box<dyn Device>) {
        self.devices.push(dev);
        self.devices.sort_by_key(|d| d.address_range().0);
        self.last_device_idx = 0;
    }

    /// Returns the names and ranges of all registered devices, in address order.
    pub fn device_map(&self) -> Vec<(&'static str, u64, u64)> {
        self.devices
            .iter()
            .map(|d| {
                let (base, size) = d.address_range();
                (d.name(), base, size)
            })
            .collect()
    }

    /// Loads `width` bits at `paddr`, zero-extended to 64 bits.
    ///
    /// # Errors
    ///
    /// [`MemError::OutOfBounds`] if no device covers the whole access.
    pub fn load(&mut self, paddr: u64, width: AccessWidth) -> Result<u64, MemError> {
        self.find_device(paddr, width.bytes() as u64)
            .ok_or(MemError::OutOfBounds { addr: paddr, width })?
            .load(paddr, width)
    }

    /// Stores the low `width` bits of `value` at `paddr`.
    ///
    /// # Errors
    ///
    /// [`MemError::OutOfBounds`] if no device covers the whole access.
    pub fn store(&mut self, paddr: u64, width: AccessWidth, value: u64) -> Result<(), MemError> {
        self.find_device(paddr, width.bytes() as u64)
            .ok_or(MemError::OutOfBounds { addr: paddr, width })?
            .store(paddr, width, value)
    }

    /// Writes a binary blob into memory at the given physical address.
    ///
    /// # Errors
    ///
    /// [`MemError::OutOfBounds`] if a single device does not hold the whole blob.
    pub fn load_binary_at(&mut self, data: &[u8], paddr: u64) -> Result<(), MemError> {
        self.find_device(paddr, data.len() as u64)
            .ok_or(MemError::OutOfBounds {
                addr: paddr,
                width: AccessWidth::Byte,
            })?
            .write_bytes(paddr, data)
    }

    fn find_device(&mut self, paddr: u64, len: u64) -> Option<&mut Box<dyn Device>> {
        if self
            .devices
            .get(self.last_device_idx)
            .is_some_and(|d| d.covers(paddr, len))
        {
            return self.devices.get_mut(self.last_device_idx);
        }

        let idx = self.devices.iter().position(|d| d.covers(paddr, len))?;
        self.last_device_idx = idx;
        self.devices.get_mut(idx)
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Bus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bus")
            .field("devices", &self.device_map())
            .finish_non_exhaustive()
    }
}

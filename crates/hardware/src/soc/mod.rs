//! System-on-Chip (SoC) Components.
//!
//! This module organizes the components of the emulated address space: the
//! system bus, the DRAM device, and the device trait they share.

/// System bus interconnect and routing.
pub mod interconnect;

/// Physical memory (DRAM) device.
pub mod memory;

/// Device trait definitions for bus-attached components.
pub mod traits;

pub use interconnect::Bus;
pub use memory::Memory;
pub use traits::Device;

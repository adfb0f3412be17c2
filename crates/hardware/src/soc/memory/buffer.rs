//! DRAM Buffer Implementation.
//!
//! This module provides the owned backing store for system RAM. Every access
//! goes through a checked offset range, so a request that runs past the end of
//! the buffer yields `None` instead of touching foreign memory.

use std::ops::Range;

/// Zero-initialised, fixed-capacity byte buffer backing DRAM.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DramBuffer {
    bytes: Vec<u8>,
}

impl DramBuffer {
    /// Creates a new zeroed buffer of the specified size.
    ///
    /// # Arguments
    ///
    /// * `size` - Size of the buffer in bytes.
    pub fn new(size: usize) -> Self {
        Self {
            bytes: vec![0; size],
        }
    }

    /// Returns the size of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the buffer has zero capacity.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Borrows `len` bytes starting at `offset`.
    ///
    /// # Returns
    ///
    /// `None` if any byte of the range is outside the buffer.
    pub fn read_slice(&self, offset: usize, len: usize) -> Option<&[u8]> {
        self.bytes.get(Self::range(offset, len)?)
    }

    /// Mutably borrows `len` bytes starting at `offset`.
    ///
    /// # Returns
    ///
    /// `None` if any byte of the range is outside the buffer.
    pub fn write_slice(&mut self, offset: usize, len: usize) -> Option<&mut [u8]> {
        self.bytes.get_mut(Self::range(offset, len)?)
    }

    /// Returns the whole buffer as a byte slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    fn range(offset: usize, len: usize) -> Option<Range<usize>> {
        Some(offset..offset.checked_add(len)?)
    }
}

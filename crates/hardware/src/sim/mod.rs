//! Program loading.
//!
//! Provides utilities for reading an image from disk and placing it into
//! memory before the first step.

pub mod loader;

//! # Unit Components
//!
//! This module mirrors the library's module tree: shared types, the processor
//! core, the ISA definitions, the SoC components, and the simulation helpers.

//! Hart execution state.
//!
//! A hart is either running or halted. Halting is terminal: it happens when
//! dispatch finds no operation for an instruction, when a memory access
//! faults, or when the program counter reaches the sentinel address zero.

use std::fmt;

/// Execution state of the hart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HartState {
    /// Fetching and executing instructions.
    #[default]
    Running,
    /// Stopped; further steps do nothing.
    Halted,
}

impl HartState {
    /// Returns `true` if the hart is halted.
    pub const fn is_halted(self) -> bool {
        matches!(self, Self::Halted)
    }

    /// Returns a short name for the state.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Halted => "halted",
        }
    }
}

impl fmt::Display for HartState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

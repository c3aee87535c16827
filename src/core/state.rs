//! # Application State
//!
//! The only state that survives between keystrokes: where the loop is.
//! Collected text and conversion results live for one flow and are dropped.
//!
//! ```text
//! App
//! ├── phase: Phase              // Idle | Running(conversion) | Terminated
//! └── completed_flows: usize    // for the exit log line
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::fmt;

use crate::core::convert::Conversion;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Menu is on screen, waiting for a key.
    Idle,
    Running(Conversion),
    Terminated,
}

/// Why the listener stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopExit {
    Quit,
    KeyFault(String),
    /// Writing to the terminal failed.
    OutputFault(String),
    /// The listener went away without reporting (it panicked).
    Abandoned,
}

impl LoopExit {
    pub fn is_success(&self) -> bool {
        matches!(self, LoopExit::Quit)
    }

    /// True when the user has not been told why the loop stopped. The
    /// listener prints key faults itself; output faults can't be printed
    /// through the output that failed.
    pub fn needs_report(&self) -> bool {
        matches!(self, LoopExit::OutputFault(_) | LoopExit::Abandoned)
    }
}

impl fmt::Display for LoopExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoopExit::Quit => write!(f, "quit"),
            LoopExit::KeyFault(msg) => write!(f, "Error reading key: {msg}"),
            LoopExit::OutputFault(msg) => write!(f, "Error writing output: {msg}"),
            LoopExit::Abandoned => write!(f, "key listener stopped unexpectedly"),
        }
    }
}

pub struct App {
    pub phase: Phase,
    pub completed_flows: usize,
}

impl App {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            completed_flows: 0,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

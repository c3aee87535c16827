//! # Actions
//!
//! Everything that can happen in the interaction loop becomes an `Action`.
//! User presses `1`? That's `Action::Command(Command::Escape)`.
//! A flow finished printing its result? That's `Action::FlowFinished`.
//!
//! The `update()` function takes the current state and an action,
//! moves the state along, and tells the caller what to do next via an
//! `Effect`. No side effects here. I/O happens in the `tui` adapter.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! ```text
//!          '1' / '2'                 FlowFinished
//!   Idle ────────────▶ Running ─────────────────▶ Idle
//!    │
//!    │ 'q' / Esc / Ctrl+C / key fault
//!    ▼
//!   Terminated
//! ```

use log::{debug, info, warn};

use crate::core::convert::Conversion;
use crate::core::state::{App, LoopExit, Phase};

/// A raw keystroke, already stripped of terminal specifics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    Escape,
    /// Ctrl+C. Raw mode swallows SIGINT, so this arrives as a key.
    Interrupt,
    Other,
}

/// What a keystroke asks the loop to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Escape,
    Unescape,
    Quit,
}

impl Command {
    /// Maps a key to a command. Keys without a binding return `None`.
    pub fn from_key(key: KeyInput) -> Option<Self> {
        match key {
            KeyInput::Char('1') => Some(Command::Escape),
            KeyInput::Char('2') => Some(Command::Unescape),
            KeyInput::Char('q') | KeyInput::Escape | KeyInput::Interrupt => Some(Command::Quit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Command(Command),
    FlowFinished,
    KeyFault(String),
}

/// What the adapter should do after an `update()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    RunFlow(Conversion),
    RedrawMenu,
    Exit(LoopExit),
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?} in {:?}", action, app.phase);

    match (app.phase, action) {
        (Phase::Terminated, _) => Effect::None,

        // A broken keyboard ends the loop whatever it was doing
        (_, Action::KeyFault(msg)) => {
            warn!("Key read failed: {}", msg);
            app.phase = Phase::Terminated;
            Effect::Exit(LoopExit::KeyFault(msg))
        }

        (Phase::Idle, Action::Command(Command::Escape)) => {
            app.phase = Phase::Running(Conversion::Escape);
            Effect::RunFlow(Conversion::Escape)
        }
        (Phase::Idle, Action::Command(Command::Unescape)) => {
            app.phase = Phase::Running(Conversion::Unescape);
            Effect::RunFlow(Conversion::Unescape)
        }
        (Phase::Idle, Action::Command(Command::Quit)) => {
            info!("Quit requested after {} conversion(s)", app.completed_flows);
            app.phase = Phase::Terminated;
            Effect::Exit(LoopExit::Quit)
        }

        (Phase::Running(conversion), Action::FlowFinished) => {
            debug!("{:?} flow finished", conversion);
            app.completed_flows += 1;
            app.phase = Phase::Idle;
            Effect::RedrawMenu
        }

        // Commands never overlap a running flow
        (Phase::Running(_), Action::Command(_)) | (Phase::Idle, Action::FlowFinished) => {
            Effect::None
        }
    }
}

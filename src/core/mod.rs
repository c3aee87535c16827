//! # Core Application Logic
//!
//! Conversion and the interaction state machine.
//! Nothing here touches the terminal or the clipboard.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • collect (lines)      │
//!                    │  • convert (JSON str)   │
//!                    │  • State / Action       │
//!                    │  • update() (reducer)   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴─────────────┐
//!                    ▼                         ▼
//!             ┌────────────┐            ┌────────────┐
//!             │    TUI     │            │ Clipboard  │
//!             │  Adapter   │            │   Sink     │
//!             │(crossterm) │            │ (arboard)  │
//!             └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`collect`]: reads lines until the `.` sentinel
//! - [`convert`]: text ⇄ escaped JSON string interior
//! - [`state`]: the `App` struct and `LoopExit`
//! - [`action`]: keys, commands, and `update()`
//! - [`config`]: env/CLI settings

pub mod action;
pub mod collect;
pub mod config;
pub mod convert;
pub mod state;

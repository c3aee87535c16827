//! # TUI Adapter
//!
//! The crossterm-specific layer. Reads single keys, turns them into
//! core::Action values, and runs the escape/unescape flows against the real
//! terminal and clipboard.
//!
//! ## Threads
//!
//! Exactly two threads of control:
//!
//! - the **main task**, which prints the first menu and then just waits on a
//!   one-shot completion channel;
//! - the **listener**, on a tokio blocking thread, which reads a key, runs the
//!   chosen flow to completion, redraws the menu, and only then reads the
//!   next key. Flows never overlap and quitting is only seen between flows.
//!
//! ```text
//!  main ── banner + menu ── spawn ──────────── wait(done) ── release keyboard
//!                             │                    ▲
//!                             ▼                    │
//!  listener           key → flow → menu → key … ───┘ LoopExit
//! ```

mod event;
pub mod flow;
pub mod menu;

pub use event::{KeySource, KeyboardCapture, TerminalKeys, key_input};

use log::{debug, error, info, warn};
use std::io::{self, BufRead, Write, stdout};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::clipboard::{ClipboardSink, SystemClipboard};
use crate::core::action::{Action, Command, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, LoopExit};
use crate::tui::flow::run_flow;
use crate::tui::menu::{MENU_OPTIONS, Palette, render_banner, render_menu};

/// The key-reading side of the loop. Owns its input, output and clipboard so
/// it can be moved onto its own thread.
pub struct Listener<K, R, W, C> {
    keys: K,
    input: R,
    out: W,
    clipboard: C,
    palette: Palette,
    app: App,
}

impl<K, R, W, C> Listener<K, R, W, C>
where
    K: KeySource,
    R: BufRead,
    W: Write,
    C: ClipboardSink,
{
    pub fn new(keys: K, input: R, out: W, clipboard: C, palette: Palette) -> Self {
        Self {
            keys,
            input,
            out,
            clipboard,
            palette,
            app: App::new(),
        }
    }

    /// Reads keys and dispatches them until the loop terminates.
    ///
    /// Assumes the menu is already on screen.
    pub fn run(mut self) -> LoopExit {
        loop {
            match self.step() {
                Ok(Some(exit)) => return exit,
                Ok(None) => {}
                Err(e) => {
                    error!("Terminal output failed: {}", e);
                    return LoopExit::OutputFault(e.to_string());
                }
            }
        }
    }

    /// One key read and whatever it triggers.
    fn step(&mut self) -> io::Result<Option<LoopExit>> {
        let action = match self.keys.next_key() {
            Ok(key) => match Command::from_key(key) {
                Some(command) => Action::Command(command),
                None => {
                    debug!("Ignoring unbound key {:?}", key);
                    return Ok(None);
                }
            },
            Err(e) => Action::KeyFault(e.to_string()),
        };

        match update(&mut self.app, action) {
            Effect::None => Ok(None),
            Effect::RunFlow(conversion) => {
                let outcome = run_flow(
                    conversion,
                    &mut self.input,
                    &mut self.out,
                    &mut self.clipboard,
                    self.palette,
                )?;
                debug!("Flow outcome: {:?}", outcome);
                if update(&mut self.app, Action::FlowFinished) == Effect::RedrawMenu {
                    self.redraw_menu()?;
                }
                Ok(None)
            }
            Effect::RedrawMenu => {
                self.redraw_menu()?;
                Ok(None)
            }
            Effect::Exit(exit) => {
                if let LoopExit::KeyFault(_) = exit {
                    writeln!(self.out, "{}", self.palette.error(&exit.to_string()))?;
                    self.out.flush()?;
                }
                Ok(Some(exit))
            }
        }
    }

    fn redraw_menu(&mut self) -> io::Result<()> {
        write!(self.out, "{}", render_menu(&MENU_OPTIONS, self.palette))?;
        self.out.flush()
    }
}

/// The running listener: its task plus the one-shot channel it reports on.
pub struct ListenerHandle {
    task: JoinHandle<()>,
    done: oneshot::Receiver<LoopExit>,
}

impl ListenerHandle {
    /// Runs `work` on a blocking thread. Its return value is sent through the
    /// completion channel.
    pub fn spawn<F>(work: F) -> Self
    where
        F: FnOnce() -> LoopExit + Send + 'static,
    {
        let (done_tx, done) = oneshot::channel();
        let task = tokio::task::spawn_blocking(move || {
            let exit = work();
            if done_tx.send(exit).is_err() {
                warn!("Listener finished but nobody is waiting for it");
            }
        });
        Self { task, done }
    }

    /// Waits for the listener to report, then joins its thread.
    pub async fn wait(self) -> LoopExit {
        let exit = match self.done.await {
            Ok(exit) => exit,
            // Sender dropped without a value: the listener panicked
            Err(_) => LoopExit::Abandoned,
        };
        if let Err(e) = self.task.await {
            error!("Listener task failed: {}", e);
        }
        exit
    }
}

/// Runs the interactive session until the user quits or the keyboard fails.
pub async fn run(config: ResolvedConfig) -> io::Result<LoopExit> {
    let palette = Palette::from_color(config.color);
    let _keyboard = KeyboardCapture::acquire()?;

    let mut out = stdout();
    write!(out, "{}", render_banner(palette))?;
    write!(out, "{}", render_menu(&MENU_OPTIONS, palette))?;
    out.flush()?;

    let listener = ListenerHandle::spawn(move || {
        let stdin = io::stdin();
        Listener::new(
            TerminalKeys,
            stdin.lock(),
            stdout(),
            SystemClipboard::new(),
            palette,
        )
        .run()
    });

    let exit = listener.wait().await;
    info!("Interaction loop ended: {}", exit);
    Ok(exit)
}

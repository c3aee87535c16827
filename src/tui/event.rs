use crossterm::cursor::Show;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::tty::IsTty;
use log::{debug, info};
use std::io::{self, stdout};

use crate::core::action::KeyInput;

/// Where the listener gets its keystrokes from.
pub trait KeySource {
    /// Blocks until the next key press.
    fn next_key(&mut self) -> io::Result<KeyInput>;
}

/// Translate a crossterm key event into a `KeyInput`.
pub fn key_input(key: KeyEvent) -> KeyInput {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => KeyInput::Interrupt,
        (_, KeyCode::Char(c)) => KeyInput::Char(c),
        (_, KeyCode::Esc) => KeyInput::Escape,
        _ => KeyInput::Other,
    }
}

/// Keeps the terminal in raw mode for one key read.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Reads single keys from the controlling terminal.
///
/// Raw mode is only on while waiting for a key, so the line collector that
/// runs between keys sees a normal cooked terminal.
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> io::Result<KeyInput> {
        let _raw = RawModeGuard::enable()?;
        loop {
            match event::read()? {
                // Windows reports releases too
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    debug!("Key event: {:?} with modifiers {:?}", key.code, key.modifiers);
                    return Ok(key_input(key));
                }
                _ => continue,
            }
        }
    }
}

/// Ownership of the keyboard for the whole session.
///
/// Acquired once at startup; dropping it puts the terminal back the way the
/// shell expects, whichever way the program is leaving.
pub struct KeyboardCapture {
    _private: (),
}

impl KeyboardCapture {
    pub fn acquire() -> io::Result<Self> {
        if !io::stdin().is_tty() {
            return Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "standard input is not a terminal; jsonclip must be run interactively",
            ));
        }
        info!("Keyboard captured");
        Ok(Self { _private: () })
    }
}

impl Drop for KeyboardCapture {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), Show);
        info!("Keyboard released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_characters() {
        let key = KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE);
        assert_eq!(key_input(key), KeyInput::Char('1'));
        let key = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT);
        assert_eq!(key_input(key), KeyInput::Char('Q'));
    }

    #[test]
    fn test_escape_and_ctrl_c() {
        assert_eq!(key_input(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)), KeyInput::Escape);
        assert_eq!(
            key_input(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyInput::Interrupt
        );
    }

    #[test]
    fn test_other_keys() {
        assert_eq!(key_input(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)), KeyInput::Other);
        assert_eq!(key_input(KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE)), KeyInput::Other);
    }
}

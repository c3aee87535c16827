use jsonclip::clipboard::{ClipboardError, ClipboardSink};
use jsonclip::core::action::KeyInput;
use jsonclip::core::state::LoopExit;
use jsonclip::tui::menu::{MENU_OPTIONS, Palette, render_menu};
use jsonclip::tui::{KeySource, Listener, ListenerHandle};
use std::collections::VecDeque;
use std::io::{self, Cursor};
use tokio_test::assert_ok;

// ============================================================================
// Helper Types
// ============================================================================

struct Keys(VecDeque<KeyInput>);

impl Keys {
    fn new(keys: &[KeyInput]) -> Self {
        Keys(keys.iter().copied().collect())
    }
}

impl KeySource for Keys {
    fn next_key(&mut self) -> io::Result<KeyInput> {
        self.0
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::BrokenPipe, "keyboard closed"))
    }
}

#[derive(Default)]
struct Clipboard {
    copied: Vec<String>,
    fail: bool,
}

impl ClipboardSink for Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Write("denied".to_string()));
        }
        self.copied.push(text.to_string());
        Ok(())
    }
}

struct Session {
    exit: LoopExit,
    output: String,
    copied: Vec<String>,
    unread_input: String,
}

/// Runs a whole listener session over in-memory I/O.
fn session(keys: &[KeyInput], input: &str, clipboard: Clipboard) -> Session {
    let mut input = Cursor::new(input.to_string());
    let mut output = Vec::new();
    let mut clipboard = clipboard;

    let exit = Listener::new(
        Keys::new(keys),
        &mut input,
        &mut output,
        &mut clipboard,
        Palette::Plain,
    )
    .run();

    let position = input.position() as usize;
    Session {
        exit,
        output: String::from_utf8(output).unwrap(),
        copied: clipboard.copied,
        unread_input: input.into_inner()[position..].to_string(),
    }
}

fn menu() -> String {
    render_menu(&MENU_OPTIONS, Palette::Plain)
}

const ONE: KeyInput = KeyInput::Char('1');
const TWO: KeyInput = KeyInput::Char('2');
const QUIT: KeyInput = KeyInput::Char('q');

// ============================================================================
// Key dispatch
// ============================================================================

#[test]
fn test_quit_first_terminates_immediately() {
    let s = session(&[QUIT, ONE], "pending\n.\n", Clipboard::default());
    assert_eq!(s.exit, LoopExit::Quit);
    assert!(s.output.is_empty());
    assert!(s.copied.is_empty());
    assert_eq!(s.unread_input, "pending\n.\n");
}

#[test]
fn test_escape_key_and_ctrl_c_quit() {
    for key in [KeyInput::Escape, KeyInput::Interrupt] {
        let s = session(&[key], "", Clipboard::default());
        assert_eq!(s.exit, LoopExit::Quit);
    }
}

#[test]
fn test_unbound_keys_are_skipped() {
    let s = session(
        &[KeyInput::Char('x'), KeyInput::Other, KeyInput::Char('Q'), QUIT],
        "",
        Clipboard::default(),
    );
    assert_eq!(s.exit, LoopExit::Quit);
    assert!(s.output.is_empty());
}

#[test]
fn test_key_fault_is_reported_and_terminates() {
    let s = session(&[], "", Clipboard::default());
    assert_eq!(s.exit, LoopExit::KeyFault("keyboard closed".to_string()));
    assert_eq!(s.output, "Error reading key: keyboard closed\n");
}

// ============================================================================
// Flows
// ============================================================================

#[test]
fn test_escape_then_unescape_session() {
    let input = "hello \"world\"\n.\nhello \\\"world\\\"\n.\n";
    let s = session(&[ONE, TWO, QUIT], input, Clipboard::default());

    assert_eq!(s.exit, LoopExit::Quit);
    assert_eq!(
        s.copied,
        vec![r#"hello \"world\""#.to_string(), r#"hello "world""#.to_string()]
    );

    let escaped_at = s.output.find("Escaped JSON:").unwrap();
    let unescaped_at = s.output.find("Unescaped JSON:").unwrap();
    assert!(escaped_at < unescaped_at);
    // Menu comes back after each flow
    assert_eq!(s.output.matches(&menu()).count(), 2);
    assert!(s.output.ends_with(&menu()));
    assert!(s.unread_input.is_empty());
}

#[test]
fn test_multiline_escape() {
    let input = "{\n  \"name\": \"jsonclip\",\n  \"tags\": [\"a\\tb\"]\n}\n.\n";
    let s = session(&[ONE, QUIT], input, Clipboard::default());
    assert_eq!(
        s.copied,
        vec![r#"{\n  \"name\": \"jsonclip\",\n  \"tags\": [\"a\\tb\"]\n}"#.to_string()]
    );
}

#[test]
fn test_escaped_output_unescapes_back() {
    let original = "line one\n\t\"two\" \\ three ✓";
    let first = session(&[ONE, QUIT], &format!("{original}\n.\n"), Clipboard::default());
    let escaped = &first.copied[0];

    let second = session(&[TWO, QUIT], &format!("{escaped}\n.\n"), Clipboard::default());
    assert_eq!(second.copied, vec![original.to_string()]);
}

#[test]
fn test_already_quoted_input_is_not_wrapped_again() {
    let s = session(&[TWO, QUIT], "\"a\\u0041\"\n.\n", Clipboard::default());
    assert_eq!(s.copied, vec!["aA".to_string()]);
}

#[test]
fn test_decoding_error_returns_to_menu_and_allows_retry() {
    let input = "bad\\escape\n.\nfine\\nnow\n.\n";
    let s = session(&[TWO, TWO, KeyInput::Escape], input, Clipboard::default());

    assert_eq!(s.exit, LoopExit::Quit);
    assert!(s.output.contains("error converting escaped JSON to text: "));
    assert_eq!(s.copied, vec!["fine\nnow".to_string()]);
    assert_eq!(s.output.matches(&menu()).count(), 2);
}

#[test]
fn test_empty_input_escapes_to_empty_string() {
    let s = session(&[ONE, QUIT], "  .  \n", Clipboard::default());
    assert_eq!(s.copied, vec![String::new()]);
    assert!(s.output.contains("Escaped JSON:\n\n"));
}

#[test]
fn test_input_ending_before_sentinel_aborts_flow_only() {
    let s = session(&[ONE, QUIT], "half a paste", Clipboard::default());
    assert_eq!(s.exit, LoopExit::Quit);
    assert!(s.copied.is_empty());
    assert!(s.output.contains("Error reading input: unexpected end of input"));
    assert!(s.output.ends_with(&menu()));
}

#[test]
fn test_clipboard_failure_keeps_loop_alive() {
    let clipboard = Clipboard {
        fail: true,
        ..Default::default()
    };
    let s = session(&[ONE, ONE, QUIT], "x\n.\ny\n.\n", clipboard);

    assert_eq!(s.exit, LoopExit::Quit);
    assert!(s.output.contains("Escaped JSON:\nx\n"));
    assert!(s.output.contains("Escaped JSON:\ny\n"));
    assert_eq!(
        s.output
            .matches("error sending the result to the clipboard: clipboard write failed: denied")
            .count(),
        2
    );
}

// ============================================================================
// Listener thread
// ============================================================================

#[tokio::test]
async fn test_spawned_listener_reports_exit() {
    let handle = ListenerHandle::spawn(|| {
        Listener::new(
            Keys::new(&[ONE, QUIT]),
            Cursor::new("text\n.\n".to_string()),
            io::sink(),
            Clipboard::default(),
            Palette::Ansi,
        )
        .run()
    });
    assert_eq!(handle.wait().await, LoopExit::Quit);
}

#[tokio::test]
async fn test_spawned_listener_key_fault() {
    let handle = ListenerHandle::spawn(|| {
        Listener::new(
            Keys::new(&[]),
            io::empty(),
            io::sink(),
            Clipboard::default(),
            Palette::Plain,
        )
        .run()
    });
    let exit = handle.wait().await;
    assert!(!exit.is_success());
    assert!(matches!(exit, LoopExit::KeyFault(_)));
}

#[tokio::test]
async fn test_panicking_listener_is_abandoned() {
    let handle = ListenerHandle::spawn(|| panic!("listener blew up"));
    assert_eq!(handle.wait().await, LoopExit::Abandoned);
}

#[tokio::test]
async fn test_completion_signal_arrives_from_blocking_thread() {
    let (tx, rx) = std::sync::mpsc::channel();
    let handle = ListenerHandle::spawn(move || {
        assert_ok!(tx.send(std::thread::current().id()));
        LoopExit::Quit
    });
    assert_eq!(handle.wait().await, LoopExit::Quit);

    let listener_thread = assert_ok!(rx.recv());
    assert_ne!(listener_thread, std::thread::current().id());
}

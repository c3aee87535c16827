//! Menu box, banner and colored message text.
//!
//! Everything here is a pure function returning a `String`, so the layout can
//! be checked without a terminal. Colors come from crossterm's styling and are
//! dropped entirely with `Palette::Plain`.
//!
//! ```text
//! +------------------------------------+
//! | Press 1 to escape JSON             |
//! | Press 2 to unescape (regular) JSON |
//! | Press ESC or 'q' to quit           |
//! +------------------------------------+
//! ```

use crossterm::style::{Color, Stylize, style};
use unicode_width::UnicodeWidthStr;

pub const MENU_OPTIONS: [&str; 3] = [
    "Press 1 to escape JSON",
    "Press 2 to unescape (regular) JSON",
    "Press ESC or 'q' to quit",
];

const RULE_WIDTH: usize = 80;

const BANNER: [&str; 2] = [
    "jsonclip: turn text into an escaped JSON string (or back) and copy it.",
    "Pick an option below; the result lands on your clipboard.",
];

const PROMPT: [&str; 2] = [
    "Paste your text and press Enter.",
    "To convert and get the output, type '.' on a single line and press Enter.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    Ansi,
    Plain,
}

impl Palette {
    pub fn from_color(color: bool) -> Self {
        if color { Palette::Ansi } else { Palette::Plain }
    }

    fn paint(self, text: &str, color: Color) -> String {
        match self {
            Palette::Ansi => style(text).with(color).to_string(),
            Palette::Plain => text.to_string(),
        }
    }

    /// Confirmations and instructions.
    pub fn success(self, text: &str) -> String {
        self.paint(text, Color::DarkGreen)
    }

    /// The label line above a result.
    pub fn heading(self, text: &str) -> String {
        self.paint(text, Color::DarkMagenta)
    }

    pub fn error(self, text: &str) -> String {
        self.paint(text, Color::DarkRed)
    }
}

/// Renders the bordered option box, one option per row.
///
/// Inner width is the widest label plus one column of padding, with one
/// leading space on every row.
pub fn render_menu(options: &[&str], palette: Palette) -> String {
    let width = options.iter().map(|o| o.width()).max().unwrap_or(0) + 1;
    let border = format!("+{}+\n", "-".repeat(width + 1));

    let mut out = border.clone();
    for (i, option) in options.iter().enumerate() {
        let color = if i == 1 {
            Color::DarkCyan
        } else {
            Color::DarkBlue
        };
        let padded = format!("{option}{}", " ".repeat(width - option.width()));
        out.push_str(&format!("| {}|\n", palette.paint(&padded, color)));
    }
    out.push_str(&border);
    out
}

/// Shown once at startup, above the first menu.
pub fn render_banner(palette: Palette) -> String {
    format!("{}\n{}\n", palette.success(BANNER[0]), palette.success(BANNER[1]))
}

/// Shown before collecting pasted text.
pub fn render_prompt(palette: Palette) -> String {
    format!(
        "{}\n{}\n{}\n",
        palette.success(PROMPT[0]),
        palette.success(PROMPT[1]),
        "-".repeat(RULE_WIDTH),
    )
}

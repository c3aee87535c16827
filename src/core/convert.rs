//! # Converter
//!
//! Turns collected lines into the interior of a JSON string literal and back.
//! The actual escaping is delegated to `serde_json`, so whatever comes out of
//! `to_escaped` is exactly what any JSON parser expects between two quotes.
//!
//! ```text
//! ["hello \"world\"\n"]  ──to_escaped──▶  hello \"world\"
//! ["hello \"world\""]    ──to_unescaped─▶  hello "world"
//! ```

use std::fmt;

/// The trimmed input that stands for "cancel". The collector normally eats it
/// before it gets here.
const SENTINEL: &str = ".";

/// Which way a conversion goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    Escape,
    Unescape,
}

impl Conversion {
    /// Label shown above the result, e.g. `Escaped JSON`.
    pub fn label(self) -> &'static str {
        match self {
            Conversion::Escape => "Escaped JSON",
            Conversion::Unescape => "Unescaped JSON",
        }
    }

    pub fn apply(self, lines: &[String]) -> Result<String, ConvertError> {
        match self {
            Conversion::Escape => to_escaped(lines),
            Conversion::Unescape => to_unescaped(lines),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The whole input was the sentinel line.
    UserAbort,
    /// serde_json refused to encode the text.
    Encoding(String),
    /// The text is not a valid JSON string literal.
    Decoding(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::UserAbort => write!(f, "input cancelled"),
            ConvertError::Encoding(msg) => {
                write!(f, "error converting text to escaped JSON: {msg}")
            }
            ConvertError::Decoding(msg) => {
                write!(f, "error converting escaped JSON to text: {msg}")
            }
        }
    }
}

impl std::error::Error for ConvertError {}

/// Joins the lines with no separator and trims the result.
fn join_trimmed(lines: &[String]) -> String {
    lines.concat().trim().to_string()
}

/// Encodes the joined input as a JSON string literal and returns it without
/// the surrounding quotes.
pub fn to_escaped(lines: &[String]) -> Result<String, ConvertError> {
    let input = join_trimmed(lines);
    if input == SENTINEL {
        return Err(ConvertError::UserAbort);
    }

    let literal =
        serde_json::to_string(&input).map_err(|e| ConvertError::Encoding(e.to_string()))?;

    // serde_json always emits `"..."` for a str
    let interior = literal
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .ok_or_else(|| ConvertError::Encoding(format!("unexpected literal: {literal}")))?;

    Ok(interior.to_string())
}

/// Decodes the joined input as a JSON string literal.
///
/// Quotes are added around the input unless it already starts *and* ends with
/// one, so users can paste an escaped fragment as-is.
pub fn to_unescaped(lines: &[String]) -> Result<String, ConvertError> {
    let input = join_trimmed(lines);
    if input == SENTINEL {
        return Err(ConvertError::UserAbort);
    }

    let literal = if is_quoted(&input) {
        input
    } else {
        format!("\"{input}\"")
    };

    serde_json::from_str::<String>(&literal).map_err(|e| ConvertError::Decoding(e.to_string()))
}

fn is_quoted(input: &str) -> bool {
    input.starts_with('"') && input.ends_with('"')
}

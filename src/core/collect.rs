//! # Text Collector
//!
//! Reads pasted text line by line until the user types a lone `.`.
//! Lines keep their terminators so the converter sees the text exactly as
//! it was pasted.

use log::debug;
use std::fmt;
use std::io::{self, BufRead};

/// Reading stopped before the sentinel line showed up.
#[derive(Debug)]
pub struct CollectError {
    /// Lines read before the fault.
    pub partial: Vec<String>,
    pub source: io::Error,
}

impl fmt::Display for CollectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error reading input: {}", self.source)
    }
}

impl std::error::Error for CollectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// True for a line whose trimmed content is exactly `.`.
pub fn is_sentinel(line: &str) -> bool {
    line.trim() == "."
}

/// Collects lines up to (not including) the first sentinel line.
///
/// End of input before the sentinel counts as a read fault.
pub fn collect_lines<R: BufRead>(reader: &mut R) -> Result<Vec<String>, CollectError> {
    let mut lines = Vec::new();

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                let source =
                    io::Error::new(io::ErrorKind::UnexpectedEof, "unexpected end of input");
                return Err(CollectError { partial: lines, source });
            }
            Ok(_) if is_sentinel(&line) => break,
            Ok(_) => lines.push(line),
            Err(source) => {
                return Err(CollectError { partial: lines, source });
            }
        }
    }

    debug!("Collected {} line(s)", lines.len());
    Ok(lines)
}

//! Escape / unescape flows: prompt, collect, convert, print, copy.
//!
//! Conversion and clipboard failures end the flow with a message and never
//! reach the loop. Only failing to write to the terminal is returned as an
//! error.

use log::{info, warn};
use std::io::{self, BufRead, Write};

use crate::clipboard::ClipboardSink;
use crate::core::collect::collect_lines;
use crate::core::convert::{Conversion, ConvertError};
use crate::tui::menu::{Palette, render_prompt};

/// How a single flow ended.
#[derive(Debug, PartialEq)]
pub enum FlowOutcome {
    Copied(String),
    /// Converted and shown, but the clipboard refused it.
    CopyFailed { value: String, error: String },
    ConversionFailed(ConvertError),
    /// The input was just the sentinel.
    Aborted,
    ReadFault(String),
}

pub fn run_flow<R, W, C>(
    conversion: Conversion,
    input: &mut R,
    out: &mut W,
    clipboard: &mut C,
    palette: Palette,
) -> io::Result<FlowOutcome>
where
    R: BufRead,
    W: Write,
    C: ClipboardSink,
{
    write!(out, "{}", render_prompt(palette))?;
    out.flush()?;

    let lines = match collect_lines(input) {
        Ok(lines) => lines,
        Err(e) => {
            warn!(
                "{:?}: input read failed after {} line(s): {}",
                conversion,
                e.partial.len(),
                e.source
            );
            writeln!(out, "{}", palette.error(&e.to_string()))?;
            return Ok(FlowOutcome::ReadFault(e.source.to_string()));
        }
    };

    let value = match conversion.apply(&lines) {
        Ok(value) => value,
        Err(e) => return report_conversion_error(conversion, e, out, palette),
    };

    let label = conversion.label();
    writeln!(out, "{}", palette.heading(&format!("{label}:")))?;
    writeln!(out, "{value}")?;
    out.flush()?;

    let outcome = match clipboard.set_text(&value) {
        Ok(()) => {
            info!("{:?}: copied {} bytes", conversion, value.len());
            writeln!(
                out,
                "{}",
                palette.success(&format!("{label} has been copied to the clipboard."))
            )?;
            FlowOutcome::Copied(value)
        }
        Err(e) => {
            writeln!(
                out,
                "{}",
                palette.error(&format!("error sending the result to the clipboard: {e}"))
            )?;
            FlowOutcome::CopyFailed {
                value,
                error: e.to_string(),
            }
        }
    };
    out.flush()?;
    Ok(outcome)
}

/// Prints a failed conversion in the error color and ends the flow.
fn report_conversion_error<W: Write>(
    conversion: Conversion,
    err: ConvertError,
    out: &mut W,
    palette: Palette,
) -> io::Result<FlowOutcome> {
    writeln!(out, "{}", palette.error(&err.to_string()))?;
    out.flush()?;
    match err {
        ConvertError::UserAbort => {
            info!("{:?}: input cancelled", conversion);
            Ok(FlowOutcome::Aborted)
        }
        err => {
            warn!("{:?}: conversion failed: {}", conversion, err);
            Ok(FlowOutcome::ConversionFailed(err))
        }
    }
}

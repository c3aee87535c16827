//! jsonclip library exports for testing

pub mod clipboard;
pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

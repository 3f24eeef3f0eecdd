#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

/// Renders a diagnostic for the terminal.
///
/// ```text
/// Error: UnexpectedToken (Unexpected token: `=`, expected Identifier here)
///  -> expected next token to be Identifier, got Assign instead
/// ```
pub fn format_error(error: &Error) -> String {
    let header = if let ErrorTip::None = error.get_tip() {
        format!("Error: {}", error.get_error_name())
    } else {
        format!("Error: {} ({})", error.get_error_name(), error.get_tip())
    };

    format!("{}\n -> {}", header, error)
}

pub fn display_error(error: &Error) {
    eprintln!("{}", format_error(error));
}

//! Diagnostics produced while lexing.
//!
//! Every failure the lexer can observe is local to a single literal or
//! line, so errors are collected rather than returned early. This module
//! defines:
//!
//! - The `Error` structure pairing a failure with its source span
//! - `ErrorImpl` variants for each kind of malformed input
//! - Severity (ambiguous indentation is only a warning)
//! - Suggestions shown when a diagnostic is rendered

pub mod errors;

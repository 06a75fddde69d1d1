use std::fmt::Display;

use thiserror::Error;

use crate::Span;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error} at {}..{}", .span.start, .span.end)]
pub struct Error {
    internal_error: ErrorImpl,
    span: Span,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, span: Span) -> Self {
        Error {
            internal_error: error_impl,
            span,
        }
    }

    pub fn get_span(&self) -> Span {
        self.span
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_severity(&self) -> Severity {
        match &self.internal_error {
            ErrorImpl::AmbiguousIndentation { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedLexeme { .. } => "UnrecognisedLexeme",
            ErrorImpl::InvalidIdentifier { .. } => "InvalidIdentifier",
            ErrorImpl::InvalidNumber { .. } => "InvalidNumber",
            ErrorImpl::IntegerOverflow { .. } => "IntegerOverflow",
            ErrorImpl::InvalidEscape { .. } => "InvalidEscape",
            ErrorImpl::InvalidRune { .. } => "InvalidRune",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnterminatedRune => "UnterminatedRune",
            ErrorImpl::AmbiguousIndentation { .. } => "AmbiguousIndentation",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedLexeme { .. } => ErrorTip::None,
            ErrorImpl::InvalidIdentifier { lexeme } => ErrorTip::Suggestion(format!(
                "`{}` contains a character that cannot appear in an identifier",
                lexeme
            )),
            ErrorImpl::InvalidNumber { lexeme } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, only `i32`, `i64`, `u32` and `u64` suffixes are allowed",
                lexeme
            )),
            ErrorImpl::IntegerOverflow { lexeme } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                lexeme
            )),
            ErrorImpl::InvalidEscape { escape } => {
                ErrorTip::Suggestion(format!("Unknown escape sequence `{}`", escape))
            }
            ErrorImpl::InvalidRune { .. } => ErrorTip::Suggestion(String::from(
                "A rune literal holds exactly one character, use double quotes for strings",
            )),
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("Missing closing `\"`"))
            }
            ErrorImpl::UnterminatedRune => ErrorTip::Suggestion(String::from("Missing closing `'`")),
            ErrorImpl::AmbiguousIndentation { width, unit } => ErrorTip::Suggestion(format!(
                "Indentation of width {} is not a multiple of {}, the line keeps the previous level",
                width, unit
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised lexeme: {lexeme:?}")]
    UnrecognisedLexeme { lexeme: String },
    #[error("invalid identifier: {lexeme:?}")]
    InvalidIdentifier { lexeme: String },
    #[error("invalid number: {lexeme:?}")]
    InvalidNumber { lexeme: String },
    #[error("integer literal out of range: {lexeme:?}")]
    IntegerOverflow { lexeme: String },
    #[error("invalid escape sequence: {escape:?}")]
    InvalidEscape { escape: String },
    #[error("invalid rune literal: {payload:?}")]
    InvalidRune { payload: String },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated rune literal")]
    UnterminatedRune,
    #[error("ambiguous indentation: width {width} is not a multiple of {unit}")]
    AmbiguousIndentation { width: usize, unit: usize },
}

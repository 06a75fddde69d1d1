//! Lexical analysis for the indentation-sensitive source language.
//!
//! A single left-to-right pass over the source code points produces the
//! complete token stream before parsing starts. The pass handles:
//!
//! - Keywords, contextual keywords, identifiers and boolean literals
//! - Integer literals with optional `i32`/`i64`/`u32`/`u64` suffixes
//! - String and rune literals with escape sequences
//! - Longest-match operators and punctuation
//! - Synthetic indent/dedent tokens derived from leading whitespace
//! - Whitespace and comment trivia attached to the neighbouring tokens

pub mod indentation;
pub mod lexer;
pub mod literals;
pub mod symbols;
pub mod tokens;
pub mod trivia;

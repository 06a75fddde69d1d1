//! Classification of flushed lexemes into literal, keyword and identifier
//! tokens.

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::errors::ErrorImpl;

use super::tokens::{IntegerType, TokenKind, CONTEXTUAL_LOOKUP, RESERVED_LOOKUP};

lazy_static! {
    static ref IDENTIFIER_START: Regex = Regex::new(r"^[\p{L}\p{Nl}_]").unwrap();
    static ref IDENTIFIER: Regex =
        Regex::new(r"^[\p{L}\p{Nl}_][\p{L}\p{Nl}\p{Nd}\p{Mn}\p{Mc}\p{Cf}\p{Pc}]*$").unwrap();
    static ref DIGIT_RUN: Regex = Regex::new(r"^[0-9]+").unwrap();
}

/// Classifies a word lexeme: keyword, contextual identifier, boolean,
/// identifier or integer literal.
pub fn classify_word(lexeme: &str) -> Result<TokenKind, ErrorImpl> {
    if IDENTIFIER_START.is_match(lexeme) {
        if !IDENTIFIER.is_match(lexeme) {
            return Err(ErrorImpl::InvalidIdentifier {
                lexeme: lexeme.to_string(),
            });
        }

        if let Some(keyword) = RESERVED_LOOKUP.get(lexeme) {
            return Ok(TokenKind::Keyword(*keyword));
        }

        return Ok(match lexeme {
            "true" => TokenKind::Boolean(true),
            "false" => TokenKind::Boolean(false),
            _ => TokenKind::Identifier {
                name: lexeme.to_string(),
                contextual: CONTEXTUAL_LOOKUP.get(lexeme).copied(),
            },
        });
    }

    if DIGIT_RUN.is_match(lexeme) {
        return classify_integer(lexeme);
    }

    Err(ErrorImpl::UnrecognisedLexeme {
        lexeme: lexeme.to_string(),
    })
}

fn classify_integer(lexeme: &str) -> Result<TokenKind, ErrorImpl> {
    if let Ok(value) = lexeme.parse::<i64>() {
        return Ok(TokenKind::Integer {
            value,
            ty: IntegerType::Int64,
            explicit_suffix: false,
        });
    }

    let is_digits = |text: &str| !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit());

    // The last three code points may name the type
    if let Some((at, _)) = lexeme.char_indices().rev().nth(2) {
        let (digits, suffix) = lexeme.split_at(at);

        if let Some(ty) = IntegerType::from_suffix(suffix) {
            if is_digits(digits) {
                return parse_with_type(lexeme, digits, ty);
            }
        }
    }

    if is_digits(lexeme) {
        Err(ErrorImpl::IntegerOverflow {
            lexeme: lexeme.to_string(),
        })
    } else {
        Err(ErrorImpl::InvalidNumber {
            lexeme: lexeme.to_string(),
        })
    }
}

fn parse_with_type(lexeme: &str, digits: &str, ty: IntegerType) -> Result<TokenKind, ErrorImpl> {
    let value = match ty {
        IntegerType::Int32 => digits.parse::<i32>().map(i64::from).ok(),
        IntegerType::Int64 => digits.parse::<i64>().ok(),
        IntegerType::UInt32 => digits.parse::<u32>().map(i64::from).ok(),
        IntegerType::UInt64 => digits.parse::<u64>().map(|value| value as i64).ok(),
    };

    match value {
        Some(value) => Ok(TokenKind::Integer {
            value,
            ty,
            explicit_suffix: true,
        }),
        None => Err(ErrorImpl::IntegerOverflow {
            lexeme: lexeme.to_string(),
        }),
    }
}

/// Classifies the text between a pair of double quotes.
pub fn classify_string(raw: &str) -> Result<TokenKind, ErrorImpl> {
    unescape(raw).map(TokenKind::String)
}

/// Classifies the text between a pair of single quotes. The decoded
/// payload must be exactly one scalar value.
pub fn classify_rune(raw: &str) -> Result<TokenKind, ErrorImpl> {
    let decoded = unescape(raw)?;
    let mut chars = decoded.chars();

    match (chars.next(), chars.next()) {
        (Some(rune), None) => Ok(TokenKind::Rune(rune)),
        _ => Err(ErrorImpl::InvalidRune {
            payload: raw.to_string(),
        }),
    }
}

/// Decodes escape sequences in a quoted literal body.
pub fn unescape(raw: &str) -> Result<String, ErrorImpl> {
    let mut result = String::new();
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        let invalid = |escape: String| ErrorImpl::InvalidEscape { escape };

        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some('0') => result.push('\0'),
            Some('\\') => result.push('\\'),
            Some('"') => result.push('"'),
            Some('\'') => result.push('\''),
            Some('x') => {
                let mut hex = String::new();

                for _ in 0..2 {
                    match chars.peek() {
                        Some(ch) if ch.is_ascii_hexdigit() => {
                            hex.push(*ch);
                            chars.next();
                        }
                        _ => break,
                    }
                }

                match u8::from_str_radix(&hex, 16) {
                    Ok(byte) if hex.len() == 2 && byte.is_ascii() => result.push(byte as char),
                    _ => return Err(invalid(format!("\\x{}", hex))),
                }
            }
            Some('u') => {
                if chars.next_if_eq(&'{').is_none() {
                    return Err(invalid(String::from("\\u")));
                }

                let mut hex = String::new();
                while let Some(ch) = chars.next_if(|ch| ch.is_ascii_hexdigit()) {
                    hex.push(ch);
                }

                let closed = chars.next_if_eq(&'}').is_some();
                let scalar = u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32);

                match scalar {
                    Some(scalar) if closed && hex.len() <= 6 => result.push(scalar),
                    _ => return Err(invalid(format!("\\u{{{}", hex))),
                }
            }
            Some(other) => return Err(invalid(format!("\\{}", other))),
            None => return Err(invalid(String::from("\\"))),
        }
    }

    Ok(result)
}

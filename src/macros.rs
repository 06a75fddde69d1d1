//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance from its kind, span bounds and
//!   trivia counts

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$start`, `$end` - Code-point offsets of the full span, trivia included
/// * `$leading` - Leading trivia length
/// * `$trailing` - Trailing trivia length (defaults to 0)
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Boolean(true), 2, 6, 2);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $start:expr, $end:expr, $leading:expr) => {
        $crate::MK_TOKEN!($kind, $start, $end, $leading, 0)
    };
    ($kind:expr, $start:expr, $end:expr, $leading:expr, $trailing:expr) => {
        $crate::lexer::tokens::Token::new(
            $kind,
            $crate::Span {
                start: $start,
                end: $end,
            },
            $leading,
            $trailing,
        )
    };
}

use super::tokens::Symbol;

/// Picks the longest symbol starting at `first`, looking at most one code
/// point ahead. Returns `None` when `first` is not an operator or
/// punctuation glyph.
///
/// `=` never combines with a following `!`: `=!=` is `=` then `!=`.
pub fn disambiguate(first: char, next: Option<char>) -> Option<Symbol> {
    let symbol = match (first, next) {
        ('>', Some('=')) => Symbol::GreaterEquals,
        ('>', Some('>')) => Symbol::ShiftRight,
        ('>', _) => Symbol::Greater,
        ('<', Some('=')) => Symbol::LessEquals,
        ('<', Some('<')) => Symbol::ShiftLeft,
        ('<', Some(':')) => Symbol::Subtype,
        ('<', _) => Symbol::Less,
        ('=', Some('=')) => Symbol::Equals,
        ('=', _) => Symbol::Assignment,
        ('!', Some('=')) => Symbol::NotEquals,
        ('!', _) => Symbol::Not,
        ('.', _) => Symbol::Dot,
        (',', _) => Symbol::Comma,
        (':', _) => Symbol::Colon,
        ('-', _) => Symbol::Dash,
        ('+', _) => Symbol::Plus,
        ('*', _) => Symbol::Star,
        ('/', _) => Symbol::Slash,
        ('%', _) => Symbol::Percent,
        ('~', _) => Symbol::Tilde,
        ('&', _) => Symbol::Ampersand,
        ('|', _) => Symbol::Pipe,
        ('^', _) => Symbol::Caret,
        ('[', _) => Symbol::OpenBracket,
        (']', _) => Symbol::CloseBracket,
        ('(', _) => Symbol::OpenParen,
        (')', _) => Symbol::CloseParen,
        ('?', _) => Symbol::Question,
        _ => return None,
    };

    Some(symbol)
}

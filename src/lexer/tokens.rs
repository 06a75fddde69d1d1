use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, Keyword> = {
        let mut map = HashMap::new();
        map.insert("this", Keyword::This);
        map.insert("super", Keyword::Super);
        map.insert("is", Keyword::Is);
        map.insert("else", Keyword::Else);
        map.insert("for", Keyword::For);
        map.insert("in", Keyword::In);
        map.insert("while", Keyword::While);
        map.insert("def", Keyword::Def);
        map.insert("var", Keyword::Var);
        map.insert("val", Keyword::Val);
        map.insert("return", Keyword::Return);
        map.insert("break", Keyword::Break);
        map.insert("continue", Keyword::Continue);
        map.insert("abstract", Keyword::Abstract);
        map.insert("virtual", Keyword::Virtual);
        map.insert("override", Keyword::Override);
        map.insert("native", Keyword::Native);
        map
    };
    pub static ref CONTEXTUAL_LOOKUP: HashMap<&'static str, ContextualKeyword> = {
        let mut map = HashMap::new();
        map.insert("class", ContextualKeyword::Class);
        map.insert("object", ContextualKeyword::Object);
        map.insert("interface", ContextualKeyword::Interface);
        map.insert("null", ContextualKeyword::Null);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Keyword {
    This,
    Super,
    Is,
    Else,
    For,
    In,
    While,
    Def,
    Var,
    Val,
    Return,
    Break,
    Continue,
    Abstract,
    Virtual,
    Override,
    Native,
}

impl Keyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::This => "this",
            Keyword::Super => "super",
            Keyword::Is => "is",
            Keyword::Else => "else",
            Keyword::For => "for",
            Keyword::In => "in",
            Keyword::While => "while",
            Keyword::Def => "def",
            Keyword::Var => "var",
            Keyword::Val => "val",
            Keyword::Return => "return",
            Keyword::Break => "break",
            Keyword::Continue => "continue",
            Keyword::Abstract => "abstract",
            Keyword::Virtual => "virtual",
            Keyword::Override => "override",
            Keyword::Native => "native",
        }
    }
}

/// Words lexed as identifiers that the parser recognises in specific
/// positions.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ContextualKeyword {
    Class,
    Object,
    Interface,
    Null,
}

impl ContextualKeyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContextualKeyword::Class => "class",
            ContextualKeyword::Object => "object",
            ContextualKeyword::Interface => "interface",
            ContextualKeyword::Null => "null",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Symbol {
    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    ShiftLeft,
    Subtype, // <:
    Greater,
    GreaterEquals,
    ShiftRight,

    Dot,
    Comma,
    Colon,
    Question,

    Plus,
    Dash,
    Star,
    Slash,
    Percent,

    Tilde,
    Ampersand,
    Pipe,
    Caret,

    OpenBracket,
    CloseBracket,
    OpenParen,
    CloseParen,
}

impl Symbol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::Assignment => "=",
            Symbol::Equals => "==",
            Symbol::Not => "!",
            Symbol::NotEquals => "!=",
            Symbol::Less => "<",
            Symbol::LessEquals => "<=",
            Symbol::ShiftLeft => "<<",
            Symbol::Subtype => "<:",
            Symbol::Greater => ">",
            Symbol::GreaterEquals => ">=",
            Symbol::ShiftRight => ">>",
            Symbol::Dot => ".",
            Symbol::Comma => ",",
            Symbol::Colon => ":",
            Symbol::Question => "?",
            Symbol::Plus => "+",
            Symbol::Dash => "-",
            Symbol::Star => "*",
            Symbol::Slash => "/",
            Symbol::Percent => "%",
            Symbol::Tilde => "~",
            Symbol::Ampersand => "&",
            Symbol::Pipe => "|",
            Symbol::Caret => "^",
            Symbol::OpenBracket => "[",
            Symbol::CloseBracket => "]",
            Symbol::OpenParen => "(",
            Symbol::CloseParen => ")",
        }
    }

    /// Number of code points the symbol occupies in source.
    pub fn width(&self) -> usize {
        self.as_str().len()
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum IntegerType {
    Int32,
    Int64,
    UInt32,
    UInt64,
}

impl IntegerType {
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "i32" => Some(IntegerType::Int32),
            "i64" => Some(IntegerType::Int64),
            "u32" => Some(IntegerType::UInt32),
            "u64" => Some(IntegerType::UInt64),
            _ => None,
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            IntegerType::Int32 => "i32",
            IntegerType::Int64 => "i64",
            IntegerType::UInt32 => "u32",
            IntegerType::UInt64 => "u64",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum IndentDirection {
    Indent,
    Dedent,
}

impl IndentDirection {
    pub fn sign(&self) -> i32 {
        match self {
            IndentDirection::Indent => 1,
            IndentDirection::Dedent => -1,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum TokenKind {
    Keyword(Keyword),
    Identifier {
        name: String,
        contextual: Option<ContextualKeyword>,
    },
    Boolean(bool),
    /// `u64` values above `i64::MAX` keep their bit pattern in `value`.
    Integer {
        value: i64,
        ty: IntegerType,
        explicit_suffix: bool,
    },
    String(String),
    Rune(char),
    Symbol(Symbol),
    Indentation(IndentDirection),
}

impl TokenKind {
    pub fn identifier(name: &str) -> Self {
        TokenKind::Identifier {
            name: name.to_string(),
            contextual: CONTEXTUAL_LOOKUP.get(name).copied(),
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            TokenKind::Integer { value, .. } => Some(*value as u64),
            _ => None,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Keyword(keyword) => write!(f, "Keyword({})", keyword.as_str()),
            TokenKind::Identifier {
                name,
                contextual: Some(_),
            } => write!(f, "Identifier({}, contextual)", name),
            TokenKind::Identifier { name, .. } => write!(f, "Identifier({})", name),
            TokenKind::Boolean(value) => write!(f, "Boolean({})", value),
            TokenKind::Integer {
                value,
                ty: IntegerType::UInt64,
                explicit_suffix: true,
            } => write!(f, "Integer({}u64)", *value as u64),
            TokenKind::Integer {
                value,
                ty,
                explicit_suffix: true,
            } => write!(f, "Integer({}{})", value, ty.suffix()),
            TokenKind::Integer { value, .. } => write!(f, "Integer({})", value),
            TokenKind::String(value) => write!(f, "String({:?})", value),
            TokenKind::Rune(value) => write!(f, "Rune({:?})", value),
            TokenKind::Symbol(symbol) => write!(f, "Symbol({})", symbol.as_str()),
            TokenKind::Indentation(IndentDirection::Indent) => write!(f, "Indent"),
            TokenKind::Indentation(IndentDirection::Dedent) => write!(f, "Dedent"),
        }
    }
}

/// One lexical unit. `span` runs from the first leading trivia code point
/// to the last trailing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) span: Span,
    pub(crate) leading_trivia: usize,
    pub(crate) trailing_trivia: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{} {}", self.span.start, self.span.end, self.kind)
    }
}

impl Token {
    pub fn new(kind: TokenKind, span: Span, leading_trivia: usize, trailing_trivia: usize) -> Self {
        Token {
            kind,
            span,
            leading_trivia,
            trailing_trivia,
        }
    }

    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn end(&self) -> usize {
        self.span.end
    }

    pub fn leading_trivia(&self) -> usize {
        self.leading_trivia
    }

    pub fn trailing_trivia(&self) -> usize {
        self.trailing_trivia
    }

    /// The span without its trivia.
    pub fn content_span(&self) -> Span {
        Span {
            start: self.span.start + self.leading_trivia,
            end: self.span.end - self.trailing_trivia,
        }
    }

    pub fn is_indentation(&self) -> bool {
        matches!(self.kind, TokenKind::Indentation(_))
    }

    /// +1 for an indent, -1 for a dedent, 0 for everything else.
    pub fn indentation_sign(&self) -> i32 {
        match &self.kind {
            TokenKind::Indentation(direction) => direction.sign(),
            _ => 0,
        }
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind == TokenKind::Keyword(keyword)
    }

    pub fn is_symbol(&self, symbol: Symbol) -> bool {
        self.kind == TokenKind::Symbol(symbol)
    }

    fn is_one_of_many(&self, symbols: &[Symbol]) -> bool {
        symbols.iter().any(|symbol| self.is_symbol(*symbol))
    }

    pub fn is_comparison(&self) -> bool {
        self.is_one_of_many(&[
            Symbol::Equals,
            Symbol::NotEquals,
            Symbol::Less,
            Symbol::LessEquals,
            Symbol::Greater,
            Symbol::GreaterEquals,
        ])
    }
}

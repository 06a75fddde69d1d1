use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl, Severity},
    Span, MK_TOKEN,
};

use super::{
    indentation::{IndentationTracker, LineIndentation},
    literals::{classify_rune, classify_string, classify_word},
    symbols::disambiguate,
    tokens::{IndentDirection, Symbol, Token, TokenKind},
    trivia::TriviaAccumulator,
};

/// Lexical mode of the scan driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Default,
    Identifier,
    Number,
    String,
    Rune,
    /// At the start of a physical line, before its indentation is measured.
    Indentation,
    Commentary,
    Symbol,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerOptions {
    /// Record a warning for lines whose indentation is ignored.
    pub report_ambiguous_indentation: bool,
}

impl Default for LexerOptions {
    fn default() -> Self {
        LexerOptions {
            report_ambiguous_indentation: true,
        }
    }
}

/// The result of a lexing pass: every token that could be classified,
/// plus diagnostics for the spans that could not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexed {
    pub tokens: Vec<Token>,
    pub errors: Vec<Error>,
}

impl Lexed {
    pub fn has_errors(&self) -> bool {
        self.errors
            .iter()
            .any(|error| error.get_severity() == Severity::Error)
    }

    /// Fails with the first error-severity diagnostic. Warnings are ignored.
    pub fn into_result(self) -> Result<Vec<Token>, Error> {
        match self
            .errors
            .into_iter()
            .find(|error| error.get_severity() == Severity::Error)
        {
            Some(error) => Err(error),
            None => Ok(self.tokens),
        }
    }
}

/// Scan context for one pass over a source text.
pub struct Lexer {
    source: Vec<char>,
    pos: usize,
    mode: Mode,
    lexeme: String,
    lexeme_start: usize,
    tokens: Vec<Token>,
    errors: Vec<Error>,
    trivia: TriviaAccumulator,
    indentation: IndentationTracker,
    options: LexerOptions,
}

impl Lexer {
    pub fn new(source: &str, options: LexerOptions) -> Lexer {
        Lexer {
            source: source.chars().collect(),
            pos: 0,
            mode: Mode::Default,
            lexeme: String::new(),
            lexeme_start: 0,
            tokens: vec![],
            errors: vec![],
            trivia: TriviaAccumulator::new(),
            indentation: IndentationTracker::new(),
            options,
        }
    }

    fn at(&self) -> char {
        self.source[self.pos]
    }

    fn peek(&self) -> Option<char> {
        self.source.get(self.pos + 1).copied()
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn at_line_break(&self) -> Option<usize> {
        match self.at() {
            '\n' => Some(1),
            '\r' if self.peek() == Some('\n') => Some(2),
            _ => None,
        }
    }

    /// Runs the pass to completion.
    pub fn run(mut self) -> Lexed {
        debug!(code_points = self.source.len(), "lexing");

        while !self.at_eof() {
            match self.mode {
                Mode::Indentation => self.track_indentation(),
                Mode::Commentary => self.scan_comment(),
                Mode::String | Mode::Rune => self.scan_quoted(),
                Mode::Default | Mode::Identifier | Mode::Number | Mode::Symbol => {
                    self.scan_default()
                }
            }
        }

        self.finish()
    }

    fn scan_default(&mut self) {
        if let Some(width) = self.at_line_break() {
            self.line_break(width);
            return;
        }

        match self.at() {
            ' ' | '\t' | '\r' => {
                self.flush();
                self.push_trivia(1);
            }
            '#' => {
                self.flush();
                self.mode = Mode::Commentary;
                self.push_trivia(1);
            }
            '"' => {
                self.flush();
                self.open_quoted(Mode::String);
            }
            '\'' => {
                self.flush();
                self.open_quoted(Mode::Rune);
            }
            glyph => {
                if let Some(symbol) = disambiguate(glyph, self.peek()) {
                    self.flush();
                    self.scan_symbol(symbol);
                    return;
                }

                if self.lexeme.is_empty() {
                    self.begin_lexeme();
                    self.mode = if glyph.is_ascii_digit() {
                        Mode::Number
                    } else {
                        Mode::Identifier
                    };
                }

                self.lexeme.push(glyph);
                self.pos += 1;
            }
        }
    }

    fn scan_comment(&mut self) {
        if self.at_line_break().is_some() {
            self.mode = Mode::Default;
        } else {
            self.push_trivia(1);
        }
    }

    fn scan_quoted(&mut self) {
        let closing = if self.mode == Mode::String { '"' } else { '\'' };

        match self.at() {
            '\\' => {
                self.lexeme.push('\\');
                self.pos += 1;

                if !self.at_eof() {
                    let escaped = self.at();
                    self.lexeme.push(escaped);
                    self.pos += 1;
                }
            }
            ch if ch == closing => {
                self.pos += 1;

                let classified = if self.mode == Mode::String {
                    classify_string(&self.lexeme)
                } else {
                    classify_rune(&self.lexeme)
                };

                self.emit_classified(classified);
            }
            ch => {
                self.lexeme.push(ch);
                self.pos += 1;
            }
        }
    }

    fn scan_symbol(&mut self, symbol: Symbol) {
        self.mode = Mode::Symbol;
        self.begin_lexeme();
        self.pos += symbol.width();
        self.emit(TokenKind::Symbol(symbol), self.lexeme_start, self.pos);
        self.mode = Mode::Default;
    }

    fn open_quoted(&mut self, mode: Mode) {
        self.begin_lexeme();
        self.mode = mode;
        self.pos += 1;
    }

    fn line_break(&mut self, width: usize) {
        self.flush();
        self.push_trivia(width);
        self.trivia.detach();
        self.mode = Mode::Indentation;
    }

    fn track_indentation(&mut self) {
        self.mode = Mode::Default;

        match self.indentation.measure(&self.source[self.pos..]) {
            LineIndentation::Blank => {}
            LineIndentation::Ambiguous { width, unit, run } => {
                if self.options.report_ambiguous_indentation {
                    self.report(
                        ErrorImpl::AmbiguousIndentation { width, unit },
                        Span::new(self.pos, self.pos + run),
                    );
                }
            }
            LineIndentation::Level { previous, current } => {
                let at = self.pos - self.trivia.pending();
                self.emit_indentation(previous, current, at);
            }
        }
    }

    fn emit_indentation(&mut self, previous: usize, current: usize, at: usize) {
        let direction = if current > previous {
            IndentDirection::Indent
        } else {
            IndentDirection::Dedent
        };

        for _ in 0..previous.abs_diff(current) {
            trace!(?direction, at, "indentation");
            self.tokens
                .push(MK_TOKEN!(TokenKind::Indentation(direction), at, at, 0));
        }
    }

    fn begin_lexeme(&mut self) {
        self.lexeme_start = self.pos;
        self.trivia.detach();
    }

    fn push_trivia(&mut self, count: usize) {
        self.trivia.push(&mut self.tokens, count);
        self.pos += count;
    }

    /// Classifies and emits the pending word lexeme, if any.
    fn flush(&mut self) {
        if !self.lexeme.is_empty() {
            let classified = classify_word(&self.lexeme);
            self.emit_classified(classified);
        }

        self.mode = Mode::Default;
    }

    fn emit_classified(&mut self, classified: Result<TokenKind, ErrorImpl>) {
        match classified {
            Ok(kind) => self.emit(kind, self.lexeme_start, self.pos),
            Err(error) => {
                // The leading trivia goes into the gap with the literal
                self.trivia.take_leading();
                self.report(error, Span::new(self.lexeme_start, self.pos));
            }
        }

        self.lexeme.clear();
        self.mode = Mode::Default;
    }

    fn emit(&mut self, kind: TokenKind, content_start: usize, content_end: usize) {
        let leading = self.trivia.take_leading();
        let token = MK_TOKEN!(kind, content_start - leading, content_end, leading);

        trace!(token = %token, "token");

        self.tokens.push(token);
        self.trivia.attach(self.tokens.len() - 1);
    }

    fn report(&mut self, error: ErrorImpl, span: Span) {
        let error = Error::new(error, span);
        debug!(%error, "lex diagnostic");
        self.errors.push(error);
    }

    fn finish(mut self) -> Lexed {
        let end_of_input = self.source.len();

        match self.mode {
            Mode::String | Mode::Rune => {
                let error = if self.mode == Mode::String {
                    ErrorImpl::UnterminatedString
                } else {
                    ErrorImpl::UnterminatedRune
                };

                self.trivia.take_leading();
                self.report(error, Span::new(self.lexeme_start, end_of_input));
                self.lexeme.clear();
            }
            Mode::Commentary | Mode::Indentation => {}
            Mode::Default | Mode::Identifier | Mode::Number | Mode::Symbol => self.flush(),
        }

        if !self.trivia.fold_into_last(&mut self.tokens, end_of_input) {
            trace!(pending = self.trivia.pending(), "unattributed trailing trivia");
        }

        let open = self.indentation.close_all();
        self.emit_indentation(open, 0, end_of_input);

        debug!(
            tokens = self.tokens.len(),
            errors = self.errors.len(),
            "lexing complete"
        );

        Lexed {
            tokens: self.tokens,
            errors: self.errors,
        }
    }
}

/// Lexes `source` into a token stream and its diagnostics.
pub fn tokenize(source: &str, options: LexerOptions) -> Lexed {
    Lexer::new(source, options).run()
}

/// Lexes `source` with default options, keeping only the tokens.
pub fn lex(source: &str) -> Vec<Token> {
    tokenize(source, LexerOptions::default()).tokens
}

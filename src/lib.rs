#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

pub use lexer::lexer::{lex, tokenize, Lexed, LexerOptions};

/// A half-open range of code-point offsets into the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Finds the line holding the code point at `position`.
///
/// Returns the 1-based line number, the line text (including its line
/// break) and the code-point column within that line.
pub fn get_line_at_position(source: &str, position: usize) -> Option<(usize, String, usize)> {
    let mut start = 0;

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let end = start + line.chars().count();

        if (start..end).contains(&position) {
            return Some((index + 1, line.to_string(), position - start));
        }

        start = end;
    }

    None
}

pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    /*
        Error: InvalidRune (A rune literal holds exactly one character ...)
        -> main.src
           |
        20 | val c = 'ab'
           | --------^
    */

    let position = error.get_span().start;
    let mut report = match error.get_tip() {
        ErrorTip::None => format!("{}: {}\n", error.get_severity(), error.get_error_name()),
        tip => format!("{}: {} ({})\n", error.get_severity(), error.get_error_name(), tip),
    };
    report.push_str(&format!("-> {}\n", file));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position) else {
        report.push_str(&format!("   at end of input ({})", error));
        return report;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    report.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    report.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    report.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));

    report
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ' || *c == '\t').count();

    (string.chars().skip(start).collect(), start)
}

#[cfg(test)]
mod tests {
    use crate::{
        errors::errors::{Error, ErrorImpl},
        Span,
    };

    const SOURCE: &str = "Hello, world!\n\nclass A\n  def ünï(): Int\n";

    #[test]
    fn test_get_line_at_position() {
        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(SOURCE, 21).unwrap();
        assert_eq!(line_number, 3);
        assert_eq!(line, "class A\n");
        assert_eq!(line_pos, 6);
    }

    #[test]
    fn test_get_line_counts_code_points() {
        // "ünï" is six bytes but three code points
        let (line_number, _, line_pos) = super::get_line_at_position(SOURCE, 32).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line_pos, 9);
    }

    #[test]
    fn test_get_line_past_end() {
        assert!(super::get_line_at_position(SOURCE, 500).is_none());
    }

    #[test]
    fn test_render_error_points_at_column() {
        let source = "val c = 'ab'\n";
        let error = Error::new(
            ErrorImpl::InvalidRune {
                payload: "ab".to_string(),
            },
            Span::new(8, 12),
        );

        let report = super::render_error(&error, source, "main.src");
        let lines = report.lines().collect::<Vec<_>>();

        assert!(lines[0].starts_with("error: InvalidRune"));
        assert_eq!(lines[1], "-> main.src");
        assert_eq!(lines[3], "1 | val c = 'ab'");
        assert_eq!(lines[4], "  | --------^");
    }
}

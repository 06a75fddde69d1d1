//! Indentation level bookkeeping.
//!
//! Width units: a tab counts as 2, a space as 1. The first indented line
//! seen while at level 0 fixes the unit width; deeper lines must be exact
//! multiples of it.

/// Outcome of measuring one line start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineIndentation {
    /// Only trivia on the line (or end of input): the level is untouched.
    Blank,
    /// The width does not fit the unit; the previous level is kept.
    /// `run` is the number of code points in the leading whitespace.
    Ambiguous { width: usize, unit: usize, run: usize },
    Level { previous: usize, current: usize },
}

#[derive(Debug, Default)]
pub struct IndentationTracker {
    current_level: usize,
    unit_width: usize,
}

impl IndentationTracker {
    pub fn new() -> Self {
        IndentationTracker::default()
    }

    pub fn level(&self) -> usize {
        self.current_level
    }

    pub fn unit_width(&self) -> usize {
        self.unit_width
    }

    /// Measures the line whose code points start at `line[0]`.
    pub fn measure(&mut self, line: &[char]) -> LineIndentation {
        let mut width = 0;
        let mut run = 0;

        // A lone carriage return is trivia of zero width
        while let Some(ch) = line.get(run) {
            match ch {
                ' ' => width += 1,
                '\t' => width += 2,
                '\r' if line.get(run + 1) != Some(&'\n') => {}
                _ => break,
            }
            run += 1;
        }

        let blank = matches!(line.get(run), None | Some('\n') | Some('\r') | Some('#'));

        if blank {
            return LineIndentation::Blank;
        }

        let previous = self.current_level;

        if width == 0 {
            self.current_level = 0;
            return LineIndentation::Level { previous, current: 0 };
        }

        if width % 2 != 0 {
            let unit = if self.current_level == 0 {
                2
            } else {
                self.unit_width
            };

            return LineIndentation::Ambiguous { width, unit, run };
        }

        if self.current_level == 0 {
            self.unit_width = width;
            self.current_level = 1;
        } else if width % self.unit_width != 0 {
            return LineIndentation::Ambiguous {
                width,
                unit: self.unit_width,
                run,
            };
        } else {
            self.current_level = width / self.unit_width;
        }

        LineIndentation::Level {
            previous,
            current: self.current_level,
        }
    }

    /// Returns to level 0, yielding the number of levels closed.
    pub fn close_all(&mut self) -> usize {
        std::mem::take(&mut self.current_level)
    }
}

#[cfg(test)]
mod tests {
    use super::{IndentationTracker, LineIndentation};

    fn chars(line: &str) -> Vec<char> {
        line.chars().collect()
    }

    #[test]
    fn first_indent_fixes_unit() {
        let mut tracker = IndentationTracker::new();

        assert_eq!(
            tracker.measure(&chars("    x")),
            LineIndentation::Level { previous: 0, current: 1 }
        );
        assert_eq!(tracker.unit_width(), 4);
        assert_eq!(
            tracker.measure(&chars("        x")),
            LineIndentation::Level { previous: 1, current: 2 }
        );
    }

    #[test]
    fn whitespace_only_lines_are_blank() {
        let mut tracker = IndentationTracker::new();
        tracker.measure(&chars("  x"));

        assert_eq!(tracker.measure(&chars("\n")), LineIndentation::Blank);
        assert_eq!(tracker.measure(&chars("     \n")), LineIndentation::Blank);
        assert_eq!(tracker.measure(&chars("\r\n")), LineIndentation::Blank);
        assert_eq!(tracker.measure(&chars("   # note")), LineIndentation::Blank);
        assert_eq!(tracker.measure(&chars("   ")), LineIndentation::Blank);
        assert_eq!(tracker.level(), 1);
    }

    #[test]
    fn lone_carriage_returns_are_blank_trivia() {
        let mut tracker = IndentationTracker::new();
        tracker.measure(&chars("  x"));

        assert_eq!(tracker.measure(&chars("  \r \n")), LineIndentation::Blank);
        assert_eq!(tracker.measure(&chars("\t\r#")), LineIndentation::Blank);
        assert_eq!(tracker.measure(&chars("\r")), LineIndentation::Blank);
        assert_eq!(tracker.measure(&chars(" \r \r\n")), LineIndentation::Blank);
        assert_eq!(tracker.level(), 1);

        assert_eq!(
            tracker.measure(&chars("  \r  x")),
            LineIndentation::Level { previous: 1, current: 2 }
        );
    }

    #[test]
    fn odd_width_at_level_zero_reports_default_unit() {
        let mut tracker = IndentationTracker::new();
        tracker.measure(&chars("    x"));
        tracker.measure(&chars("y"));

        assert_eq!(
            tracker.measure(&chars("   z")),
            LineIndentation::Ambiguous { width: 3, unit: 2, run: 3 }
        );
        assert_eq!(tracker.level(), 0);
    }

    #[test]
    fn tabs_count_two() {
        let mut tracker = IndentationTracker::new();

        assert_eq!(
            tracker.measure(&chars("\tx")),
            LineIndentation::Level { previous: 0, current: 1 }
        );
        assert_eq!(
            tracker.measure(&chars("\t  x")),
            LineIndentation::Level { previous: 1, current: 2 }
        );
    }

    #[test]
    fn odd_width_keeps_level() {
        let mut tracker = IndentationTracker::new();
        tracker.measure(&chars("  x"));

        assert_eq!(
            tracker.measure(&chars("   x")),
            LineIndentation::Ambiguous { width: 3, unit: 2, run: 3 }
        );
        assert_eq!(tracker.level(), 1);
    }

    #[test]
    fn width_off_unit_keeps_level() {
        let mut tracker = IndentationTracker::new();
        tracker.measure(&chars("    x"));

        assert_eq!(
            tracker.measure(&chars("      x")),
            LineIndentation::Ambiguous { width: 6, unit: 4, run: 6 }
        );
        assert_eq!(tracker.level(), 1);
    }

    #[test]
    fn unit_is_reestablished_at_level_zero() {
        let mut tracker = IndentationTracker::new();
        tracker.measure(&chars("    x"));
        tracker.measure(&chars("y"));

        assert_eq!(
            tracker.measure(&chars("  z")),
            LineIndentation::Level { previous: 0, current: 1 }
        );
        assert_eq!(tracker.unit_width(), 2);
    }

    #[test]
    fn close_all_resets() {
        let mut tracker = IndentationTracker::new();
        tracker.measure(&chars("  a"));
        tracker.measure(&chars("    b"));

        assert_eq!(tracker.close_all(), 2);
        assert_eq!(tracker.level(), 0);
    }
}

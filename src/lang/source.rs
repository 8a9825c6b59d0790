/// Supplies program text one trimmed line at a time and keeps the
/// number of the line most recently handed out.
#[derive(Debug)]
pub struct Source<'a> {
    lines: std::str::Lines<'a>,
    number: usize,
}

impl<'a> Source<'a> {
    pub fn new(s: &'a str) -> Source<'a> {
        Source {
            lines: s.lines(),
            number: 0,
        }
    }

    /// Returns `None` at end of input. The line number still advances so
    /// that a missing terminator is reported on the line after the last one.
    pub fn next_line(&mut self) -> Option<&'a str> {
        self.number += 1;
        self.lines.next().map(trim)
    }

    pub fn number(&self) -> usize {
        self.number
    }
}

pub fn trim(s: &str) -> &str {
    s.trim_matches(|c| c == ' ' || c == '\t')
}

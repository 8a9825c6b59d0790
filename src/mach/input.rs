use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Where `read` statements get their values from.
pub trait Input {
    /// Shows `prompt` and returns the next whitespace delimited token,
    /// or `None` at end of input.
    fn token(&mut self, prompt: &str, output: &mut dyn Write) -> io::Result<Option<String>>;
}

/// Tokens from any buffered reader. Extra tokens on a line are kept for
/// the following reads.
pub struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    pub fn new(reader: R) -> Tokens<R> {
        Tokens {
            reader,
            pending: VecDeque::new(),
        }
    }
}

impl<R: BufRead> Input for Tokens<R> {
    fn token(&mut self, prompt: &str, output: &mut dyn Write) -> io::Result<Option<String>> {
        write!(output, "{}", prompt)?;
        output.flush()?;
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(String::from));
        }
    }
}

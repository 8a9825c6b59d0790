use crate::mach::Input;
use linefeed::{DefaultTerminal, Interface, ReadResult, Terminal};
use std::collections::VecDeque;
use std::io::{self, Write};

/// Interactive `read` input with line editing and history.
///
/// Every `read` shows the prompt. When the token comes from a line typed
/// earlier, the prompt is written to the program output like `Tokens` does.
pub struct Console<T: Terminal = DefaultTerminal> {
    interface: Interface<T>,
    pending: VecDeque<String>,
}

impl Console {
    pub fn new() -> io::Result<Console> {
        Ok(Console {
            interface: Interface::new("recdef")?,
            pending: VecDeque::new(),
        })
    }
}

impl<T: Terminal> Console<T> {
    pub fn with_term(term: T) -> io::Result<Console<T>> {
        Ok(Console {
            interface: Interface::with_term("recdef", term)?,
            pending: VecDeque::new(),
        })
    }
}

impl<T: Terminal> Input for Console<T> {
    fn token(&mut self, prompt: &str, output: &mut dyn Write) -> io::Result<Option<String>> {
        if let Some(token) = self.pending.pop_front() {
            write!(output, "{}", prompt)?;
            output.flush()?;
            return Ok(Some(token));
        }
        output.flush()?;
        self.interface.set_prompt(prompt)?;
        loop {
            match self.interface.read_line()? {
                ReadResult::Input(line) => {
                    self.pending
                        .extend(line.split_whitespace().map(String::from));
                    if let Some(token) = self.pending.pop_front() {
                        self.interface.add_history_unique(line);
                        return Ok(Some(token));
                    }
                }
                ReadResult::Signal(_) | ReadResult::Eof => return Ok(None),
            }
        }
    }
}

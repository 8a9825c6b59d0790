use super::{Exec, Input};
use crate::error;
use crate::lang::{parse, Error};
use ansi_term::Style;
use std::io::Write;

type Result<T> = std::result::Result<T, Error>;

pub const SUCCESS: &str = "PROGRAM ENDED SUCCESSFULLY.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum State {
    #[default]
    Ready,
    Finished,
}

/// ## Program driver
///
/// One runtime runs one program, once. Any later attempt, whatever the
/// first outcome was, fails with `ALREADY RUN` without reading input.

#[derive(Debug, Default)]
pub struct Runtime {
    state: State,
}

impl Runtime {
    pub fn new() -> Runtime {
        Runtime::default()
    }

    pub fn is_finished(&self) -> bool {
        self.state == State::Finished
    }

    /// Parses and evaluates `source`. Nothing is written to `output`
    /// except what the program prints and the `read` prompts.
    pub fn execute(
        &mut self,
        source: &str,
        input: &mut dyn Input,
        output: &mut dyn Write,
    ) -> Result<()> {
        if self.is_finished() {
            return Err(error!(AlreadyRun));
        }
        self.state = State::Finished;
        let program = parse(source)?;
        let result = Exec::new(input, &mut *output).run(&program);
        output.flush()?;
        match &result {
            Ok(()) => tracing::debug!("program ended successfully"),
            Err(error) => tracing::debug!(%error, "program failed"),
        }
        result
    }

    /// Like `execute` followed by the terminal status line.
    pub fn run(&mut self, source: &str, input: &mut dyn Input, output: &mut dyn Write) -> Result<()> {
        self.run_styled(source, input, output, Style::new())
    }

    /// `run` with the diagnostic line painted in `error_style`.
    pub fn run_styled(
        &mut self,
        source: &str,
        input: &mut dyn Input,
        output: &mut dyn Write,
        error_style: Style,
    ) -> Result<()> {
        let result = self.execute(source, input, output);
        match &result {
            Ok(()) => writeln!(output, "{}", SUCCESS)?,
            Err(error) => writeln!(output, "{}", error_style.paint(format!("?{}", error)))?,
        }
        result
    }
}

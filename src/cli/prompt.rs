//! Line-based prompting
//!
//! Interactive flows read answers through a [`Prompter`] so they can be driven
//! from any reader in tests.

use std::io::{self, BufRead, Stdout, StdinLock, Write};

use crate::error::MoneyGrepResult;

/// Question/answer channel over a reader and a writer
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    /// Prompter over the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` and read one trimmed answer
    ///
    /// Returns `None` once the input is exhausted.
    pub fn ask(&mut self, prompt: &str) -> MoneyGrepResult<Option<String>> {
        write!(self.output, "{}: ", prompt)?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(answer.trim().to_string()))
    }

    /// Write text as is
    pub fn say(&mut self, text: &str) -> MoneyGrepResult<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// Write one line
    pub fn line(&mut self, text: &str) -> MoneyGrepResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
    }
}

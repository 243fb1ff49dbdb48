//! Line-based interactive prompts.
//!
//! Generic over the reader and writer so the import and delete flows can be
//! driven from a byte buffer in tests.

use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

pub(crate) struct Prompt<R, W> {
    input: R,
    output: W,
}

impl Prompt<StdinLock<'static>, Stdout> {
    pub(crate) fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub(crate) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Trimmed next line, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    /// Numbered single choice. Accepts the number or the label itself
    /// (case-insensitive) and asks again on anything else.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors or if input ends before a valid choice.
    pub(crate) fn select<'a, T: Display>(
        &mut self,
        message: &str,
        choices: &'a [T],
    ) -> anyhow::Result<&'a T> {
        writeln!(self.output, "{message}")?;
        for (i, choice) in choices.iter().enumerate() {
            writeln!(self.output, "  {}) {choice}", i + 1)?;
        }

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;
            let Some(answer) = self.read_line()? else {
                anyhow::bail!("input closed before a choice was made");
            };

            let by_number = answer
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| choices.get(i));
            let picked = by_number.or_else(|| {
                choices
                    .iter()
                    .find(|c| c.to_string().eq_ignore_ascii_case(&answer))
            });
            match picked {
                Some(choice) => return Ok(choice),
                None => writeln!(
                    self.output,
                    "Please enter a number between 1 and {}.",
                    choices.len()
                )?,
            }
        }
    }

    /// Yes/no question. Empty input or end of input picks `default`.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors.
    pub(crate) fn confirm(&mut self, message: &str, default: bool) -> anyhow::Result<bool> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        loop {
            write!(self.output, "{message} {hint} ")?;
            self.output.flush()?;
            let Some(answer) = self.read_line()? else {
                return Ok(default);
            };
            match answer.to_ascii_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "Please answer y or n.")?,
            }
        }
    }

    /// Free-text answer; blank answers print `empty_error` and ask again.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors or if input ends before a non-empty answer.
    pub(crate) fn input_non_empty(
        &mut self,
        message: &str,
        empty_error: &str,
    ) -> anyhow::Result<String> {
        loop {
            write!(self.output, "{message} ")?;
            self.output.flush()?;
            match self.read_line()? {
                Some(answer) if !answer.is_empty() => return Ok(answer),
                Some(_) => writeln!(self.output, "{empty_error}")?,
                None => anyhow::bail!("input closed before an answer was given"),
            }
        }
    }
}

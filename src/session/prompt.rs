//! Interactive prompts.
//!
//! The session talks to the user only through the [`Prompter`] trait. The
//! terminal implementation is line based and works over any reader/writer
//! pair, which lets tests drive a whole session from a string.

use std::io::{BufRead, Write};
use thiserror::Error;

/// Errors raised by a prompter.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Reading from or writing to the terminal failed
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The input stream reached end-of-file
    #[error("Input stream closed")]
    InputClosed,
}

/// Question/answer primitives used by the session.
pub trait Prompter {
    /// Ask a yes/no question. An empty answer picks `default`.
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, PromptError>;

    /// Ask for free text. An empty answer picks `default` when one is given.
    fn input(&mut self, message: &str, default: Option<&str>) -> Result<String, PromptError>;

    /// Ask the user to pick one of `choices`; returns its index. An empty
    /// answer picks the first choice.
    fn select(&mut self, message: &str, choices: &[&str]) -> Result<usize, PromptError>;

    /// Print an informational line.
    fn say(&mut self, message: &str) -> Result<(), PromptError>;
}

/// Line-oriented prompter over a reader and a writer (stdin/stdout in the
/// binary).
pub struct TerminalPrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Give back the writer, e.g. to inspect what a test session printed.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Read one line without its line ending.
    fn read_answer(&mut self) -> Result<String, PromptError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(PromptError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        write!(self.writer, "? {} ", question)?;
        self.writer.flush()?;
        self.read_answer()
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, PromptError> {
        let hint = if default { "(Y/n)" } else { "(y/N)" };
        loop {
            let answer = self.ask(&format!("{} {}", message, hint))?;
            match answer.trim().to_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.writer, ">> Please answer y or n.")?,
            }
        }
    }

    fn input(&mut self, message: &str, default: Option<&str>) -> Result<String, PromptError> {
        let question = match default {
            Some(value) => format!("{} ({})", message, value),
            None => message.to_string(),
        };
        let answer = self.ask(&question)?;

        match default {
            Some(value) if answer.trim().is_empty() => Ok(value.to_string()),
            _ => Ok(answer),
        }
    }

    fn select(&mut self, message: &str, choices: &[&str]) -> Result<usize, PromptError> {
        if choices.is_empty() {
            return Err(PromptError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "select called without choices",
            )));
        }

        writeln!(self.writer, "? {}", message)?;
        for (index, choice) in choices.iter().enumerate() {
            writeln!(self.writer, "  {}) {}", index + 1, choice)?;
        }

        loop {
            let answer = self.ask(&format!("Answer (1-{}):", choices.len()))?;
            let answer = answer.trim();

            if answer.is_empty() {
                return Ok(0);
            }
            if let Ok(number) = answer.parse::<usize>() {
                if (1..=choices.len()).contains(&number) {
                    return Ok(number - 1);
                }
            }
            if let Some(index) = choices.iter().position(|c| c.eq_ignore_ascii_case(answer)) {
                return Ok(index);
            }

            writeln!(
                self.writer,
                ">> Please enter a number between 1 and {}.",
                choices.len()
            )?;
        }
    }

    fn say(&mut self, message: &str) -> Result<(), PromptError> {
        writeln!(self.writer, "{}", message)?;
        self.writer.flush()?;
        Ok(())
    }
}

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;
use std::str::FromStr;

use colored::*;
use thiserror::Error;
use tracing::warn;

use crate::terminal::colors;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("input stream closed")]
    Closed,
    #[error("failed to access the console: {0}")]
    Io(#[from] io::Error),
}

/// Line-based question and answer over any reader/writer pair.
pub struct Prompt<R, W> {
    reader: R,
    writer: W,
}

/// The menu loop and the interactive clinic read from the same console.
pub type SharedPrompt<R, W> = Rc<RefCell<Prompt<R, W>>>;

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn shared(self) -> SharedPrompt<R, W> {
        Rc::new(RefCell::new(self))
    }

    #[cfg(test)]
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Writes `label: ` and returns the next line without its line ending.
    ///
    /// Lines that are not valid UTF-8 are discarded and the question is asked again.
    pub fn ask(&mut self, label: &str) -> Result<String, InputError> {
        loop {
            write!(
                self.writer,
                "{}{} ",
                label.color(colors::PRIMARY),
                ":".color(colors::SEPARATOR)
            )?;
            self.writer.flush()?;

            let mut bytes = Vec::new();
            if self.reader.read_until(b'\n', &mut bytes)? == 0 {
                return Err(InputError::Closed);
            }

            match String::from_utf8(bytes) {
                Ok(line) => return Ok(line.trim_end_matches(['\r', '\n']).to_string()),
                Err(_) => warn!("The input was not valid text."),
            }
        }
    }

    /// Asks until the answer is not blank.
    pub fn ask_non_empty(&mut self, label: &str) -> Result<String, InputError> {
        loop {
            let answer = self.ask(label)?;
            let trimmed = answer.trim();
            if !trimmed.is_empty() {
                return Ok(trimmed.to_string());
            }
            warn!("A value is required.");
        }
    }

    /// Asks until the answer parses as `T`.
    pub fn ask_parsed<T: FromStr>(&mut self, label: &str) -> Result<T, InputError> {
        loop {
            let answer = self.ask(label)?;
            match answer.trim().parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => warn!("'{}' is not a valid number.", answer.trim()),
            }
        }
    }
}

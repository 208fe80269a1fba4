//! Reading body parameters interactively
//!
//! [`InputSource`] is the narrow seam between the simulation and whatever
//! supplies numbers. [`ConsoleInput`] prompts on a writer and reads answers
//! line by line from a reader (stdin/stdout in `main`, in-memory buffers in
//! tests).

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::configuration::config::BodyConfig;
use crate::simulation::error::InvalidArgument;

pub trait InputSource {
    /// Ask for one number
    fn read_number(&mut self, prompt: &str) -> Result<f64>;

    /// Ask for the three parameters of one body, in the order
    /// initial position, initial velocity, acceleration
    fn read_body(&mut self, title: &str) -> Result<BodyConfig> {
        self.announce(title)?;
        let x0 = self.read_number("Initial position (m): ")?;
        let v0 = self.read_number("Initial velocity (m/s): ")?;
        let a = self.read_number("Acceleration (m/s²): ")?;
        Ok(BodyConfig::new(x0, v0, a).labelled(title))
    }

    /// Show a heading before a group of prompts
    fn announce(&mut self, _title: &str) -> Result<()> {
        Ok(())
    }
}

pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl<R: BufRead, W: Write> InputSource for ConsoleInput<R, W> {
    fn read_number(&mut self, prompt: &str) -> Result<f64> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        let read = self.reader.read_line(&mut line)?;
        if read == 0 {
            // end of input
            return Err(InvalidArgument::MalformedNumber { input: String::new() }.into());
        }

        Ok(parse_number(&line)?)
    }

    fn announce(&mut self, title: &str) -> Result<()> {
        writeln!(self.writer, "\n{title}:")?;
        Ok(())
    }
}

/// Parse a trimmed decimal number. `inf`/`nan` spellings are rejected
pub fn parse_number(text: &str) -> Result<f64, InvalidArgument> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InvalidArgument::MalformedNumber {
            input: trimmed.to_string(),
        }),
    }
}

//! # Campus Prompt Utilities (`common::ui::prompt`)
//!
//! File: cli/src/common/ui/prompt.rs
//!
//! ## Overview
//!
//! Line-oriented interactive input shared by the `chat`, `calc` and `grades`
//! command groups. A `Prompter` wraps any `BufRead` + `Write` pair so the
//! interactive loops can be driven from stdin/stdout in the binary and from
//! in-memory buffers in unit tests.
//!
//! The numeric helpers re-prompt until they get a valid answer. The only way
//! out of a retry loop is end of input, which surfaces as
//! `CampusError::InputClosed`.
//!
use crate::core::error::{CampusError, Result};
use anyhow::Context;
use std::fmt::Display;
use std::io::{BufRead, Write};
use tracing::{debug, trace};

/// Interactive prompt bound to an input reader and an output writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes one line of output.
    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{}", line).context("Failed to write to output")?;
        Ok(())
    }

    /// Prints `prompt` without a newline and reads one line.
    ///
    /// The trailing line terminator is removed, everything else is returned
    /// as typed.
    ///
    /// # Arguments
    ///
    /// * `prompt` - Text written (and flushed) before reading.
    ///
    /// # Returns
    ///
    /// * `Result<Option<String>>` - The line, or `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns an `Err` if writing the prompt or reading the input fails.
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush output")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            debug!("Input closed at prompt {:?}", prompt);
            return Ok(None);
        }
        let line = line.trim_end_matches(['\n', '\r']).to_string();
        trace!("Read line {:?}", line);
        Ok(Some(line))
    }

    /// Like `read_line`, but end of input is an error.
    ///
    /// # Arguments
    ///
    /// * `prompt` - Text written before reading.
    ///
    /// # Returns
    ///
    /// * `Result<String>` - The line as typed, without its terminator.
    ///
    /// # Errors
    ///
    /// Returns `CampusError::InputClosed` at end of input, or an I/O error
    /// from `read_line`.
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        match self.read_line(prompt)? {
            Some(line) => Ok(line),
            None => Err(CampusError::InputClosed {
                prompt: prompt.to_string(),
            }
            .into()),
        }
    }

    /// Asks until the answer parses as a finite number, printing
    /// "Please enter a valid number!" after each rejected answer.
    ///
    /// # Arguments
    ///
    /// * `prompt` - Text written before every attempt.
    ///
    /// # Returns
    ///
    /// * `Result<f64>` - The first valid answer.
    ///
    /// # Errors
    ///
    /// Returns `CampusError::InputClosed` if input ends before a valid answer.
    pub fn ask_number(&mut self, prompt: &str) -> Result<f64> {
        loop {
            let answer = self.ask(prompt)?;
            match parse_number(&answer) {
                Some(value) => return Ok(value),
                None => self.say("Please enter a valid number!")?,
            }
        }
    }

    /// Asks until the answer parses as an integer. Decimals are rejected.
    ///
    /// # Arguments
    ///
    /// * `prompt` - Text written before every attempt.
    ///
    /// # Returns
    ///
    /// * `Result<i64>` - The first valid answer.
    ///
    /// # Errors
    ///
    /// Returns `CampusError::InputClosed` if input ends before a valid answer.
    pub fn ask_integer(&mut self, prompt: &str) -> Result<i64> {
        loop {
            let answer = self.ask(prompt)?;
            match answer.trim().parse::<i64>() {
                Ok(value) => return Ok(value),
                Err(_) => self.say("Please enter a valid integer!")?,
            }
        }
    }

    /// Asks until the answer is a number within `min..=max`.
    ///
    /// # Arguments
    ///
    /// * `prompt` - Text written before every attempt.
    /// * `min` / `max` - Inclusive bounds.
    /// * `out_of_range` - Line printed when a number falls outside the bounds.
    ///
    /// # Returns
    ///
    /// * `Result<f64>` - The first answer inside the bounds.
    ///
    /// # Errors
    ///
    /// Returns `CampusError::InputClosed` if input ends before a valid answer.
    pub fn ask_number_in_range(
        &mut self,
        prompt: &str,
        min: f64,
        max: f64,
        out_of_range: &str,
    ) -> Result<f64> {
        loop {
            let value = self.ask_number(prompt)?;
            if (min..=max).contains(&value) {
                return Ok(value);
            }
            self.say(out_of_range)?;
        }
    }

    /// Asks until the answer is a non-empty, whitespace-separated list of numbers.
    ///
    /// # Arguments
    ///
    /// * `prompt` - Text written before every attempt.
    ///
    /// # Returns
    ///
    /// * `Result<Vec<f64>>` - The numbers in the order typed.
    ///
    /// # Errors
    ///
    /// Returns `CampusError::InputClosed` if input ends before a valid answer.
    pub fn ask_number_list(&mut self, prompt: &str) -> Result<Vec<f64>> {
        loop {
            let answer = self.ask(prompt)?;
            let parsed: Option<Vec<f64>> = answer.split_whitespace().map(parse_number).collect();
            match parsed {
                Some(numbers) if numbers.is_empty() => {
                    self.say("Please enter at least one number!")?
                }
                Some(numbers) => return Ok(numbers),
                None => self.say("Please enter valid numbers separated by spaces!")?,
            }
        }
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

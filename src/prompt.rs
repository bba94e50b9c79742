//! Interactive collection of a [`ReplaceRequest`].
//!
//! Used when the command line does not supply every value. Generic over the
//! reader and writer so it can be driven without a terminal.

use crate::digits::{DecimalInt, ParseSideError, ReplaceRequest, Side};
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("no input for {field}")]
    EndOfInput { field: &'static str },

    #[error("invalid {field} '{input}': {message}")]
    Invalid {
        field: &'static str,
        input: String,
        message: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Ask for number, position, digit and side, in that order.
    ///
    /// An empty side answer means [`Side::Right`].
    pub fn read_request(&mut self) -> Result<ReplaceRequest, PromptError> {
        writeln!(self.output, "Interactive mode (press Enter to accept):")?;
        let number: DecimalInt = self.ask_parsed("Number: ", "number")?;
        let n: DecimalInt = self.ask_parsed("n (1-based): ", "n")?;
        let digit: DecimalInt = self.ask_parsed("Replacement digit (0-9): ", "digit")?;

        let side_answer = self.ask("Side (left/right) [right]: ", "side")?;
        let side = if side_answer.is_empty() {
            Side::default()
        } else {
            side_answer.parse().map_err(|err: ParseSideError| PromptError::Invalid {
                field: "side",
                input: side_answer.clone(),
                message: err.to_string(),
            })?
        };

        Ok(ReplaceRequest {
            number,
            n: n.saturating_i64(),
            digit: digit.saturating_i64(),
            side,
        })
    }

    fn ask(&mut self, question: &str, field: &'static str) -> Result<String, PromptError> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::EndOfInput { field });
        }
        Ok(line.trim().to_string())
    }

    fn ask_parsed<T>(&mut self, question: &str, field: &'static str) -> Result<T, PromptError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let answer = self.ask(question, field)?;
        answer.parse().map_err(|err: T::Err| PromptError::Invalid {
            field,
            message: err.to_string(),
            input: answer,
        })
    }
}

use std::{
    fmt::Display,
    io::{BufRead, Write},
};

use bvh_motion_core::{BvhError, Result};

/// Line-oriented question and answer over any reader/writer pair.
///
/// The binary wires this to stdin/stdout; tests feed it a `Cursor`.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

/// What to do when the requested output file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExistingFile {
    Overwrite,
    Modify,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes one line of text.
    pub fn say(&mut self, message: impl Display) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Prints `question` without a newline and returns the trimmed answer.
    /// Running out of input is an error, never an empty answer.
    pub fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(BvhError::InvalidInput("unexpected end of input".into()));
        }
        Ok(line.trim().to_string())
    }

    /// Asks for a signed integer; `None` when the answer is not one.
    pub fn ask_number(&mut self, question: &str) -> Result<Option<i64>> {
        Ok(self.ask(question)?.parse().ok())
    }

    /// Keeps asking until exactly three numbers are entered.
    pub fn read_three_floats(&mut self, label: &str) -> Result<[f64; 3]> {
        loop {
            let answer = self.ask(&format!(
                "Enter 3 floats for {label}, separated by spaces: "
            ))?;
            match parse_three_floats(&answer) {
                Some(values) => return Ok(values),
                None => self.say("Invalid input. Please enter exactly 3 numeric values.")?,
            }
        }
    }

    pub fn choose_existing(&mut self, name: &str) -> Result<ExistingFile> {
        self.say(format_args!("File '{name}' already exists."))?;
        let answer = self.ask("Overwrite (O) or Modify (M) this file? [O/M]: ")?;
        if answer.eq_ignore_ascii_case("m") {
            Ok(ExistingFile::Modify)
        } else {
            Ok(ExistingFile::Overwrite)
        }
    }
}

/// Parses whitespace separated text holding exactly three floats.
pub fn parse_three_floats(text: &str) -> Option<[f64; 3]> {
    let values: Vec<f64> = text
        .split_whitespace()
        .map(str::parse::<f64>)
        .collect::<std::result::Result<_, _>>()
        .ok()?;
    values.try_into().ok()
}

// flexpand/src/utils/prompt.rs
//! Terminal confirmation prompt.
//!
//! Accepts exactly `y`/`Y` or `n`/`N` and asks again on anything else. There is
//! no default answer and no timeout. Closed input is reported as an error
//! instead of looping.

use flexpand_core::{ConfirmationGate, FlexpandError};
use std::io::{self, BufRead, Write};

pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompt<io::StdinLock<'static>, io::Stderr> {
    /// Reads answers from stdin and writes prompts to stderr, leaving stdout
    /// for the plan itself.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> ConfirmationGate for TerminalPrompt<R, W> {
    fn confirm(&mut self, prompt: &str) -> Result<bool, FlexpandError> {
        loop {
            write!(self.output, "{} Are you sure you want to do it? [y/n] ", prompt)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(FlexpandError::Io(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before a y/n answer was given",
                )));
            }

            match line.trim_end_matches(['\r', '\n']) {
                "y" | "Y" => return Ok(true),
                "n" | "N" => return Ok(false),
                _ => writeln!(self.output, "Unexpected input. Only y or n are accepted, sorry.")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ask(answers: &str) -> (Result<bool, FlexpandError>, String) {
        let mut output = Vec::new();
        let result = TerminalPrompt::new(Cursor::new(answers.as_bytes()), &mut output)
            .confirm("Overwrite 1 source file.");
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn accepts_both_cases() {
        assert!(ask("y\n").0.unwrap());
        assert!(ask("Y\n").0.unwrap());
        assert!(!ask("n\n").0.unwrap());
        assert!(!ask("N\r\n").0.unwrap());
    }

    #[test]
    fn reprompts_until_valid() {
        let (result, output) = ask("yes\n\n y\nmaybe\nY\n");
        assert!(result.unwrap());
        assert_eq!(output.matches("Unexpected input").count(), 4);
        assert_eq!(output.matches("[y/n]").count(), 5);
    }

    #[test]
    fn closed_input_is_an_error() {
        let (result, _) = ask("what\n");
        assert!(matches!(result, Err(FlexpandError::Io(_))));
    }
}

//! The confirmation gate: a caller-supplied yes/no decision consulted before
//! any source file would be overwritten by its own output.
//!
//! Keeping the prompt behind a trait lets the Matcher stay free of terminal
//! I/O. Tests pass closures; the CLI passes a terminal prompt.

use crate::errors::FlexpandError;

pub trait ConfirmationGate {
    /// Asks the user to confirm `prompt`. Returns `Ok(true)` only on an
    /// explicit affirmative answer.
    fn confirm(&mut self, prompt: &str) -> Result<bool, FlexpandError>;
}

impl<F> ConfirmationGate for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> Result<bool, FlexpandError> {
        Ok(self(prompt))
    }
}

/// A gate that declines every request. Useful for non-interactive runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysDecline;

impl ConfirmationGate for AlwaysDecline {
    fn confirm(&mut self, _prompt: &str) -> Result<bool, FlexpandError> {
        Ok(false)
    }
}

//! Interactive input for required external keys.
//!
//! On a terminal the value is read with a non-echoing password prompt; when
//! stdin is piped (tests, scripts) a plain line is read instead. Trimming
//! and the empty-input failure live in the reconciler, so both paths behave
//! identically.

use std::io::{self, BufRead, IsTerminal};

use dialoguer::Password;

use crate::core::reconcile::Prompt;
use crate::error::Result;

pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn read(&mut self, key: &str) -> Result<String> {
        if io::stdin().is_terminal() {
            let value = Password::new()
                .with_prompt(format!("Enter {}", key))
                .allow_empty_password(true)
                .interact()?;
            Ok(value)
        } else {
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            Ok(line)
        }
    }
}

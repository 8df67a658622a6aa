//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (console handles NO_COLOR and non-TTY detection):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: paths, keys, hints
//! - Bold: headers

use console::style;
use std::fmt::Display;

/// Print a success message with checkmark (green).
///
/// Example: `✓ .env written`
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green(), msg);
}

/// Print an error message to stderr (red).
///
/// Example: `✗ no docker compose found`
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red(), msg);
}

/// Print a warning message (yellow).
pub fn warn(msg: &str) {
    println!("{} {}", style("⚠").yellow(), msg);
}

/// Print a hint message (cyan).
///
/// Example: `→ install docker with the compose plugin`
pub fn hint(msg: &str) {
    println!("{} {}", style("→").cyan(), style(msg).cyan());
}

/// Print a bold section header.
pub fn section(title: &str) {
    println!("{}", style(title).bold());
}

/// Print a key-value pair (label dimmed).
///
/// Example: `  backend:   macOS Keychain`
pub fn kv(label: &str, value: impl Display) {
    println!("  {:<12}{}", style(format!("{}:", label)).dim(), value);
}

/// Style a path or file name for embedding in a message.
pub fn path(p: &str) -> String {
    style(p).cyan().to_string()
}

/// Style a key name for embedding in a message.
pub fn key(k: &str) -> String {
    style(k).cyan().to_string()
}

//! Shared CLI output helpers.
//!
//! Color scheme (console handles NO_COLOR and non-tty detection):
//! - Green: success, checkmarks
//! - Red: errors
//! - Cyan: hints

use console::style;

/// Print a success message with checkmark (green).
///
/// Example: `✓ encrypted 'secrets.prod.yml' to 'secrets.prod.yml.encrypted'`
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green(), msg);
}

/// Print an error message to stderr (red).
///
/// Example: `✗ couldn't find the secrets file for stage 'staging'`
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red(), msg);
}

/// Print a hint message (cyan).
///
/// Example: `→ check that the password matches the one used to encrypt`
pub fn hint(msg: &str) {
    println!("{} {}", style("→").cyan(), style(msg).cyan());
}

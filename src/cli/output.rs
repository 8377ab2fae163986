use std::fmt;

use colored::Colorize;

/// Print an informational message.
pub fn info(message: impl fmt::Display) {
    println!("{}", message);
}

/// Print a success message.
pub fn success(message: impl fmt::Display) {
    println!("{}", format!("✔ {}", message).green());
}

/// Print a warning message. Warnings are recoverable; the menu loop keeps
/// running after one.
pub fn warning(message: impl fmt::Display) {
    println!("{}", format!("⚠ {}", message).yellow());
}

/// Print an error message to stderr.
pub fn error(message: impl fmt::Display) {
    eprintln!("{}", format!("✖ {}", message).red());
}

/// Print a section header.
pub fn section(title: impl fmt::Display) {
    println!("\n{}", format!("=== {} ===", title).bold());
}

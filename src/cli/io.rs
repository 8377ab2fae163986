use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use crate::cli::CliError;
use crate::currency;

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(
    theme: &ColorfulTheme,
    prompt: &str,
    default: bool,
) -> Result<bool, CliError> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CliError::from)
}

/// Prompt the user for free-form text input.
pub fn prompt_text(theme: &ColorfulTheme, prompt: &str) -> Result<String, CliError> {
    Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(CliError::from)
}

/// Prompt for a non-negative amount. Invalid input re-prompts instead of
/// aborting the menu loop.
pub fn prompt_amount(theme: &ColorfulTheme, prompt: &str) -> Result<f64, CliError> {
    let raw = Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(|input: &String| currency::parse_amount(input).map(|_| ()))
        .interact_text()?;
    // The validator already accepted this input.
    currency::parse_amount(&raw).map_err(|_| CliError::InvalidNumber(raw))
}

/// Prompt for a 1-based transaction position as displayed in the history
/// table. Non-numeric input re-prompts.
pub fn prompt_position(theme: &ColorfulTheme, prompt: &str) -> Result<usize, CliError> {
    let raw = Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(|input: &String| match input.trim().parse::<usize>() {
            Ok(value) if value >= 1 => Ok(()),
            _ => Err("enter a transaction number from the list"),
        })
        .interact_text()?;
    raw.trim()
        .parse::<usize>()
        .map_err(|_| CliError::InvalidNumber(raw))
}

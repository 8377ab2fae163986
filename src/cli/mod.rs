//! Menu loop, command dispatch, and prompt helpers.
//!
//! The ledger core never talks to the terminal; everything interactive lives
//! here. Two modes share the same handlers: an interactive dialoguer menu,
//! and a script mode that reads newline-delimited commands from stdin
//! (enabled with the `MONEYLOG_SCRIPT` environment variable).

pub mod commands;
pub mod io;
pub mod output;
pub mod table;

use std::env;
use std::io::BufRead;

use dialoguer::{theme::ColorfulTheme, Select};
use thiserror::Error;

use crate::{
    config,
    core::LedgerManager,
    currency,
    errors::LedgerError,
    ledger::WipeConfirmation,
    storage::JsonStorage,
};

const SCRIPT_ENV: &str = "MONEYLOG_SCRIPT";

const MENU_ITEMS: [&str; 7] = [
    "Add income",
    "Add expense",
    "List transactions",
    "Show balance",
    "Delete a transaction",
    "Delete all transactions",
    "Exit",
];

const SCRIPT_COMMANDS: [&str; 8] = [
    "income", "expense", "list", "balance", "delete", "clear", "help", "exit",
];

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("`{0}` is not a valid number")]
    InvalidNumber(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopControl {
    Continue,
    Exit,
}

/// Loads the ledger from the configured store and runs the menu until exit.
/// A present-but-unparsable store fails here, before any menu is shown.
pub fn run_cli() -> Result<(), CliError> {
    let mode = if env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let storage = JsonStorage::new(config::store_file());
    let mut manager = LedgerManager::open(Box::new(storage))?;

    match mode {
        CliMode::Interactive => run_interactive(&mut manager),
        CliMode::Script => run_script(&mut manager),
    }
}

fn run_interactive(manager: &mut LedgerManager) -> Result<(), CliError> {
    let theme = ColorfulTheme::default();
    output::section("Personal Finance Ledger");

    loop {
        let selection = Select::with_theme(&theme)
            .with_prompt("Menu")
            .items(&MENU_ITEMS)
            .default(0)
            .interact()?;

        match selection {
            0 => {
                let amount = io::prompt_amount(&theme, "Income amount")?;
                let description = io::prompt_text(&theme, "Description")?;
                commands::record_income(manager, amount, &description)?;
            }
            1 => {
                let amount = io::prompt_amount(&theme, "Expense amount")?;
                let description = io::prompt_text(&theme, "Description")?;
                commands::record_expense(manager, amount, &description)?;
            }
            2 => commands::show_history(manager),
            3 => commands::show_balance(manager),
            4 => {
                commands::show_history(manager);
                if manager.transaction_count() > 0 {
                    let position = io::prompt_position(&theme, "Transaction number to delete")?;
                    commands::delete_at_position(manager, position)?;
                }
            }
            5 => {
                let confirmed =
                    io::confirm_action(&theme, "Delete all transactions?", false)?;
                commands::delete_all(manager, WipeConfirmation::from_answer(confirmed))?;
            }
            _ => {
                output::info("Thanks for using moneylog.");
                break;
            }
        }
    }

    Ok(())
}

fn run_script(manager: &mut LedgerManager) -> Result<(), CliError> {
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match handle_line(manager, &line)? {
            LoopControl::Continue => {}
            LoopControl::Exit => break,
        }
    }
    Ok(())
}

fn handle_line(manager: &mut LedgerManager, line: &str) -> Result<LoopControl, CliError> {
    let tokens = match shell_words::split(line) {
        Ok(tokens) => tokens,
        Err(err) => {
            output::warning(format!("Could not parse command: {}", err));
            return Ok(LoopControl::Continue);
        }
    };
    if tokens.is_empty() {
        return Ok(LoopControl::Continue);
    }

    let command = tokens[0].to_lowercase();
    let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();

    match command.as_str() {
        "income" => script_add(manager, &command, &args, true)?,
        "expense" => script_add(manager, &command, &args, false)?,
        "list" => commands::show_history(manager),
        "balance" => commands::show_balance(manager),
        "delete" => script_delete(manager, &args)?,
        "clear" => {
            if args.first() == Some(&"yes") {
                commands::delete_all(manager, WipeConfirmation::Confirmed)?;
            } else {
                output::info("Deletion cancelled. Run `clear yes` to confirm.");
            }
        }
        "help" => print_script_help(),
        "exit" | "quit" => {
            output::info("Thanks for using moneylog.");
            return Ok(LoopControl::Exit);
        }
        other => {
            output::warning(format!("Unknown command `{}`.", other));
            if let Some(candidate) = suggest_command(other) {
                output::info(format!("Did you mean `{}`?", candidate));
            }
        }
    }

    Ok(LoopControl::Continue)
}

fn script_add(
    manager: &mut LedgerManager,
    command: &str,
    args: &[&str],
    is_income: bool,
) -> Result<(), CliError> {
    let Some(raw_amount) = args.first() else {
        output::warning(format!("Usage: {} <amount> <description>", command));
        return Ok(());
    };
    let amount = match currency::parse_amount(raw_amount) {
        Ok(amount) => amount,
        Err(err) => {
            output::warning(err);
            return Ok(());
        }
    };
    let description = args[1..].join(" ");
    if is_income {
        commands::record_income(manager, amount, &description)
    } else {
        commands::record_expense(manager, amount, &description)
    }
}

fn script_delete(manager: &mut LedgerManager, args: &[&str]) -> Result<(), CliError> {
    let Some(raw) = args.first() else {
        output::warning("Usage: delete <transaction number>");
        return Ok(());
    };
    match raw.parse::<usize>() {
        Ok(position) => commands::delete_at_position(manager, position),
        Err(_) => {
            output::warning(format!("`{}` is not a transaction number.", raw));
            Ok(())
        }
    }
}

fn print_script_help() {
    output::section("Commands");
    output::info("income <amount> <description>   record an income entry");
    output::info("expense <amount> <description>  record an expense entry");
    output::info("list                            show the transaction history");
    output::info("balance                         show the current balance");
    output::info("delete <no>                     delete the numbered transaction");
    output::info("clear yes                       delete all transactions");
    output::info("exit                            leave the shell");
}

fn suggest_command(input: &str) -> Option<&'static str> {
    SCRIPT_COMMANDS
        .iter()
        .copied()
        .min_by_key(|candidate| strsim::levenshtein(input, candidate))
        .filter(|candidate| strsim::levenshtein(input, candidate) <= 2)
}

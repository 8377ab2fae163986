use crate::{
    cli::output,
    cli::table::{Alignment, Table, TableColumn},
    cli::CliError,
    core::LedgerManager,
    currency::format_amount,
    errors::LedgerError,
    ledger::WipeConfirmation,
};

pub fn record_income(
    manager: &mut LedgerManager,
    amount: f64,
    description: &str,
) -> Result<(), CliError> {
    manager.add_income(amount, description)?;
    output::success(format!("Recorded income of {}.", format_amount(amount)));
    Ok(())
}

pub fn record_expense(
    manager: &mut LedgerManager,
    amount: f64,
    description: &str,
) -> Result<(), CliError> {
    manager.add_expense(amount, description)?;
    output::success(format!("Recorded expense of {}.", format_amount(amount)));
    Ok(())
}

/// Renders the history table, or a distinct message when the ledger is empty.
pub fn show_history(manager: &LedgerManager) {
    if manager.transaction_count() == 0 {
        output::info("No transactions recorded.");
        return;
    }
    let mut table = Table::new(vec![
        TableColumn::new("No", Alignment::Right),
        TableColumn::new("Type", Alignment::Left),
        TableColumn::new("Amount", Alignment::Right),
        TableColumn::new("Description", Alignment::Left),
    ]);
    for (index, txn) in manager.transactions() {
        table.push_row(vec![
            (index + 1).to_string(),
            txn.kind.to_string(),
            format_amount(txn.amount),
            txn.description.clone(),
        ]);
    }
    output::section("Transaction History");
    output::info(table.render());
}

pub fn show_balance(manager: &LedgerManager) {
    output::info(format!(
        "Current balance: {}",
        format_amount(manager.balance())
    ));
}

/// Deletes by the 1-based position shown in the history table. An unknown
/// position is reported and the ledger stays untouched.
pub fn delete_at_position(manager: &mut LedgerManager, position: usize) -> Result<(), CliError> {
    if position == 0 {
        output::warning("Transaction numbers start at 1.");
        return Ok(());
    }
    match manager.delete_at(position - 1) {
        Ok(removed) => {
            output::success(format!(
                "Deleted {} of {}.",
                removed.kind,
                format_amount(removed.amount)
            ));
            Ok(())
        }
        Err(LedgerError::InvalidIndex { .. }) => {
            output::warning(format!("No transaction number {}.", position));
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

pub fn delete_all(
    manager: &mut LedgerManager,
    confirmation: WipeConfirmation,
) -> Result<(), CliError> {
    if manager.delete_all(confirmation)? {
        output::success("All transactions deleted.");
    } else {
        output::info("Deletion cancelled.");
    }
    Ok(())
}

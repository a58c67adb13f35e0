//! Expense CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_amount, format_expense_list};
use crate::error::TrackerResult;
use crate::services::ExpenseService;
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense
    Add {
        /// Owner of the expense
        username: String,

        description: String,

        /// Positive amount (e.g., 45.50)
        amount: f64,

        /// Category label (e.g., Food)
        category: String,
    },

    /// List a user's expenses
    List {
        username: String,
    },

    /// Delete an expense by ID
    Delete {
        /// Expense ID (full UUID or short form shown by `list`)
        id: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> TrackerResult<()> {
    let service = ExpenseService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            username,
            description,
            amount,
            category,
        } => {
            let expense = service.add(&username, &description, amount, &category)?;
            println!(
                "Added expense {}: {} ({}) {}",
                expense.id,
                expense.description,
                expense.category,
                format_amount(expense.amount, symbol)
            );
        }

        ExpenseCommands::List { username } => {
            let expenses = service.list(&username)?;
            print!("{}", format_expense_list(&expenses, symbol));
        }

        ExpenseCommands::Delete { id } => {
            let expense = service.delete(&id)?;
            println!(
                "Deleted expense {}: {} {}",
                expense.id,
                expense.description,
                format_amount(expense.amount, symbol)
            );
        }
    }

    Ok(())
}

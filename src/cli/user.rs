//! User CLI commands
//!
//! Creates user profiles and sets their monthly income and expense limit.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_amount, format_profile};
use crate::error::TrackerResult;
use crate::models::BudgetParameters;
use crate::services::{ProfileDetails, UserService};
use crate::storage::Storage;

/// User subcommands
#[derive(Subcommand)]
pub enum UserCommands {
    /// Create a new user
    Add {
        /// Username (case-insensitive, no spaces)
        username: String,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        #[arg(long)]
        email: Option<String>,
    },

    /// Show a user's profile
    Show {
        username: String,
    },

    /// Set monthly income and expense limit
    Budget {
        username: String,

        /// Monthly income
        #[arg(long)]
        income: f64,

        /// Monthly expense limit
        #[arg(long)]
        limit: f64,
    },

    /// List all users
    List,
}

/// Handle a user command
pub fn handle_user_command(
    storage: &Storage,
    settings: &Settings,
    cmd: UserCommands,
) -> TrackerResult<()> {
    let service = UserService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        UserCommands::Add {
            username,
            first_name,
            last_name,
            email,
        } => {
            let user = service.create_with_details(
                &username,
                ProfileDetails {
                    first_name,
                    last_name,
                    email,
                },
            )?;
            println!("Created user: {} ({})", user.username, user.id);
            println!();
            println!(
                "Set a budget with 'expenses user budget {} --income <amount> --limit <amount>'",
                user.username
            );
        }

        UserCommands::Show { username } => {
            let user = service.get(&username)?;
            print!("{}", format_profile(&user, symbol));
        }

        UserCommands::Budget {
            username,
            income,
            limit,
        } => {
            let user = service.set_budget(&username, BudgetParameters::new(income, limit))?;
            println!(
                "Budget for {}: income {}, limit {}",
                user.username,
                format_amount(user.budget.monthly_income, symbol),
                format_amount(user.budget.monthly_expense_limit, symbol)
            );
        }

        UserCommands::List => {
            let users = service.list()?;
            if users.is_empty() {
                println!("No users found.");
                println!("Create one with 'expenses user add <username>'");
                return Ok(());
            }

            println!("{:<12} {:<20} {:<24} {:>14}", "ID", "Username", "Name", "Limit");
            println!("{}", "-".repeat(73));
            for user in users {
                let limit = if user.budget.is_configured() {
                    format_amount(user.budget.monthly_expense_limit, symbol)
                } else {
                    "-".to_string()
                };
                println!(
                    "{:<12} {:<20} {:<24} {:>14}",
                    user.id,
                    user.username,
                    user.display_name(),
                    limit
                );
            }
        }
    }

    Ok(())
}

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use expense_tracker::cli::{
    handle_analytics_command, handle_expense_command, handle_user_command, ExpenseCommands,
    UserCommands,
};
use expense_tracker::config::{paths::TrackerPaths, settings::OutputFormat, settings::Settings};
use expense_tracker::storage::{init::SAMPLE_USERNAME, Storage};

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Expense tracking with spending analytics",
    long_about = "Records expenses per user, breaks spending down by category, \
                  compares it against a monthly income and expense limit, \
                  and suggests where to cut back."
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory
    Init {
        /// Create a demo user with sample expenses
        #[arg(long)]
        sample: bool,
    },

    /// Show current configuration and paths
    Config,

    /// User management commands
    #[command(subcommand)]
    User(UserCommands),

    /// Expense management commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Show spending analytics and recommendations for a user
    Analytics {
        username: String,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init { sample }) => {
            println!("Initializing expense tracker at: {}", paths.data_dir().display());
            let created = expense_tracker::storage::initialize_storage(&paths, sample)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            if created {
                println!();
                println!("Sample user '{}' created with three expenses.", SAMPLE_USERNAME);
                println!("Run 'expenses analytics {}' to see a report.", SAMPLE_USERNAME);
            } else if sample {
                println!("Existing data found; sample data was not added.");
            }
        }
        Some(Commands::Config) => {
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Default output:  {:?}", settings.default_output);
        }
        Some(Commands::User(cmd)) => handle_user_command(&storage, &settings, cmd)?,
        Some(Commands::Expense(cmd)) => handle_expense_command(&storage, &settings, cmd)?,
        Some(Commands::Analytics {
            username,
            format,
            output,
        }) => handle_analytics_command(&storage, &settings, &username, format, output)?,
        None => {
            println!("Expense Tracker - spending analytics and recommendations");
            println!();
            println!("Run 'expenses --help' for usage information.");
            println!("Run 'expenses init --sample' to try it with demo data.");
        }
    }

    Ok(())
}

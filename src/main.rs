use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_cli::cli::{
    handle_add, handle_budget_command, handle_categories, handle_clear, handle_delete,
    handle_export, handle_history, handle_list, handle_monthly, handle_search, BudgetCommands,
    Menu,
};
use expense_cli::config::{paths::ExpensePaths, settings::Settings};
use expense_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Record expenses, keep an eye on a budget and see where the money \
                  goes, by category or by month. Run without a subcommand for the \
                  interactive menu."
)]
struct Cli {
    /// Directory holding expenses.json, budget.json and settings.json
    #[arg(long, env = "EXPENSE_CLI_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        name: String,
        /// Amount, e.g. 12.50
        amount: String,
        /// Category name or number (1-7); defaults to Other
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List all expenses
    #[command(alias = "ls")]
    List,

    /// Delete an expense by its list position
    #[command(alias = "rm")]
    Delete {
        /// Position as shown by `list` (1-based)
        #[arg(allow_hyphen_values = true)]
        position: i64,
        /// Skip the preview and delete
        #[arg(short, long)]
        force: bool,
    },

    /// Find expenses whose name contains a keyword
    Search {
        /// Case-insensitive keyword
        keyword: String,
    },

    /// Delete every expense
    Clear {
        /// Skip the preview and delete
        #[arg(short, long)]
        force: bool,
    },

    /// Spending by category
    Categories,

    /// Spending by month
    Monthly,

    /// Budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Export expenses to a file
    Export {
        /// Output file
        file: PathBuf,
        /// csv or json; guessed from the file extension when omitted
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Show current configuration and paths
    Config {
        /// Write the current settings to settings.json for editing
        #[arg(long)]
        init: bool,
    },

    /// Start the interactive menu
    Menu,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = ExpensePaths::resolve(cli.data_dir)?;
    let settings = Settings::load_or_default(&paths)?;
    let storage = Storage::new(&paths, &settings)?;
    tracing::debug!(data_dir = %paths.base_dir().display(), "storage ready");

    match cli.command {
        Some(Commands::Add {
            name,
            amount,
            category,
        }) => {
            handle_add(&storage, &settings, &name, &amount, category.as_deref())?;
        }
        Some(Commands::List) => {
            handle_list(&storage, &settings)?;
        }
        Some(Commands::Delete { position, force }) => {
            handle_delete(&storage, &settings, position, force)?;
        }
        Some(Commands::Search { keyword }) => {
            handle_search(&storage, &settings, &keyword)?;
        }
        Some(Commands::Clear { force }) => {
            handle_clear(&storage, force)?;
        }
        Some(Commands::Categories) => {
            handle_categories(&storage, &settings)?;
        }
        Some(Commands::Monthly) => {
            handle_monthly(&storage, &settings)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Export { file, format }) => {
            handle_export(&storage, &file, format.as_deref())?;
        }
        Some(Commands::History { count }) => {
            handle_history(&storage, count)?;
        }
        Some(Commands::Config { init }) => {
            if init {
                settings.save(&paths)?;
                println!("Wrote {}", paths.settings_file().display());
                println!();
            }
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Expenses file:  {}", paths.expenses_file().display());
            println!("Budget file:    {}", paths.budget_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Audit log:       {}", settings.audit_log);
        }
        Some(Commands::Menu) | None => {
            let stdin = io::stdin();
            Menu::new(&storage, &settings, stdin.lock(), io::stdout()).run()?;
        }
    }

    Ok(())
}

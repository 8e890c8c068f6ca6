//! BizBoard CLI - bookkeeping dashboard over an in-memory session.
//!
//! # Usage
//!
//! ```bash
//! # Summary cards for the sample session
//! bizboard dashboard
//!
//! # Record revenue, dated now unless --date is given
//! bizboard revenue add "Logo Design" 800 --date 2024-05-15
//!
//! # Record an expense; without --category a category is suggested
//! bizboard expenses add "Taxi to airport" 23.40
//!
//! # Appointments on a day
//! bizboard calendar show 2024-05-10
//!
//! # Replay a YAML session file and print the dashboard
//! bizboard apply session.yaml
//! ```
//!
//! # Commands
//!
//! - `dashboard` - Total revenue, total expenses, and profit
//! - `revenue list|add` - Revenue table
//! - `expenses list|add` - Expense table and category totals
//! - `calendar show|add` - Appointments for a day
//! - `categorize` - Suggest a category for a description
//! - `apply` - Replay a session file
//!
//! # Environment Variables
//!
//! See `bizboard_app::config` for the full list. `RUST_LOG` controls log
//! verbosity and `BIZBOARD_LOG_FORMAT=json` switches logs to JSON. Logs go
//! to stderr; command output goes to stdout.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use bizboard_app::BizBoardConfig;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod render;
mod session;

use error::CliError;
use render::Output;
use session::Session;

#[derive(Parser)]
#[command(name = "bizboard")]
#[command(author, version, about = "BizBoard bookkeeping dashboard")]
struct Cli {
    /// Print screens as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show total revenue, total expenses, and profit
    Dashboard,
    /// List or add revenue entries
    Revenue {
        #[command(subcommand)]
        action: Option<RevenueAction>,
    },
    /// List or add expenses
    Expenses {
        #[command(subcommand)]
        action: Option<ExpenseAction>,
    },
    /// Show or add appointments
    Calendar {
        #[command(subcommand)]
        action: Option<CalendarAction>,
    },
    /// Suggest a category for an expense description
    Categorize {
        /// Expense description
        description: String,
    },
    /// Replay a YAML session file and print the dashboard
    Apply {
        /// Path to the session file
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum RevenueAction {
    /// List revenue entries, newest first
    List,
    /// Add a revenue entry
    Add {
        /// What the revenue was for
        description: String,

        /// Amount, e.g. 1200 or 49.99
        amount: String,

        /// Date (`YYYY-MM-DD` or RFC 3339); defaults to now
        #[arg(short, long)]
        date: Option<String>,
    },
}

#[derive(Subcommand)]
enum ExpenseAction {
    /// List expenses, newest first, with category totals
    List,
    /// Add an expense
    Add {
        /// What the money was spent on
        description: String,

        /// Amount, e.g. 75.50
        amount: String,

        /// Category; suggested from the description when omitted
        #[arg(short, long)]
        category: Option<String>,

        /// Date (`YYYY-MM-DD` or RFC 3339); defaults to now
        #[arg(short, long)]
        date: Option<String>,
    },
}

#[derive(Subcommand)]
enum CalendarAction {
    /// Show appointments on a day
    Show {
        /// Day (`YYYY-MM-DD`); defaults to today
        day: Option<String>,
    },
    /// Schedule an appointment
    Add {
        /// Appointment title
        title: String,

        /// Day (`YYYY-MM-DD`); defaults to today
        #[arg(short, long)]
        day: Option<String>,

        /// Start time (`HH:MM`); defaults to the start of the day
        #[arg(short, long)]
        time: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing on stderr.
///
/// Defaults to info level for the BizBoard crates if `RUST_LOG` is not set.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "bizboard=info".into());

    let is_json = std::env::var("BIZBOARD_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let json_layer = is_json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer =
        (!is_json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = BizBoardConfig::from_env()?;
    let now = chrono::Local::now().fixed_offset();
    let mut session = Session::open(&config, now)?;

    let stdout = std::io::stdout();
    let mut out = Output::new(stdout.lock(), cli.json);

    match cli.command {
        Commands::Dashboard => commands::dashboard::show(&session, &mut out)?,
        Commands::Revenue { action } => match action.unwrap_or(RevenueAction::List) {
            RevenueAction::List => commands::revenue::list(&session, &mut out)?,
            RevenueAction::Add {
                description,
                amount,
                date,
            } => {
                commands::revenue::add(&mut session, &mut out, description, amount, date.as_deref())?;
            }
        },
        Commands::Expenses { action } => match action.unwrap_or(ExpenseAction::List) {
            ExpenseAction::List => commands::expenses::list(&session, &mut out)?,
            ExpenseAction::Add {
                description,
                amount,
                category,
                date,
            } => {
                commands::expenses::add(
                    &mut session,
                    &mut out,
                    description,
                    amount,
                    category,
                    date.as_deref(),
                )
                .await?;
            }
        },
        Commands::Calendar { action } => match action.unwrap_or(CalendarAction::Show { day: None }) {
            CalendarAction::Show { day } => {
                commands::calendar::show(&session, &mut out, day.as_deref())?;
            }
            CalendarAction::Add { title, day, time } => {
                commands::calendar::add(&mut session, &mut out, title, day.as_deref(), time)?;
            }
        },
        Commands::Categorize { description } => {
            commands::categorize::run(&session, &mut out, &description).await?;
        }
        Commands::Apply { file } => {
            let file = commands::apply::load(&file).await?;
            commands::apply::run(&mut session, &mut out, file).await?;
        }
    }

    out.flush()?;
    Ok(())
}

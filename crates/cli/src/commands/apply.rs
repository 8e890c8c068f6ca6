//! Replay a session file against one ledger.
//!
//! # File Format
//!
//! ```yaml
//! operations:
//!   - revenue:
//!       description: Website Development Project
//!       amount: 2500
//!       date: 2024-05-10
//!   - expense:
//!       description: Taxi to airport
//!       amount: "23.40"
//!       # category omitted: a suggestion is requested
//!   - appointment:
//!       title: Project Kickoff
//!       day: 2024-05-12
//!       time: "09:30"
//! ```
//!
//! Operations run in order and stop at the first one that fails validation.
//! The dashboard is printed at the end.

use std::io::Write;
use std::path::Path;

use bizboard_app::forms::{AppointmentForm, ExpenseForm, RevenueForm};
use bizboard_app::screens::{DashboardScreen, ScreenFeed};
use bizboard_core::{Field, parse_day};
use serde::{Deserialize, Deserializer};
use tracing::{debug, info};

use crate::error::CliError;
use crate::render::Output;
use crate::session::Session;

/// Top-level session file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionFile {
    #[serde(default, with = "serde_yaml::with::singleton_map_recursive")]
    pub operations: Vec<Operation>,
}

/// One ledger operation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub enum Operation {
    Revenue {
        description: String,
        #[serde(deserialize_with = "scalar_text")]
        amount: String,
        date: Option<String>,
    },
    Expense {
        description: String,
        #[serde(deserialize_with = "scalar_text")]
        amount: String,
        category: Option<String>,
        date: Option<String>,
    },
    Appointment {
        title: String,
        day: Option<String>,
        time: Option<String>,
    },
}

/// Accept numbers as well as strings, so `amount: 49.99` and
/// `amount: "49.99"` both reach the amount parser as text.
fn scalar_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match serde_yaml::Value::deserialize(deserializer)? {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a number or string, found {other:?}"
        ))),
    }
}

/// Load a session file.
///
/// # Errors
///
/// Returns `CliError::Io` if the file cannot be read and `CliError::Yaml` if
/// it is not a valid session file.
pub async fn load(path: &Path) -> Result<SessionFile, CliError> {
    info!(path = %path.display(), "Loading session file");
    let content = tokio::fs::read_to_string(path).await?;
    let file: SessionFile = serde_yaml::from_str(&content)?;
    info!(operations = file.operations.len(), "Parsed session file");
    Ok(file)
}

/// Apply every operation in order, then print the dashboard.
///
/// # Errors
///
/// Returns `CliError::Operation` for the first operation that fails
/// validation; earlier operations stay applied.
pub async fn run(
    session: &mut Session,
    out: &mut Output<impl Write>,
    file: SessionFile,
) -> Result<(), CliError> {
    let money = session.money;
    let (feed, dashboard) = ScreenFeed::attach(&mut session.store, move |ledger| {
        DashboardScreen::build(ledger, &money)
    });

    let mut result = Ok(());
    for (index, operation) in (1..).zip(file.operations) {
        debug!(index, "Applying operation");
        if let Err(e) = apply_one(session, out, operation).await {
            result = Err(match e {
                CliError::Validation(source) => CliError::Operation { index, source },
                other => other,
            });
            break;
        }
    }

    let screen = dashboard.borrow().clone();
    session.store.unsubscribe(feed);
    result?;
    out.dashboard(&screen)
}

async fn apply_one(
    session: &mut Session,
    out: &mut Output<impl Write>,
    operation: Operation,
) -> Result<(), CliError> {
    let notice = match operation {
        Operation::Revenue {
            description,
            amount,
            date,
        } => {
            let date = session.timestamp(date.as_deref())?;
            let mut form = RevenueForm {
                description,
                amount,
                dialog_open: true,
            };
            form.submit(&mut session.store, date)?
        }
        Operation::Expense {
            description,
            amount,
            category,
            date,
        } => {
            let date = session.timestamp(date.as_deref())?;
            let mut form = ExpenseForm {
                description,
                amount,
                category: category.unwrap_or_default(),
                dialog_open: true,
                ..ExpenseForm::default()
            };
            if form.category.trim().is_empty() {
                let notice = form.suggest_category(&session.categorizer).await;
                out.notice(&notice)?;
            }
            form.submit(&mut session.store, date)?
        }
        Operation::Appointment { title, day, time } => {
            let day = day
                .as_deref()
                .map(|d| parse_day(Field::Date, d))
                .transpose()?
                .unwrap_or_else(|| session.now.date_naive());
            let mut form = AppointmentForm {
                title,
                time: time.unwrap_or_default(),
                dialog_open: true,
                ..AppointmentForm::for_day(day)
            };
            form.submit(&mut session.store, session.now)?
        }
    };
    out.notice(&notice)
}

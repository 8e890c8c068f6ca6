//! One in-memory bookkeeping session.
//!
//! Every `bizboard` invocation opens a fresh session: the ledger lives only
//! for the duration of the process.

use bizboard_app::{BizBoardConfig, Categorizer, ConfiguredClassifier};
use bizboard_core::{Field, LedgerStore, MoneyFormat, Timestamp, parse_timestamp};
use tracing::{debug, info};

use crate::error::CliError;

/// Ledger, categorizer, and display settings for one invocation.
pub struct Session {
    pub store: LedgerStore,
    pub categorizer: Categorizer<ConfiguredClassifier>,
    pub money: MoneyFormat,
    /// Session clock, used for sample appointments and undated records.
    pub now: Timestamp,
}

impl Session {
    /// Open a session at `now`.
    ///
    /// # Errors
    ///
    /// Returns `CliError` if the Claude client cannot be built.
    pub fn open(config: &BizBoardConfig, now: Timestamp) -> Result<Self, CliError> {
        let store = if config.sample_data {
            LedgerStore::with_sample_data(now)?
        } else {
            LedgerStore::new()
        };
        let categorizer = Categorizer::new(ConfiguredClassifier::from_config(config.claude())?);

        info!(
            revenue = store.revenue().len(),
            expenses = store.expenses().len(),
            appointments = store.appointments().len(),
            "Session opened"
        );

        Ok(Self {
            store,
            categorizer,
            money: config.money,
            now,
        })
    }

    /// Parse an optional `--date` argument, defaulting to the session clock.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Validation` for an unparsable date.
    pub fn timestamp(&self, date: Option<&str>) -> Result<Timestamp, CliError> {
        let Some(date) = date else {
            return Ok(self.now);
        };
        let ts = parse_timestamp(Field::Date, date, *self.now.offset())?;
        debug!(input = date, timestamp = %ts, "Parsed date");
        Ok(ts)
    }
}

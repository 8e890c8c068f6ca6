//! `bizboard` subcommands.

pub mod apply;
pub mod calendar;
pub mod categorize;
pub mod dashboard;
pub mod expenses;
pub mod revenue;

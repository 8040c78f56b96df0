pub mod base_commands;
pub mod calendar_cmd;
pub mod check_in_cmd;
pub mod inquire_cmd;
pub mod pricing_cmd;
pub mod report_format;

use chrono::{Local, NaiveDate};
use thiserror::Error;

use crate::domain::inquiry::InquiryError;
use crate::domain::locale::UnsupportedLocale;
use crate::domain::selection::SelectionError;
use crate::services::inquiry_client::RelayError;
use crate::services::site_config_yaml::SiteConfigError;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Config(#[from] SiteConfigError),
    #[error(transparent)]
    Locale(#[from] UnsupportedLocale),
    #[error("invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("invalid month: {0} (expected YYYY-MM)")]
    InvalidMonth(String),
    #[error("selection cannot be submitted: {0}")]
    Selection(#[from] SelectionError),
    #[error("inquiry is incomplete: {0}")]
    Inquiry(#[from] InquiryError),
    #[error("{message} ({source})")]
    Delivery {
        message: &'static str,
        source: RelayError,
    },
}

pub(crate) fn parse_date_arg(value: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| CommandError::InvalidDate(value.to_string()))
}

/// The given reference date, or the local date at the time of the call.
pub(crate) fn resolve_today(value: Option<&str>) -> Result<NaiveDate, CommandError> {
    match value {
        Some(value) => parse_date_arg(value),
        None => Ok(Local::now().date_naive()),
    }
}

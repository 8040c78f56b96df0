use std::collections::BTreeSet;

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::season::CalendarDate;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeLabelError {
    #[error("no day/month pair in date range label: {0}")]
    MissingDayMonth(String),
    #[error("no year in date range label: {0}")]
    MissingYear(String),
    #[error("date range label does not name a real date: {0}")]
    InvalidDate(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekStatus {
    Booked,
    Available,
}

/// One row of the hand-maintained pricing table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookedWeekRow {
    pub week_number: u32,
    pub date_range_label: String,
    pub status: WeekStatus,
    pub price: String,
    pub note: Option<String>,
    /// Structured start date. Takes precedence over the label when set.
    pub start_date: Option<CalendarDate>,
}

impl BookedWeekRow {
    pub fn resolved_start_date(&self) -> Result<CalendarDate, RangeLabelError> {
        match self.start_date {
            Some(date) => Ok(date),
            None => parse_range_start(&self.date_range_label),
        }
    }
}

/// Parses the start date out of labels such as `13/12 - 20/12 2025` or
/// `27/12 2025 - 3/1 2026`.
///
/// The start year comes from the start segment when it carries one, otherwise
/// from the first year anywhere in the label.
pub fn parse_range_start(label: &str) -> Result<CalendarDate, RangeLabelError> {
    let start_segment = label.split('-').next().unwrap_or(label);

    let year = year_tokens(start_segment)
        .into_iter()
        .next()
        .or_else(|| year_tokens(label).into_iter().next())
        .ok_or_else(|| RangeLabelError::MissingYear(label.to_string()))?;

    let day_month = start_segment
        .split_whitespace()
        .find(|token| !is_year_token(token))
        .ok_or_else(|| RangeLabelError::MissingDayMonth(label.to_string()))?;
    let (day, month) = parse_day_month(day_month)
        .ok_or_else(|| RangeLabelError::MissingDayMonth(label.to_string()))?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| RangeLabelError::InvalidDate(label.to_string()))
}

/// Start dates of every `Booked` row. Rows whose start cannot be resolved are
/// logged and left out.
pub fn booked_start_dates(rows: &[BookedWeekRow]) -> BTreeSet<CalendarDate> {
    rows.iter()
        .filter(|row| row.status == WeekStatus::Booked)
        .filter_map(|row| match row.resolved_start_date() {
            Ok(date) => Some(date),
            Err(err) => {
                tracing::warn!(week = row.week_number, error = %err, "skipping booked week");
                None
            }
        })
        .collect()
}

fn year_tokens(segment: &str) -> Vec<i32> {
    segment
        .split(|c: char| !c.is_ascii_digit())
        .filter(|token| token.len() == 4)
        .filter_map(|token| token.parse().ok())
        .collect()
}

fn is_year_token(token: &str) -> bool {
    token.len() == 4 && token.chars().all(|c| c.is_ascii_digit())
}

fn parse_day_month(token: &str) -> Option<(u32, u32)> {
    let (day, month) = token.split_once('/')?;
    Some((day.trim().parse().ok()?, month.trim().parse().ok()?))
}

use chrono::{Datelike, NaiveDate, Weekday};
use thiserror::Error;

/// Date-only value used for every comparison in the booking rules.
pub type CalendarDate = NaiveDate;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeasonError {
    #[error("season window starts {start} after it ends {end}")]
    InvertedWindow { start: CalendarDate, end: CalendarDate },
}

/// Inclusive date range during which Saturday-to-Saturday turnover applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonWindow {
    start: CalendarDate,
    end: CalendarDate,
}

impl SeasonWindow {
    pub fn new(start: CalendarDate, end: CalendarDate) -> Result<Self, SeasonError> {
        if start > end {
            return Err(SeasonError::InvertedWindow { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> CalendarDate {
        self.start
    }

    pub fn end(&self) -> CalendarDate {
        self.end
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        date >= self.start && date <= self.end
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeasonCalendar {
    windows: Vec<SeasonWindow>,
}

impl SeasonCalendar {
    pub fn new(windows: Vec<SeasonWindow>) -> Self {
        Self { windows }
    }

    pub fn windows(&self) -> &[SeasonWindow] {
        &self.windows
    }

    /// True when `date` lies inside any configured window, bounds included.
    pub fn is_in_winter_season(&self, date: CalendarDate) -> bool {
        self.windows.iter().any(|window| window.contains(date))
    }
}

pub fn is_saturday(date: CalendarDate) -> bool {
    date.weekday() == Weekday::Sat
}

use chrono::{Datelike, Days, Weekday};
use thiserror::Error;

use crate::domain::availability::{BookingRules, check_out_disabled_test};
use crate::domain::season::{CalendarDate, SeasonCalendar, is_saturday};

/// Length of a winter turnover stay.
pub const WINTER_STAY_NIGHTS: u64 = 7;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("no check-in date selected")]
    MissingCheckIn,
    #[error("no check-out date selected")]
    MissingCheckOut,
    #[error("check-in date {0} is not available")]
    CheckInUnavailable(CalendarDate),
    #[error("check-out date {0} is not available for the selected check-in")]
    CheckOutUnavailable(CalendarDate),
    #[error("check-out is fixed to one week during the winter season")]
    CheckOutFixed,
}

/// Moves a winter-season pick forward to the next Saturday. Dates outside the
/// season and winter Saturdays pass through unchanged.
pub fn normalize_check_in(calendar: &SeasonCalendar, picked: CalendarDate) -> CalendarDate {
    if !calendar.is_in_winter_season(picked) || is_saturday(picked) {
        return picked;
    }

    let Some(saturday) = next_saturday(picked) else {
        tracing::warn!(%picked, "no Saturday after picked date");
        return picked;
    };
    if !calendar.is_in_winter_season(saturday) {
        tracing::warn!(%picked, %saturday, "normalized check-in falls outside every season window");
    }
    saturday
}

/// Check-out for a winter check-in: the same weekday one week later.
pub fn winter_check_out(check_in: CalendarDate) -> Option<CalendarDate> {
    check_in.checked_add_days(Days::new(WINTER_STAY_NIGHTS))
}

fn next_saturday(date: CalendarDate) -> Option<CalendarDate> {
    let today = date.weekday().num_days_from_monday();
    let saturday = Weekday::Sat.num_days_from_monday();
    let ahead = match (saturday + 7 - today) % 7 {
        0 => 7,
        days => days,
    };
    date.checked_add_days(Days::new(u64::from(ahead)))
}

/// Dates of one booking attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    check_in: Option<CalendarDate>,
    check_out: Option<CalendarDate>,
    is_winter: bool,
}

/// A selection that passed every rule and may be submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmedStay {
    pub check_in: CalendarDate,
    pub check_out: CalendarDate,
    pub is_winter: bool,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check_in(&self) -> Option<CalendarDate> {
        self.check_in
    }

    pub fn check_out(&self) -> Option<CalendarDate> {
        self.check_out
    }

    pub fn is_winter(&self) -> bool {
        self.is_winter
    }

    /// Applies a raw check-in pick. Winter picks are normalized and the
    /// check-out is derived; otherwise any previous check-out is cleared.
    pub fn pick_check_in(&mut self, calendar: &SeasonCalendar, picked: CalendarDate) -> CalendarDate {
        let check_in = normalize_check_in(calendar, picked);
        self.check_in = Some(check_in);
        self.is_winter = calendar.is_in_winter_season(check_in);
        self.check_out = if self.is_winter {
            winter_check_out(check_in)
        } else {
            None
        };
        check_in
    }

    pub fn pick_check_out(&mut self, picked: CalendarDate) -> Result<(), SelectionError> {
        if self.check_in.is_none() {
            return Err(SelectionError::MissingCheckIn);
        }
        if self.is_winter {
            return Err(SelectionError::CheckOutFixed);
        }
        if self.check_out_disabled()(picked) {
            return Err(SelectionError::CheckOutUnavailable(picked));
        }
        self.check_out = Some(picked);
        Ok(())
    }

    pub fn check_out_disabled(&self) -> impl Fn(CalendarDate) -> bool + use<> {
        check_out_disabled_test(self.check_in, self.is_winter)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Re-checks the selection against the current rules. Submission is only
    /// allowed with the returned stay.
    pub fn confirm(&self, rules: &BookingRules, today: CalendarDate) -> Result<ConfirmedStay, SelectionError> {
        let check_in = self.check_in.ok_or(SelectionError::MissingCheckIn)?;
        if rules.check_in_disabled(today)(check_in) {
            return Err(SelectionError::CheckInUnavailable(check_in));
        }
        let check_out = self.check_out.ok_or(SelectionError::MissingCheckOut)?;
        Ok(ConfirmedStay {
            check_in,
            check_out,
            is_winter: self.is_winter,
        })
    }
}

use std::collections::BTreeSet;

use crate::domain::booked_week::{BookedWeekRow, booked_start_dates};
use crate::domain::season::{CalendarDate, SeasonCalendar, is_saturday};
use crate::domain::selection::winter_check_out;

/// Why a date cannot be picked as check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    Past,
    NotSaturday,
    Booked,
}

pub fn check_in_block_reason(
    calendar: &SeasonCalendar,
    booked_starts: &BTreeSet<CalendarDate>,
    today: CalendarDate,
    date: CalendarDate,
) -> Option<BlockReason> {
    if date < today {
        return Some(BlockReason::Past);
    }
    if !calendar.is_in_winter_season(date) {
        return None;
    }
    if !is_saturday(date) {
        return Some(BlockReason::NotSaturday);
    }
    booked_starts.contains(&date).then_some(BlockReason::Booked)
}

/// Predicate for the check-in field. Returns `true` for dates that must not
/// be selectable: past dates, non-Saturdays in season, and booked winter weeks.
pub fn check_in_disabled_test<'a>(
    calendar: &'a SeasonCalendar,
    booked_starts: &'a BTreeSet<CalendarDate>,
    today: CalendarDate,
) -> impl Fn(CalendarDate) -> bool + 'a {
    move |date| check_in_block_reason(calendar, booked_starts, today, date).is_some()
}

/// Predicate for the check-out field given the current check-in.
pub fn check_out_disabled_test(
    check_in: Option<CalendarDate>,
    is_winter: bool,
) -> impl Fn(CalendarDate) -> bool {
    move |date| match check_in {
        None => true,
        Some(check_in) if is_winter => Some(date) != winter_check_out(check_in),
        Some(check_in) => date <= check_in,
    }
}

/// Season windows together with the booked winter weeks.
#[derive(Debug, Clone, Default)]
pub struct BookingRules {
    pub seasons: SeasonCalendar,
    pub booked_starts: BTreeSet<CalendarDate>,
}

impl BookingRules {
    pub fn new(seasons: SeasonCalendar, booked_starts: BTreeSet<CalendarDate>) -> Self {
        Self {
            seasons,
            booked_starts,
        }
    }

    pub fn from_rows(seasons: SeasonCalendar, rows: &[BookedWeekRow]) -> Self {
        Self::new(seasons, booked_start_dates(rows))
    }

    pub fn check_in_disabled(&self, today: CalendarDate) -> impl Fn(CalendarDate) -> bool + '_ {
        check_in_disabled_test(&self.seasons, &self.booked_starts, today)
    }

    pub fn check_in_block_reason(&self, today: CalendarDate, date: CalendarDate) -> Option<BlockReason> {
        check_in_block_reason(&self.seasons, &self.booked_starts, today, date)
    }

    /// Block reason for a raw pick once normalized to `check_in`. A pick in
    /// the past stays past even when its Saturday is still ahead.
    pub fn pick_block_reason(
        &self,
        today: CalendarDate,
        picked: CalendarDate,
        check_in: CalendarDate,
    ) -> Option<BlockReason> {
        if picked < today {
            return Some(BlockReason::Past);
        }
        self.check_in_block_reason(today, check_in)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{on_date, winter_calendar};

    #[test]
    fn check_in_rules_cover_past_weekday_and_booked_weeks() {
        let calendar = winter_calendar();
        let booked = BTreeSet::from([on_date(2026, 1, 17)]);
        let disabled = check_in_disabled_test(&calendar, &booked, on_date(2026, 1, 10));

        let test_cases = vec![
            (on_date(2026, 1, 3), true),   // Saturday, past
            (on_date(2026, 1, 9), true),   // Friday, past
            (on_date(2026, 1, 10), false), // Saturday, today
            (on_date(2026, 1, 12), true),  // Monday in season
            (on_date(2026, 1, 17), true),  // Saturday, booked
            (on_date(2026, 1, 24), false), // Saturday, free
            (on_date(2026, 4, 18), false), // last Saturday of the window
            (on_date(2026, 4, 19), true),  // Sunday, last day of the window
            (on_date(2026, 4, 21), false), // Tuesday, after the season
            (on_date(2026, 6, 1), false),  // Monday in summer
        ];

        for (date, expected) in test_cases {
            assert_eq!(disabled(date), expected, "unexpected check-in rule for {}", date);
        }
    }

    #[test]
    fn past_dates_are_disabled_outside_the_season_too() {
        let calendar = winter_calendar();
        let booked = BTreeSet::new();
        let disabled = check_in_disabled_test(&calendar, &booked, on_date(2026, 7, 1));

        assert!(disabled(on_date(2026, 6, 30)));
        assert!(!disabled(on_date(2026, 7, 1)));
    }

    #[test]
    fn booked_dates_outside_the_season_do_not_block() {
        let calendar = winter_calendar();
        let booked = BTreeSet::from([on_date(2026, 6, 6)]);
        let disabled = check_in_disabled_test(&calendar, &booked, on_date(2026, 1, 1));

        assert!(!disabled(on_date(2026, 6, 6)));
    }

    #[test]
    fn removing_a_booked_week_reenables_it() {
        let calendar = winter_calendar();
        let week = on_date(2026, 2, 7);
        let today = on_date(2026, 1, 10);

        let mut booked = BTreeSet::from([week, on_date(2026, 2, 14)]);
        assert!(check_in_disabled_test(&calendar, &booked, today)(week));

        booked.remove(&week);
        assert!(!check_in_disabled_test(&calendar, &booked, today)(week));
    }

    #[test]
    fn block_reason_names_the_first_failing_rule() {
        let calendar = winter_calendar();
        let booked = BTreeSet::from([on_date(2026, 1, 3), on_date(2026, 1, 17)]);
        let today = on_date(2026, 1, 10);

        let test_cases = vec![
            (on_date(2026, 1, 3), Some(BlockReason::Past)),
            (on_date(2026, 1, 13), Some(BlockReason::NotSaturday)),
            (on_date(2026, 1, 17), Some(BlockReason::Booked)),
            (on_date(2026, 1, 24), None),
        ];

        for (date, expected) in test_cases {
            assert_eq!(check_in_block_reason(&calendar, &booked, today, date), expected);
        }
    }

    #[test]
    fn check_out_is_fully_disabled_without_check_in() {
        let disabled = check_out_disabled_test(None, false);
        assert!(disabled(on_date(2026, 6, 2)));
        assert!(disabled(on_date(2030, 1, 1)));
    }

    #[test]
    fn winter_check_out_only_allows_the_following_saturday() {
        let disabled = check_out_disabled_test(Some(on_date(2026, 1, 10)), true);

        let test_cases = vec![
            (on_date(2026, 1, 10), true),
            (on_date(2026, 1, 16), true),
            (on_date(2026, 1, 17), false),
            (on_date(2026, 1, 18), true),
            (on_date(2026, 1, 24), true),
        ];

        for (date, expected) in test_cases {
            assert_eq!(disabled(date), expected, "unexpected check-out rule for {}", date);
        }
    }

    #[test]
    fn summer_check_out_must_follow_check_in() {
        let disabled = check_out_disabled_test(Some(on_date(2026, 6, 1)), false);

        assert!(disabled(on_date(2026, 5, 31)));
        assert!(disabled(on_date(2026, 6, 1)));
        assert!(!disabled(on_date(2026, 6, 2)));
        assert!(!disabled(on_date(2026, 6, 4)));
        assert!(!disabled(on_date(2026, 9, 30)));
    }

    #[test]
    fn rules_built_from_rows_block_booked_weeks() {
        let rows = crate::test_support::pricing_fixture();
        let rules = BookingRules::from_rows(winter_calendar(), &rows);
        let disabled = rules.check_in_disabled(on_date(2025, 12, 1));

        assert!(disabled(on_date(2025, 12, 13)));
        assert!(disabled(on_date(2025, 12, 27)));
        assert!(!disabled(on_date(2026, 3, 28)));
        assert!(!disabled(on_date(2026, 4, 11)));
    }

    #[test]
    fn past_pick_is_blocked_even_when_its_saturday_is_ahead() {
        let rules = BookingRules::new(winter_calendar(), BTreeSet::from([on_date(2026, 1, 17)]));
        let today = on_date(2026, 1, 10);

        let test_cases = vec![
            (on_date(2026, 1, 5), on_date(2026, 1, 10), Some(BlockReason::Past)),
            (on_date(2026, 1, 9), on_date(2026, 1, 10), Some(BlockReason::Past)),
            (on_date(2026, 1, 12), on_date(2026, 1, 17), Some(BlockReason::Booked)),
            (on_date(2026, 1, 19), on_date(2026, 1, 24), None),
            (on_date(2026, 1, 10), on_date(2026, 1, 10), None),
        ];

        for (picked, check_in, expected) in test_cases {
            assert_eq!(
                rules.pick_block_reason(today, picked, check_in),
                expected,
                "unexpected block reason for pick {picked}"
            );
        }
    }
}

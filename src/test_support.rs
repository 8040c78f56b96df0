use crate::domain::booked_week::{BookedWeekRow, WeekStatus};
use crate::domain::season::{SeasonCalendar, SeasonWindow};

pub fn on_date(year: i32, month: u32, day: u32) -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

// Both winters the cabin is let Saturday to Saturday.
pub fn winter_calendar() -> SeasonCalendar {
    SeasonCalendar::new(vec![
        SeasonWindow::new(on_date(2025, 12, 13), on_date(2026, 4, 19)).unwrap(),
        SeasonWindow::new(on_date(2026, 12, 12), on_date(2027, 4, 18)).unwrap(),
    ])
}

pub fn pricing_row(week: u32, label: &str, status: WeekStatus) -> BookedWeekRow {
    BookedWeekRow {
        week_number: week,
        date_range_label: label.to_string(),
        status,
        price: String::new(),
        note: None,
        start_date: None,
    }
}

pub fn pricing_fixture() -> Vec<BookedWeekRow> {
    vec![
        pricing_row(51, "13/12 - 20/12 2025", WeekStatus::Booked),
        pricing_row(52, "20/12 - 27/12 2025", WeekStatus::Booked),
        pricing_row(1, "27/12 2025 - 3/1 2026", WeekStatus::Booked),
        pricing_row(2, "3/1 - 10/1 2026", WeekStatus::Booked),
        pricing_row(14, "28/3 - 4/4 2026", WeekStatus::Available),
        pricing_row(15, "4/4 - 11/4 2026", WeekStatus::Available),
        pricing_row(16, "11/4 - 19/4 2026", WeekStatus::Available),
    ]
}

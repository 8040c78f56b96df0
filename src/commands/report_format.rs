use chrono::{Datelike, NaiveDate};

use crate::domain::availability::BlockReason;
use crate::domain::booked_week::BookedWeekRow;
use crate::domain::locale::Locale;
use crate::domain::season::CalendarDate;

/// Everything the check-in report shows about one pick.
#[derive(Debug, Clone)]
pub struct CheckInReport {
    pub picked: CalendarDate,
    pub check_in: CalendarDate,
    pub check_out: Option<CalendarDate>,
    pub is_winter: bool,
    pub blocked: Option<BlockReason>,
}

pub fn format_check_in_report(report: &CheckInReport, locale: Locale) -> String {
    let labels = locale.report_labels();
    let mut lines = Vec::new();
    lines.push(labels.title.to_string());
    lines.push(format!("{}: {}", labels.picked, report.picked));
    lines.push(format!("{}: {}", labels.season, locale.season_label(report.is_winter)));
    lines.push(format!(
        "{}: {} ({})",
        labels.check_in,
        report.check_in,
        locale.format_long_date(report.check_in)
    ));
    match report.check_out {
        Some(check_out) => lines.push(format!(
            "{}: {} ({})",
            labels.check_out,
            check_out,
            locale.format_long_date(check_out)
        )),
        None => lines.push(format!(
            "{}: {} {}",
            labels.check_out, labels.open_check_out, report.check_in
        )),
    }
    let availability = match report.blocked {
        None => labels.yes.to_string(),
        Some(reason) => format!("{} ({})", labels.no, locale.block_reason_label(reason)),
    };
    lines.push(format!("{}: {availability}", labels.available));
    if report.is_winter {
        lines.push(locale.winter_rule_hint().to_string());
    }

    lines.join("\n")
}

/// Month grid starting on Monday. Selectable days show their number,
/// disabled days `--`.
pub fn format_month_grid(month_start: NaiveDate, disabled: impl Fn(NaiveDate) -> bool) -> String {
    let mut lines = Vec::new();
    lines.push(month_start.format("%Y-%m").to_string());
    lines.push("Mo Tu We Th Fr Sa Su".to_string());

    let mut cells: Vec<String> = (0..month_start.weekday().num_days_from_monday())
        .map(|_| "  ".to_string())
        .collect();
    for date in month_start.iter_days().take_while(|date| date.month() == month_start.month()) {
        if disabled(date) {
            cells.push("--".to_string());
        } else {
            cells.push(format!("{:02}", date.day()));
        }
    }

    for week in cells.chunks(7) {
        lines.push(week.join(" "));
    }

    lines.join("\n")
}

pub fn format_pricing_table(rows: &[BookedWeekRow], locale: Locale) -> String {
    let [week, dates, price, status] = locale.pricing_columns();

    let mut lines = Vec::new();
    lines.push(locale.pricing_title().to_string());
    lines.push(format!("{week} | {dates} | {price} | {status}"));
    lines.push("------|-------|------|-------".to_string());
    for row in rows {
        let dates = match &row.note {
            Some(note) => format!("{} ({note})", row.date_range_label),
            None => row.date_range_label.clone(),
        };
        lines.push(format!(
            "{} | {} | {} | {}",
            row.week_number,
            dates,
            row.price,
            locale.status_label(row.status)
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::booked_week::WeekStatus;
    use crate::test_support::{on_date, pricing_row};

    fn build_report() -> CheckInReport {
        CheckInReport {
            picked: on_date(2026, 1, 7),
            check_in: on_date(2026, 1, 10),
            check_out: Some(on_date(2026, 1, 17)),
            is_winter: true,
            blocked: None,
        }
    }

    #[test]
    fn check_in_report_shows_normalized_stay() {
        let output = format_check_in_report(&build_report(), Locale::En);

        assert!(output.contains("Check-in Report"));
        assert!(output.contains("Picked: 2026-01-07"));
        assert!(output.contains("Season: Winter season"));
        assert!(output.contains("Check-in: 2026-01-10 (January 10th, 2026)"));
        assert!(output.contains("Check-out: 2026-01-17 (January 17th, 2026)"));
        assert!(output.contains("Available: yes"));
        assert!(output.contains("Only Saturdays selectable"));
    }

    #[test]
    fn check_in_report_names_block_reason_and_open_check_out() {
        let mut report = build_report();
        report.is_winter = false;
        report.check_out = None;
        report.blocked = Some(BlockReason::Past);

        let output = format_check_in_report(&report, Locale::Sv);

        assert!(output.contains("Incheckningsrapport"));
        assert!(output.contains("Valt datum: 2026-01-07"));
        assert!(output.contains("Säsong: Övrig säsong"));
        assert!(output.contains("Utcheckning: valfritt datum efter 2026-01-10"));
        assert!(output.contains("Tillgänglig: nej (datumet har passerat)"));
        assert!(!output.contains("Season"));
        assert!(!output.contains("lördagar"));
    }

    #[test]
    fn month_grid_aligns_first_day_and_marks_disabled_days() {
        // April 2026 starts on a Wednesday.
        let output = format_month_grid(on_date(2026, 4, 1), |date| date.day() % 2 == 0);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "2026-04");
        assert_eq!(lines[1], "Mo Tu We Th Fr Sa Su");
        assert_eq!(lines[2], "      01 -- 03 -- 05");
        assert_eq!(lines[3], "-- 07 -- 09 -- 11 --");
        assert_eq!(lines.last().copied(), Some("27 -- 29 --"));
    }

    #[test]
    fn pricing_table_uses_locale_labels_and_notes() {
        let mut last = pricing_row(16, "11/4 - 19/4 2026", WeekStatus::Available);
        last.price = "13 000 kr".to_string();
        last.note = Some("8 nätter".to_string());
        let mut first = pricing_row(51, "13/12 - 20/12 2025", WeekStatus::Booked);
        first.price = "8 500 kr".to_string();

        let output = format_pricing_table(&[first, last], Locale::De);

        assert!(output.contains("Preise Wintersaison"));
        assert!(output.contains("Woche | Datum | Preis | Status"));
        assert!(output.contains("51 | 13/12 - 20/12 2025 | 8 500 kr | Gebucht"));
        assert!(output.contains("16 | 11/4 - 19/4 2026 (8 nätter) | 13 000 kr | Verfügbar"));
    }
}

use std::fmt;
use std::str::FromStr;

use chrono::Datelike;
use thiserror::Error;

use crate::domain::availability::BlockReason;
use crate::domain::booked_week::WeekStatus;
use crate::domain::season::CalendarDate;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported locale: {0} (expected sv, en or de)")]
pub struct UnsupportedLocale(pub String);

/// Field labels of the check-in report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportLabels {
    pub title: &'static str,
    pub picked: &'static str,
    pub season: &'static str,
    pub check_in: &'static str,
    pub check_out: &'static str,
    pub open_check_out: &'static str,
    pub available: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    Sv,
    En,
    De,
}

const MONTHS_SV: [&str; 12] = [
    "januari", "februari", "mars", "april", "maj", "juni", "juli", "augusti", "september",
    "oktober", "november", "december",
];
const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];
const MONTHS_DE: [&str; 12] = [
    "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September",
    "Oktober", "November", "Dezember",
];

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        match primary.trim().to_ascii_lowercase().as_str() {
            "sv" => Ok(Locale::Sv),
            "en" => Ok(Locale::En),
            "de" => Ok(Locale::De),
            _ => Err(UnsupportedLocale(tag.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Locale::Sv => "sv",
            Locale::En => "en",
            Locale::De => "de",
        };
        f.write_str(tag)
    }
}

impl Locale {
    /// Long date as shown in the booking form, e.g. `10 januari 2026`.
    pub fn format_long_date(&self, date: CalendarDate) -> String {
        let month = date.month0() as usize;
        let day = date.day();
        let year = date.year();
        match self {
            Locale::Sv => format!("{day} {} {year}", MONTHS_SV[month]),
            Locale::En => format!("{} {day}{}, {year}", MONTHS_EN[month], english_ordinal(day)),
            Locale::De => format!("{day}. {} {year}", MONTHS_DE[month]),
        }
    }

    pub fn inquiry_sent(&self) -> &'static str {
        match self {
            Locale::Sv => "Bokningsförfrågan skickad! Vi kontaktar dig inom 24 timmar.",
            Locale::En => "Booking request sent! We will contact you within 24 hours.",
            Locale::De => "Buchungsanfrage gesendet! Wir kontaktieren Sie innerhalb von 24 Stunden.",
        }
    }

    pub fn inquiry_failed(&self) -> &'static str {
        match self {
            Locale::Sv => "Förfrågan kunde inte skickas. Försök igen om en stund.",
            Locale::En => "Your request could not be sent. Please try again shortly.",
            Locale::De => "Ihre Anfrage konnte nicht gesendet werden. Bitte versuchen Sie es gleich noch einmal.",
        }
    }

    pub fn season_label(&self, is_winter: bool) -> &'static str {
        match (self, is_winter) {
            (Locale::Sv, true) => "Vintersäsong",
            (Locale::Sv, false) => "Övrig säsong",
            (Locale::En, true) => "Winter season",
            (Locale::En, false) => "Other season",
            (Locale::De, true) => "Wintersaison",
            (Locale::De, false) => "Andere Saison",
        }
    }

    pub fn winter_rule_hint(&self) -> &'static str {
        match self {
            Locale::Sv => "Vintersäsong: Endast lördagar valbara",
            Locale::En => "Winter season: Only Saturdays selectable",
            Locale::De => "Wintersaison: Nur Samstage wählbar",
        }
    }

    pub fn status_label(&self, status: WeekStatus) -> &'static str {
        match (self, status) {
            (Locale::Sv, WeekStatus::Booked) => "Bokad",
            (Locale::Sv, WeekStatus::Available) => "Ledig",
            (Locale::En, WeekStatus::Booked) => "Booked",
            (Locale::En, WeekStatus::Available) => "Available",
            (Locale::De, WeekStatus::Booked) => "Gebucht",
            (Locale::De, WeekStatus::Available) => "Verfügbar",
        }
    }

    pub fn pricing_columns(&self) -> [&'static str; 4] {
        match self {
            Locale::Sv => ["Vecka", "Datum", "Pris", "Status"],
            Locale::En => ["Week", "Dates", "Price", "Status"],
            Locale::De => ["Woche", "Datum", "Preis", "Status"],
        }
    }

    pub fn pricing_title(&self) -> &'static str {
        match self {
            Locale::Sv => "Priser vintersäsong",
            Locale::En => "Winter season pricing",
            Locale::De => "Preise Wintersaison",
        }
    }

    pub fn report_labels(&self) -> ReportLabels {
        match self {
            Locale::Sv => ReportLabels {
                title: "Incheckningsrapport",
                picked: "Valt datum",
                season: "Säsong",
                check_in: "Incheckning",
                check_out: "Utcheckning",
                open_check_out: "valfritt datum efter",
                available: "Tillgänglig",
                yes: "ja",
                no: "nej",
            },
            Locale::En => ReportLabels {
                title: "Check-in Report",
                picked: "Picked",
                season: "Season",
                check_in: "Check-in",
                check_out: "Check-out",
                open_check_out: "any date after",
                available: "Available",
                yes: "yes",
                no: "no",
            },
            Locale::De => ReportLabels {
                title: "Anreisebericht",
                picked: "Gewählt",
                season: "Saison",
                check_in: "Anreise",
                check_out: "Abreise",
                open_check_out: "beliebiges Datum nach",
                available: "Verfügbar",
                yes: "ja",
                no: "nein",
            },
        }
    }

    pub fn block_reason_label(&self, reason: BlockReason) -> &'static str {
        match (self, reason) {
            (Locale::Sv, BlockReason::Past) => "datumet har passerat",
            (Locale::Sv, BlockReason::NotSaturday) => "vinterveckor börjar på lördagar",
            (Locale::Sv, BlockReason::Booked) => "veckan är redan bokad",
            (Locale::En, BlockReason::Past) => "date has passed",
            (Locale::En, BlockReason::NotSaturday) => "winter stays start on Saturdays",
            (Locale::En, BlockReason::Booked) => "week already booked",
            (Locale::De, BlockReason::Past) => "Datum liegt in der Vergangenheit",
            (Locale::De, BlockReason::NotSaturday) => "Winteraufenthalte beginnen samstags",
            (Locale::De, BlockReason::Booked) => "Woche bereits gebucht",
        }
    }
}

fn english_ordinal(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

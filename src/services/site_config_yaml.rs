use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::availability::BookingRules;
use crate::domain::booked_week::{BookedWeekRow, WeekStatus};
use crate::domain::season::{SeasonCalendar, SeasonError, SeasonWindow};

const DEFAULT_SITE_YAML: &str = include_str!("../../config/site.yaml");
const BUILT_IN_ORIGIN: &str = "<built-in site config>";

#[derive(Error, Debug)]
pub enum SiteConfigError {
    #[error("failed to read site config {path}: {source}")]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("failed to parse site config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("invalid date format in {path}: {value} (expected YYYY-MM-DD)")]
    InvalidDate { path: PathBuf, value: String },
    #[error("invalid season window in {path}: {source}")]
    InvalidSeason { path: PathBuf, source: SeasonError },
    #[error("invalid status for week {week} in {path}: {value} (expected Booked or Available)")]
    InvalidStatus {
        path: PathBuf,
        week: u32,
        value: String,
    },
}

/// Where inquiries are posted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InquiryEndpoints {
    pub endpoint: String,
    pub failure_endpoint: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub seasons: SeasonCalendar,
    pub pricing: Vec<BookedWeekRow>,
    pub inquiry: InquiryEndpoints,
}

impl SiteConfig {
    pub fn booking_rules(&self) -> BookingRules {
        BookingRules::from_rows(self.seasons.clone(), &self.pricing)
    }
}

#[derive(Debug, Deserialize)]
struct SiteRecord {
    seasons: Option<Vec<SeasonRecord>>,
    pricing: Option<Vec<PricingRecord>>,
    inquiry: Option<InquiryRecord>,
}

#[derive(Debug, Deserialize)]
struct SeasonRecord {
    start: String,
    end: String,
}

#[derive(Debug, Deserialize)]
struct PricingRecord {
    week: u32,
    dates: String,
    #[serde(default)]
    price: String,
    status: String,
    note: Option<String>,
    start_date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct InquiryRecord {
    #[serde(default)]
    endpoint: String,
    failure_endpoint: Option<String>,
}

/// Loads the site config from `path`, or the built-in config when no path is
/// given.
pub fn load_site_config(path: Option<&str>) -> Result<SiteConfig, SiteConfigError> {
    match path {
        Some(path) => load_site_config_from_yaml_file(path),
        None => deserialize_site_config_from_yaml_str(DEFAULT_SITE_YAML, Path::new(BUILT_IN_ORIGIN)),
    }
}

pub fn load_site_config_from_yaml_file<P: AsRef<Path>>(path: P) -> Result<SiteConfig, SiteConfigError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| SiteConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    deserialize_site_config_from_yaml_str(&contents, path)
}

pub fn deserialize_site_config_from_yaml_str(
    input: &str,
    origin_path: &Path,
) -> Result<SiteConfig, SiteConfigError> {
    let record: SiteRecord = serde_yaml::from_str(input).map_err(|source| SiteConfigError::Parse {
        path: origin_path.to_path_buf(),
        source,
    })?;

    let windows = record
        .seasons
        .unwrap_or_default()
        .into_iter()
        .map(|value| season_window_from_record(value, origin_path))
        .collect::<Result<Vec<_>, _>>()?;

    let pricing = record
        .pricing
        .unwrap_or_default()
        .into_iter()
        .map(|value| pricing_row_from_record(value, origin_path))
        .collect::<Result<Vec<_>, _>>()?;

    let inquiry = record
        .inquiry
        .map(|value| InquiryEndpoints {
            endpoint: value.endpoint,
            failure_endpoint: value.failure_endpoint.filter(|url| !url.trim().is_empty()),
        })
        .unwrap_or_default();

    Ok(SiteConfig {
        seasons: SeasonCalendar::new(windows),
        pricing,
        inquiry,
    })
}

fn season_window_from_record(
    value: SeasonRecord,
    origin_path: &Path,
) -> Result<SeasonWindow, SiteConfigError> {
    let start = parse_date(&value.start, origin_path)?;
    let end = parse_date(&value.end, origin_path)?;
    SeasonWindow::new(start, end).map_err(|source| SiteConfigError::InvalidSeason {
        path: origin_path.to_path_buf(),
        source,
    })
}

fn pricing_row_from_record(
    value: PricingRecord,
    origin_path: &Path,
) -> Result<BookedWeekRow, SiteConfigError> {
    let status = parse_status(&value.status).ok_or_else(|| SiteConfigError::InvalidStatus {
        path: origin_path.to_path_buf(),
        week: value.week,
        value: value.status.clone(),
    })?;
    let start_date = value
        .start_date
        .as_deref()
        .map(|date| parse_date(date, origin_path))
        .transpose()?;

    Ok(BookedWeekRow {
        week_number: value.week,
        date_range_label: value.dates,
        status,
        price: value.price,
        note: value.note,
        start_date,
    })
}

fn parse_date(value: &str, origin_path: &Path) -> Result<NaiveDate, SiteConfigError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| SiteConfigError::InvalidDate {
        path: origin_path.to_path_buf(),
        value: value.to_string(),
    })
}

fn parse_status(value: &str) -> Option<WeekStatus> {
    match value.trim().to_lowercase().as_str() {
        "booked" | "bokad" | "gebucht" => Some(WeekStatus::Booked),
        "available" | "ledig" | "verfügbar" => Some(WeekStatus::Available),
        _ => None,
    }
}

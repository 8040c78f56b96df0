use chrono::NaiveDate;

use crate::commands::base_commands::{Commands, DateField};
use crate::commands::report_format::format_month_grid;
use crate::commands::{CommandError, parse_date_arg, resolve_today};
use crate::domain::selection::SelectionState;
use crate::services::site_config_yaml::load_site_config;

pub fn calendar_command(cmd: Commands, config_path: Option<&str>) -> Result<(), CommandError> {
    if let Commands::Calendar {
        month,
        field,
        check_in,
        today,
    } = cmd
    {
        let month_start = parse_month_arg(&month)?;
        let today = resolve_today(today.as_deref())?;
        let config = load_site_config(config_path)?;
        let rules = config.booking_rules();

        let grid = match field {
            DateField::CheckIn => format_month_grid(month_start, rules.check_in_disabled(today)),
            DateField::CheckOut => {
                let mut selection = SelectionState::new();
                if let Some(check_in) = check_in.as_deref() {
                    selection.pick_check_in(&rules.seasons, parse_date_arg(check_in)?);
                }
                format_month_grid(month_start, selection.check_out_disabled())
            }
        };

        println!("{grid}");
    }
    Ok(())
}

fn parse_month_arg(value: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(&format!("{}-01", value.trim()), "%Y-%m-%d")
        .map_err(|_| CommandError::InvalidMonth(value.to_string()))
}

use crate::commands::base_commands::Commands;
use crate::commands::report_format::{CheckInReport, format_check_in_report};
use crate::commands::{CommandError, parse_date_arg, resolve_today};
use crate::domain::locale::Locale;
use crate::domain::selection::SelectionState;
use crate::services::site_config_yaml::load_site_config;

pub fn check_in_command(cmd: Commands, config_path: Option<&str>) -> Result<(), CommandError> {
    if let Commands::CheckIn { date, today, locale } = cmd {
        let locale: Locale = locale.parse()?;
        let picked = parse_date_arg(&date)?;
        let today = resolve_today(today.as_deref())?;
        let config = load_site_config(config_path)?;
        let rules = config.booking_rules();

        let mut selection = SelectionState::new();
        let check_in = selection.pick_check_in(&rules.seasons, picked);
        let report = CheckInReport {
            picked,
            check_in,
            check_out: selection.check_out(),
            is_winter: selection.is_winter(),
            blocked: rules.pick_block_reason(today, picked, check_in),
        };

        println!("{}", format_check_in_report(&report, locale));
    }
    Ok(())
}

use crate::commands::CommandError;
use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_pricing_table;
use crate::domain::locale::Locale;
use crate::services::site_config_yaml::load_site_config;

pub fn pricing_command(cmd: Commands, config_path: Option<&str>) -> Result<(), CommandError> {
    if let Commands::Pricing { locale } = cmd {
        let locale: Locale = locale.parse()?;
        let config = load_site_config(config_path)?;
        println!("{}", format_pricing_table(&config.pricing, locale));
    }
    Ok(())
}

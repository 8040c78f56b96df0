use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    /// Site config YAML (seasons, pricing table, inquiry endpoints)
    #[arg(short, long, global = true)]
    pub config: Option<String>,
    /// Log informational messages to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DateField {
    CheckIn,
    CheckOut,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Normalize a check-in pick and show the resulting stay
    CheckIn {
        /// Picked check-in date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,
        /// Reference date for past-date rules (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        today: Option<String>,
        /// Language tag for output (sv, en, de)
        #[arg(short, long, default_value = "sv")]
        locale: String,
    },
    /// Show which days of a month can be picked
    Calendar {
        /// Month to show (YYYY-MM)
        #[arg(short, long)]
        month: String,
        /// Field whose rules are applied
        #[arg(short, long, value_enum, default_value_t = DateField::CheckIn)]
        field: DateField,
        /// Check-in date the check-out calendar depends on (YYYY-MM-DD)
        #[arg(long)]
        check_in: Option<String>,
        /// Reference date for past-date rules (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        today: Option<String>,
    },
    /// Print the winter pricing table
    Pricing {
        /// Language tag for output (sv, en, de)
        #[arg(short, long, default_value = "sv")]
        locale: String,
    },
    /// Send a booking inquiry to the property owner
    Inquire {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        message: String,
        /// Requested check-in date (YYYY-MM-DD)
        #[arg(long)]
        check_in: Option<String>,
        /// Requested check-out date (YYYY-MM-DD), derived in winter
        #[arg(long)]
        check_out: Option<String>,
        /// Reference date for past-date rules (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        today: Option<String>,
        /// Language tag for the inquiry and output (sv, en, de)
        #[arg(short, long, default_value = "sv")]
        locale: String,
        /// Relay URL, overrides the configured endpoint
        #[arg(short, long)]
        endpoint: Option<String>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_in_defaults_to_swedish_and_no_fixed_today() {
        let args = CliArgs::parse_from(["cabin_booking", "check-in", "-d", "2026-01-07"]);

        if let Commands::CheckIn { date, today, locale } = args.command {
            assert_eq!(date, "2026-01-07");
            assert_eq!(today, None);
            assert_eq!(locale, "sv");
        } else {
            panic!("expected check-in command");
        }
    }

    #[test]
    fn calendar_defaults_to_check_in_field() {
        let args = CliArgs::parse_from(["cabin_booking", "calendar", "-m", "2026-04"]);

        if let Commands::Calendar { field, check_in, .. } = args.command {
            assert_eq!(field, DateField::CheckIn);
            assert_eq!(check_in, None);
        } else {
            panic!("expected calendar command");
        }
    }

    #[test]
    fn config_flag_is_accepted_after_the_subcommand() {
        let args = CliArgs::parse_from(["cabin_booking", "pricing", "--config", "site.yaml", "-l", "de"]);

        assert_eq!(args.config.as_deref(), Some("site.yaml"));
        assert!(matches!(args.command, Commands::Pricing { locale } if locale == "de"));
    }
}

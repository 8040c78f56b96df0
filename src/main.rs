use std::io;
use std::process::ExitCode;

use cabin_booking::commands::base_commands::{CliArgs, Commands};
use cabin_booking::commands::calendar_cmd::calendar_command;
use cabin_booking::commands::check_in_cmd::check_in_command;
use cabin_booking::commands::inquire_cmd::inquire_command;
use cabin_booking::commands::pricing_cmd::pricing_command;
use cabin_booking::logging::setup_logging;
use clap::{CommandFactory, Parser};

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    setup_logging(args.verbose);
    let config = args.config.as_deref();

    let result = match args.command {
        cmd @ Commands::CheckIn { .. } => check_in_command(cmd, config),
        cmd @ Commands::Calendar { .. } => calendar_command(cmd, config),
        cmd @ Commands::Pricing { .. } => pricing_command(cmd, config),
        cmd @ Commands::Inquire { .. } => inquire_command(cmd, config).await,
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut CliArgs::command(), "cabin_booking", &mut io::stdout());
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

//! hgtea CLI
//!
//! Command-line interface for browsing a tea catalog and tasting journal
//! published as two spreadsheets.

mod cli_types;
mod commands;
mod display;
mod error;
mod logging;
mod spinner;

pub(crate) use error::CliError;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};

/// Log an empty line through the logger so it honors `--quiet` and `--logfile`.
pub(crate) fn log_blank() {
    log::info!("");
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    if let Err(e) = run(&cli) {
        log::error!("{e}");
        log::logger().flush();
        std::process::exit(1);
    }
    log::logger().flush();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Commands::Ls {
            filter,
            fields,
            table,
        } => {
            let settings = commands::load_settings(cli)?;
            let catalog = commands::load_catalog(&settings, cli.quiet)?;
            commands::run_ls(&catalog, &settings, filter, fields.as_deref(), table)
        }
        Commands::Log {
            filter,
            fields,
            table,
        } => {
            let settings = commands::load_settings(cli)?;
            let catalog = commands::load_catalog(&settings, cli.quiet)?;
            commands::run_log(&catalog, &settings, filter, fields.as_deref(), table)
        }
        Commands::Stats { filter, table } => {
            let settings = commands::load_settings(cli)?;
            let catalog = commands::load_catalog(&settings, cli.quiet)?;
            commands::run_stats(&catalog, &settings, filter, table)
        }
        Commands::Show { id } => {
            let settings = commands::load_settings(cli)?;
            let catalog = commands::load_catalog(&settings, cli.quiet)?;
            commands::run_show(&catalog, *id)
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::run_config_show(cli),
            ConfigAction::Path => {
                commands::run_config_path();
                Ok(())
            }
            ConfigAction::Init { force } => commands::run_config_init(*force),
        },
    }
}

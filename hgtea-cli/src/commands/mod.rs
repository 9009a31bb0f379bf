mod config;
mod journal;
mod ls;
mod show;
mod stats;

pub(crate) use config::{run_config_init, run_config_path, run_config_show};
pub(crate) use journal::run_log;
pub(crate) use ls::run_ls;
pub(crate) use show::run_show;
pub(crate) use stats::run_stats;

use hgtea_core::Catalog;
use hgtea_lib::Settings;

use crate::CliError;
use crate::cli_types::{Cli, TableArgs};
use crate::display::TableStyle;
use crate::spinner::Spinner;

/// Settings file, then environment, then command-line flags.
pub(crate) fn load_settings(cli: &Cli) -> Result<Settings, CliError> {
    let mut settings = Settings::load()?;
    cli.apply_to(&mut settings);
    Ok(settings)
}

/// Fetch both sheets and build the catalog behind a spinner.
pub(crate) fn load_catalog(settings: &Settings, quiet: bool) -> Result<Catalog, CliError> {
    let spinner = Spinner::start("Loading tea sheets...", quiet);
    let result = hgtea_lib::load_catalog(settings);
    spinner.finish();

    let catalog = result?;
    log::debug!(
        "Loaded {} teas and {} journal entries",
        catalog.len(),
        catalog.entry_count()
    );
    Ok(catalog)
}

/// Flags win over the settings file.
pub(crate) fn table_style(settings: &Settings, args: &TableArgs) -> TableStyle {
    TableStyle {
        porcelain: args.porcelain || settings.porcelain,
        delimiter: args
            .delimiter
            .clone()
            .unwrap_or_else(|| settings.delimiter.clone()),
    }
}

/// Column names from `--fields`, or the command's configured defaults.
fn field_names<'a>(
    fields: Option<&'a [String]>,
    settings: &'a Settings,
    command: &str,
) -> &'a [String] {
    fields
        .or_else(|| settings.fields_for(command))
        .unwrap_or_default()
}

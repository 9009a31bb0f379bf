use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use hgtea_lib::settings::{JOURNAL_URL_VAR, PROXY_VAR, TEAS_URL_VAR};
use hgtea_lib::{Settings, settings_path};

use crate::CliError;
use crate::cli_types::Cli;

use super::load_settings;

/// Where an overridable value came from.
fn source(flag: bool, var: &str) -> String {
    if flag {
        "(flag)".to_string()
    } else if std::env::var(var).is_ok_and(|v| !v.is_empty()) {
        format!("(env: {var})")
    } else {
        String::new()
    }
}

/// Show the effective settings and where they come from.
pub(crate) fn run_config_show(cli: &Cli) -> Result<(), CliError> {
    let path = settings_path();
    let settings = load_settings(cli)?;

    log::info!(
        "{}",
        "hgtea Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();

    let rows = [
        (
            "teas_url",
            settings.sheets.teas_url.clone(),
            source(cli.teas.is_some(), TEAS_URL_VAR),
        ),
        (
            "journal_url",
            settings.sheets.journal_url.clone(),
            source(cli.journal.is_some(), JOURNAL_URL_VAR),
        ),
        (
            "proxy",
            settings.proxy().unwrap_or("(none)").to_string(),
            source(cli.proxy.is_some(), PROXY_VAR),
        ),
        ("delimiter", format!("{:?}", settings.delimiter), String::new()),
        ("porcelain", settings.porcelain.to_string(), String::new()),
        ("fields.ls", settings.fields.ls.join(","), String::new()),
        ("fields.log", settings.fields.log.join(","), String::new()),
    ];

    for (key, value, from) in rows {
        log::info!(
            "  {:<12} {} {}",
            key,
            value,
            from.if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", settings_path().display());
}

/// Write the default settings to the settings file.
pub(crate) fn run_config_init(force: bool) -> Result<(), CliError> {
    let path = settings_path();
    if path.exists() && !force {
        log::warn!("Settings file already exists at {}", path.display());
        log::info!("Use 'hgtea config init --force' to overwrite it.");
        return Ok(());
    }

    Settings::default().save_to(&path)?;
    log::info!(
        "Wrote default settings to {}",
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}

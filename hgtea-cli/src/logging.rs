//! Terminal logger. All command output goes through the `log` macros so
//! `--quiet` and `--logfile` apply to it uniformly.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use owo_colors::OwoColorize;
use owo_colors::Stream::{Stderr, Stdout};

use crate::CliError;

struct CliLogger {
    level: LevelFilter,
    timestamps: bool,
    file: Option<Mutex<File>>,
}

impl CliLogger {
    fn format(&self, record: &Record) -> String {
        let message = record.args().to_string();
        let line = match record.level() {
            Level::Error => format!(
                "{} {message}",
                "error:".if_supports_color(Stderr, |t| t.red())
            ),
            Level::Warn => format!(
                "{} {message}",
                "warning:".if_supports_color(Stderr, |t| t.yellow())
            ),
            Level::Info => message,
            Level::Debug | Level::Trace => {
                format!("{}", message.if_supports_color(Stderr, |t| t.dimmed()))
            }
        };

        if self.timestamps {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            format!("{} {line}", now.if_supports_color(Stdout, |t| t.dimmed()))
        } else {
            line
        }
    }
}

impl Log for CliLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        // Dependencies only get a say for warnings and errors.
        metadata.level() <= self.level
            && (metadata.level() <= Level::Warn || metadata.target().starts_with("hgtea"))
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format(record);

        if record.level() == Level::Info {
            println!("{line}");
        } else {
            eprintln!("{line}");
        }

        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                let _ = writeln!(file, "{}", strip_ansi_escapes::strip_str(&line));
            }
        }
    }

    fn flush(&self) {
        let _ = std::io::stdout().flush();
        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                let _ = file.flush();
            }
        }
    }
}

/// Install the logger. `--quiet` wins over `--verbose`.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let file = logfile
        .map(|path| {
            File::create(path)
                .map(Mutex::new)
                .map_err(|e| CliError::config(format!("Cannot open log file {}: {e}", path.display())))
        })
        .transpose()?;

    log::set_boxed_logger(Box::new(CliLogger {
        level,
        timestamps: verbose && !quiet,
        file,
    }))
    .map_err(|e| CliError::config(e.to_string()))?;
    log::set_max_level(level);
    Ok(())
}

//! User settings (`~/.config/hgtea/settings.toml`).
//!
//! Every key is optional; missing keys fall back to [`Settings::default`].
//! Values are resolved with the priority chain:
//!
//! 1. command-line flags (applied by the CLI)
//! 2. environment variables (`HGTEA_TEAS_URL`, `HGTEA_JOURNAL_URL`, `HGTEA_PROXY`)
//! 3. the settings file
//! 4. built-in defaults

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LibError;

pub const TEAS_URL_VAR: &str = "HGTEA_TEAS_URL";
pub const JOURNAL_URL_VAR: &str = "HGTEA_JOURNAL_URL";
pub const PROXY_VAR: &str = "HGTEA_PROXY";

const DEFAULT_TEAS_URL: &str = "https://docs.google.com/spreadsheets/d/1-U45bMxRE4_n3hKRkTPTWHTkVKC8O3zcSmkjEyYFYOo/pub?output=tsv";
const DEFAULT_JOURNAL_URL: &str = "https://docs.google.com/spreadsheets/d/1pHXWycR9_luPdHm32Fb2P1Pp7l29Vni3uFH_q3TsdbU/pub?output=tsv";

const DEFAULT_LS_FIELDS: &[&str] = &[
    "Id", "Name", "Type", "Year", "Flush", "Origin", "Entries", "Avg", "Median", "Mode",
];
const DEFAULT_LOG_FIELDS: &[&str] = &["Time", "Tea", "Steep Time", "Rating", "Fixins", "Vessel"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Column separator for porcelain output.
    pub delimiter: String,
    /// Print without headers or padding.
    pub porcelain: bool,
    /// Proxy for sheet downloads; empty for a direct connection.
    pub proxy: String,
    pub sheets: SheetSettings,
    pub fields: FieldSettings,
}

/// Locations of the two published sheets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetSettings {
    pub teas_url: String,
    pub journal_url: String,
}

/// Default columns for each listing command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldSettings {
    pub ls: Vec<String>,
    pub log: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            delimiter: "\t".to_string(),
            porcelain: false,
            proxy: String::new(),
            sheets: SheetSettings::default(),
            fields: FieldSettings::default(),
        }
    }
}

impl Default for SheetSettings {
    fn default() -> Self {
        Self {
            teas_url: DEFAULT_TEAS_URL.to_string(),
            journal_url: DEFAULT_JOURNAL_URL.to_string(),
        }
    }
}

impl Default for FieldSettings {
    fn default() -> Self {
        Self {
            ls: DEFAULT_LS_FIELDS.iter().map(|s| s.to_string()).collect(),
            log: DEFAULT_LOG_FIELDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Canonical path to the settings file: `~/.config/hgtea/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("hgtea").join("settings.toml")
}

impl Settings {
    /// Load the settings file (if any) and apply environment overrides.
    pub fn load() -> Result<Self, LibError> {
        let mut settings = Self::load_from(&settings_path())?;
        settings.apply_overrides(|var| std::env::var(var).ok());
        Ok(settings)
    }

    /// Load a settings file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, LibError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents =
            std::fs::read_to_string(path).map_err(|e| LibError::io(path.display(), e))?;
        toml::from_str(&contents)
            .map_err(|e| LibError::settings(format!("{}: {e}", path.display())))
    }

    /// Apply overrides from `lookup` (normally the process environment).
    /// Empty values are ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let lookup = |var: &str| lookup(var).filter(|v| !v.is_empty());
        if let Some(url) = lookup(TEAS_URL_VAR) {
            self.sheets.teas_url = url;
        }
        if let Some(url) = lookup(JOURNAL_URL_VAR) {
            self.sheets.journal_url = url;
        }
        if let Some(proxy) = lookup(PROXY_VAR) {
            self.proxy = proxy;
        }
    }

    /// The proxy to use, if one is configured.
    pub fn proxy(&self) -> Option<&str> {
        Some(self.proxy.as_str()).filter(|p| !p.is_empty())
    }

    /// Default columns for a listing command, if the settings define any.
    pub fn fields_for(&self, command: &str) -> Option<&[String]> {
        match command {
            "ls" => Some(self.fields.ls.as_slice()),
            "log" => Some(self.fields.log.as_slice()),
            _ => None,
        }
    }

    pub fn to_toml(&self) -> Result<String, LibError> {
        toml::to_string_pretty(self).map_err(|e| LibError::settings(e.to_string()))
    }

    /// Write the settings to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), LibError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| LibError::io(parent.display(), e))?;
        }
        let serialized = self.to_toml()?;

        // Write atomically
        let tmp = path.with_extension("toml.tmp");
        std::fs::write(&tmp, serialized).map_err(|e| LibError::io(tmp.display(), e))?;
        std::fs::rename(&tmp, path).map_err(|e| LibError::io(path.display(), e))?;
        Ok(())
    }
}

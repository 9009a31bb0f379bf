//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use hgtea_core::Filter;
use hgtea_lib::Settings;

#[derive(Parser)]
#[command(name = "hgtea")]
#[command(about = "Browse a tea catalog and tasting journal", long_about = None)]
pub(crate) struct Cli {
    /// Proxy for sheet downloads (host:port is treated as SOCKS5)
    #[arg(long, global = true)]
    pub proxy: Option<String>,

    /// Teas sheet location (URL or TSV file)
    #[arg(long, global = true)]
    pub teas: Option<String>,

    /// Journal sheet location (URL or TSV file)
    #[arg(long, global = true)]
    pub journal: Option<String>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Apply the sheet and proxy flags on top of loaded settings.
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(proxy) = &self.proxy {
            settings.proxy = proxy.clone();
        }
        if let Some(teas) = &self.teas {
            settings.sheets.teas_url = teas.clone();
        }
        if let Some(journal) = &self.journal {
            settings.sheets.journal_url = journal.clone();
        }
    }
}

/// Which teas a listing includes.
#[derive(Args, Clone, Debug, Default)]
pub(crate) struct FilterArgs {
    /// Only include teas currently in stock
    #[arg(long)]
    pub stocked: bool,

    /// Only include samples
    #[arg(long)]
    pub samples: bool,

    /// Tea types to include (e.g., black,oolong)
    #[arg(short, long, value_delimiter = ',')]
    pub types: Vec<String>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> Filter {
        let mut filter = Filter::new();
        if self.stocked {
            filter.stocked_only();
        }
        if self.samples {
            filter.samples_only();
        }
        filter.categories(&self.types);
        filter
    }
}

/// How tables are printed.
#[derive(Args, Clone, Debug, Default)]
pub(crate) struct TableArgs {
    /// Print without a header or padding, for scripts
    #[arg(long)]
    pub porcelain: bool,

    /// Column separator in porcelain mode
    #[arg(long)]
    pub delimiter: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List teas in the catalog
    Ls {
        #[command(flatten)]
        filter: FilterArgs,

        /// Columns to print (e.g., Id,Name,Avg)
        #[arg(short, long, value_delimiter = ',')]
        fields: Option<Vec<String>>,

        #[command(flatten)]
        table: TableArgs,
    },

    /// List journal entries in chronological order
    Log {
        #[command(flatten)]
        filter: FilterArgs,

        /// Columns to print (e.g., Time,Tea,Rating)
        #[arg(short, long, value_delimiter = ',')]
        fields: Option<Vec<String>>,

        #[command(flatten)]
        table: TableArgs,
    },

    /// Summarize ratings per tea
    Stats {
        #[command(flatten)]
        filter: FilterArgs,

        #[command(flatten)]
        table: TableArgs,
    },

    /// Show one tea and its journal
    Show {
        /// Tea id
        id: u32,
    },

    /// Inspect or create the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show effective settings and where they come from
    Show,

    /// Print the settings file path
    Path,

    /// Write a settings file with the default values
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
}

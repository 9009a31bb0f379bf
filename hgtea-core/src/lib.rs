//! Tea catalog and tasting journal model.
//!
//! Parses rows from the published catalog and journal sheets into typed
//! values, links journal entries to their teas, and computes rating
//! statistics. This crate performs no I/O; `hgtea-lib` fetches and splits the
//! sheets.

pub mod catalog;
pub mod error;
pub mod filter;
pub mod parse;
pub mod stats;
pub mod types;

pub use catalog::Catalog;
pub use error::{HgTeaError, RowKind};
pub use filter::Filter;
pub use parse::{parse_date_time, parse_entry, parse_fixins, parse_item, parse_steep_duration};
pub use stats::{average_rating, median_rating, mode_rating};
pub use types::*;

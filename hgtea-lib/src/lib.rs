//! Sheet retrieval, settings, and catalog loading for hgtea frontends.

pub mod error;
pub mod settings;
pub mod sheet;
pub mod tsv;

pub use error::LibError;
pub use settings::{Settings, settings_path};
pub use sheet::{SheetSource, fetch_sheet, proxy_url};
pub use tsv::{data_rows, parse_tsv};

use hgtea_core::Catalog;

/// Fetch the teas sheet and then the journal sheet named in `settings`, and
/// build a catalog from their data rows.
pub fn load_catalog(settings: &Settings) -> Result<Catalog, LibError> {
    let proxy = settings.proxy();

    let teas = SheetSource::parse(&settings.sheets.teas_url);
    let teas = data_rows(fetch_sheet(&teas, proxy)?, "teas")?;
    log::debug!("Teas sheet: {} rows", teas.len());

    let journal = SheetSource::parse(&settings.sheets.journal_url);
    let journal = data_rows(fetch_sheet(&journal, proxy)?, "journal")?;
    log::debug!("Journal sheet: {} rows", journal.len());

    let catalog = Catalog::build(teas, journal)?;
    if catalog.unmatched_entries() > 0 {
        log::warn!(
            "{} journal entries reference teas missing from the catalog",
            catalog.unmatched_entries()
        );
    }
    Ok(catalog)
}

use hgtea_core::Catalog;
use hgtea_lib::Settings;

use crate::CliError;
use crate::cli_types::{FilterArgs, TableArgs};
use crate::display::{Align, Table, stat};

use super::table_style;

pub(crate) fn run_stats(
    catalog: &Catalog,
    settings: &Settings,
    filter: &FilterArgs,
    table_args: &TableArgs,
) -> Result<(), CliError> {
    let style = table_style(settings, table_args);
    let items = catalog.items(&filter.to_filter());

    let mut table = Table::new([
        ("Name", Align::Left),
        ("Num", Align::Right),
        ("Avg", Align::Right),
        ("Median", Align::Right),
        ("Mode", Align::Right),
    ]);
    let mut entries = 0;
    for item in items.values() {
        entries += item.entry_count();
        table.push(vec![
            item.to_string(),
            item.entry_count().to_string(),
            stat(item.average(), style.porcelain),
            stat(item.median(), style.porcelain),
            stat(item.mode(), style.porcelain),
        ]);
    }

    table.print(&style);
    if !style.porcelain {
        crate::log_blank();
        log::info!("  Teas:     {:>6}", items.len());
        log::info!("  Entries:  {:>6}", entries);
    }
    Ok(())
}

use hgtea_core::Catalog;
use hgtea_lib::Settings;

use crate::CliError;
use crate::cli_types::{FilterArgs, TableArgs};
use crate::display::{Table, entry_columns};

use super::{field_names, table_style};

/// Print journal entries for the teas passing the filter, oldest first.
pub(crate) fn run_log(
    catalog: &Catalog,
    settings: &Settings,
    filter: &FilterArgs,
    fields: Option<&[String]>,
    table_args: &TableArgs,
) -> Result<(), CliError> {
    let columns = entry_columns(field_names(fields, settings, "log"))?;
    let style = table_style(settings, table_args);

    let mut table = Table::for_entries(&columns);
    for entry in catalog.log(&filter.to_filter()) {
        let tea = catalog.item_by_id(entry.item_id).ok();
        table.push(
            columns
                .iter()
                .map(|column| column.cell(entry, tea))
                .collect(),
        );
    }

    table.print(&style);
    if table.is_empty() && !style.porcelain {
        log::warn!("No journal entries match the filter");
    }
    Ok(())
}

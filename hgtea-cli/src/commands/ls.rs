use hgtea_core::Catalog;
use hgtea_lib::Settings;

use crate::CliError;
use crate::cli_types::{FilterArgs, TableArgs};
use crate::display::{Table, item_columns};

use super::{field_names, table_style};

/// Print the teas passing the filter, ordered by id.
pub(crate) fn run_ls(
    catalog: &Catalog,
    settings: &Settings,
    filter: &FilterArgs,
    fields: Option<&[String]>,
    table_args: &TableArgs,
) -> Result<(), CliError> {
    let columns = item_columns(field_names(fields, settings, "ls"))?;
    let style = table_style(settings, table_args);

    let mut table = Table::for_items(&columns);
    for item in catalog.items(&filter.to_filter()).values() {
        table.push(
            columns
                .iter()
                .map(|column| column.cell(item, style.porcelain))
                .collect(),
        );
    }

    table.print(&style);
    if table.is_empty() && !style.porcelain {
        log::warn!("No teas match the filter");
    }
    Ok(())
}

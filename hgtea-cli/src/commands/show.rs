use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use hgtea_core::{Catalog, Item};

use crate::CliError;
use crate::display::{EntryColumn, Table, TableStyle, format_steep_time, stat, yes_no};

const JOURNAL_COLUMNS: &[EntryColumn] = &[
    EntryColumn::Time,
    EntryColumn::SteepTime,
    EntryColumn::Rating,
    EntryColumn::Fixins,
    EntryColumn::Vessel,
    EntryColumn::Temp,
    EntryColumn::Session,
    EntryColumn::Comments,
];

/// Print every attribute of one tea followed by its journal.
pub(crate) fn run_show(catalog: &Catalog, id: u32) -> Result<(), CliError> {
    let item = catalog.item_by_id(id)?;

    log::info!("{}", item.if_supports_color(Stdout, |t| t.bold()));
    crate::log_blank();
    for (label, value) in attributes(item) {
        if !value.is_empty() {
            log::info!("  {label:<12} {value}");
        }
    }
    crate::log_blank();

    if item.entry_count() == 0 {
        log::info!("No journal entries");
        return Ok(());
    }

    log::info!(
        "{}",
        "Journal".if_supports_color(Stdout, |t| t.bold())
    );
    let mut table = Table::for_entries(JOURNAL_COLUMNS);
    for entry in item.entries() {
        table.push(
            JOURNAL_COLUMNS
                .iter()
                .map(|column| column.cell(entry, Some(item)))
                .collect(),
        );
    }
    table.print(&TableStyle {
        porcelain: false,
        delimiter: String::new(),
    });

    let total: std::time::Duration = item.entries().iter().map(|e| e.steep_duration).sum();
    crate::log_blank();
    log::info!("  Total steep time: {}", format_steep_time(total));
    Ok(())
}

fn attributes(item: &Item) -> Vec<(&'static str, String)> {
    let flush = item
        .pick_period
        .flush
        .map(|f| match f.label() {
            "" => f.code().to_string(),
            label => label.to_string(),
        })
        .unwrap_or_default();
    let purchased = [
        item.purchase.location.as_str(),
        item.purchase.date.as_str(),
    ]
    .iter()
    .filter(|s| !s.is_empty())
    .copied()
    .collect::<Vec<_>>()
    .join(" on ");

    vec![
        ("Id", item.id.to_string()),
        ("Type", item.category.clone()),
        (
            "Year",
            item.pick_period
                .year
                .map(|y| y.to_string())
                .unwrap_or_default(),
        ),
        ("Flush", flush),
        ("Origin", item.origin.to_string()),
        ("Size", item.size.clone()),
        ("Leaf grade", item.leaf_grade.clone()),
        ("Stocked", yes_no(item.storage.stocked)),
        ("Aging", yes_no(item.storage.aging)),
        ("Purchased", purchased),
        (
            "Price",
            item.purchase
                .price
                .map(|p| format!("{p:.2}"))
                .unwrap_or_default(),
        ),
        (
            "Packaging",
            item.purchase
                .packaging
                .map(|p| p.to_string())
                .unwrap_or_default(),
        ),
        ("Entries", item.entry_count().to_string()),
        ("Average", stat(item.average(), false)),
        ("Median", stat(item.median(), false)),
        ("Mode", stat(item.mode(), false)),
    ]
}

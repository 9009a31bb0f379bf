//! Column selection and table rendering for `ls`, `log` and `stats`.

use std::time::Duration;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use hgtea_core::{Entry, Item};

use crate::CliError;

/// Timestamp layout for journal entries, e.g. `02 Mar 16 08:30 -0500`.
const TIME_FORMAT: &str = "%d %b %y %H:%M %z";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Align {
    Left,
    Right,
}

/// A column that `ls` can print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ItemColumn {
    Id,
    Name,
    Type,
    Year,
    Flush,
    Origin,
    Size,
    Entries,
    Avg,
    Median,
    Mode,
    Stocked,
    Aging,
    Price,
    Grade,
}

impl ItemColumn {
    const ALL: &[ItemColumn] = &[
        Self::Id,
        Self::Name,
        Self::Type,
        Self::Year,
        Self::Flush,
        Self::Origin,
        Self::Size,
        Self::Entries,
        Self::Avg,
        Self::Median,
        Self::Mode,
        Self::Stocked,
        Self::Aging,
        Self::Price,
        Self::Grade,
    ];

    pub(crate) fn header(self) -> &'static str {
        match self {
            Self::Id => "Id",
            Self::Name => "Name",
            Self::Type => "Type",
            Self::Year => "Year",
            Self::Flush => "Flush",
            Self::Origin => "Origin",
            Self::Size => "Size",
            Self::Entries => "Entries",
            Self::Avg => "Avg",
            Self::Median => "Median",
            Self::Mode => "Mode",
            Self::Stocked => "Stocked",
            Self::Aging => "Aging",
            Self::Price => "Price",
            Self::Grade => "Grade",
        }
    }

    fn align(self) -> Align {
        match self {
            Self::Id
            | Self::Year
            | Self::Flush
            | Self::Origin
            | Self::Size
            | Self::Entries
            | Self::Avg
            | Self::Median
            | Self::Mode
            | Self::Price => Align::Right,
            _ => Align::Left,
        }
    }

    pub(crate) fn cell(self, item: &Item, porcelain: bool) -> String {
        match self {
            Self::Id => item.id.to_string(),
            Self::Name => item.name.clone(),
            Self::Type => item.category.clone(),
            Self::Year => item
                .pick_period
                .year
                .filter(|&y| y > 0)
                .map(|y| y.to_string())
                .unwrap_or_default(),
            Self::Flush => item
                .pick_period
                .flush
                .map(|f| f.label().to_string())
                .unwrap_or_default(),
            Self::Origin => item.origin.to_string(),
            Self::Size => item.size.clone(),
            Self::Entries => item.entry_count().to_string(),
            Self::Avg => stat(item.average(), porcelain),
            Self::Median => stat(item.median(), porcelain),
            Self::Mode => stat(item.mode(), porcelain),
            Self::Stocked => yes_no(item.storage.stocked),
            Self::Aging => yes_no(item.storage.aging),
            Self::Price => item
                .purchase
                .price
                .map(|p| format!("{p:.2}"))
                .unwrap_or_default(),
            Self::Grade => item.leaf_grade.clone(),
        }
    }
}

/// A column that `log` and `show` can print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EntryColumn {
    Time,
    Tea,
    SteepTime,
    Rating,
    Fixins,
    Vessel,
    Temp,
    Session,
    Comments,
}

impl EntryColumn {
    const ALL: &[EntryColumn] = &[
        Self::Time,
        Self::Tea,
        Self::SteepTime,
        Self::Rating,
        Self::Fixins,
        Self::Vessel,
        Self::Temp,
        Self::Session,
        Self::Comments,
    ];

    pub(crate) fn header(self) -> &'static str {
        match self {
            Self::Time => "Time",
            Self::Tea => "Tea",
            Self::SteepTime => "Steep Time",
            Self::Rating => "Rating",
            Self::Fixins => "Fixins",
            Self::Vessel => "Vessel",
            Self::Temp => "Temp",
            Self::Session => "Session",
            Self::Comments => "Comments",
        }
    }

    fn align(self) -> Align {
        match self {
            Self::SteepTime | Self::Rating | Self::Temp => Align::Right,
            _ => Align::Left,
        }
    }

    /// `tea` is the entry's item; the catalog only links entries whose item
    /// exists, so it is normally present.
    pub(crate) fn cell(self, entry: &Entry, tea: Option<&Item>) -> String {
        match self {
            Self::Time => entry.timestamp.format(TIME_FORMAT).to_string(),
            Self::Tea => tea.map(|t| t.to_string()).unwrap_or_default(),
            Self::SteepTime => format_steep_time(entry.steep_duration),
            Self::Rating => entry.rating.to_string(),
            Self::Fixins => entry
                .fixins
                .iter()
                .map(|f| f.label())
                .collect::<Vec<_>>()
                .join(", "),
            Self::Vessel => entry
                .vessel
                .map(|v| v.label().to_string())
                .unwrap_or_default(),
            Self::Temp => format!("{}°", entry.steep_temperature),
            Self::Session => entry.session_instance.clone(),
            Self::Comments => entry.comments.clone(),
        }
    }
}

/// Look up columns by header name, case-insensitively.
fn resolve<C: Copy>(
    names: &[String],
    all: &[C],
    header: impl Fn(C) -> &'static str,
) -> Result<Vec<C>, CliError> {
    names
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(|name| {
            all.iter()
                .copied()
                .find(|&c| header(c).eq_ignore_ascii_case(name))
                .ok_or_else(|| {
                    let available: Vec<&str> = all.iter().map(|&c| header(c)).collect();
                    CliError::unknown_field(name, &available)
                })
        })
        .collect()
}

pub(crate) fn item_columns(names: &[String]) -> Result<Vec<ItemColumn>, CliError> {
    resolve(names, ItemColumn::ALL, ItemColumn::header)
}

pub(crate) fn entry_columns(names: &[String]) -> Result<Vec<EntryColumn>, CliError> {
    resolve(names, EntryColumn::ALL, EntryColumn::header)
}

/// Absent statistics are blank for scripts and `-` for people.
pub(crate) fn stat(value: Option<u32>, porcelain: bool) -> String {
    match value {
        Some(v) => v.to_string(),
        None if porcelain => String::new(),
        None => "-".to_string(),
    }
}

pub(crate) fn yes_no(flag: bool) -> String {
    let text = if flag { "yes" } else { "no" };
    text.to_string()
}

/// Format a steep time as hours, minutes and seconds, e.g. `4m20s` or `1m30.5s`.
pub(crate) fn format_steep_time(duration: Duration) -> String {
    let total = duration.as_secs();
    let (hours, minutes, seconds) = (total / 3600, (total / 60) % 60, total % 60);

    let mut secs = seconds.to_string();
    let millis = duration.subsec_millis();
    if millis > 0 {
        let fraction = format!("{millis:03}");
        secs.push('.');
        secs.push_str(fraction.trim_end_matches('0'));
    }

    if hours > 0 {
        format!("{hours}h{minutes}m{secs}s")
    } else if minutes > 0 {
        format!("{minutes}m{secs}s")
    } else {
        format!("{secs}s")
    }
}

/// Output options shared by every table.
#[derive(Debug, Clone)]
pub(crate) struct TableStyle {
    pub porcelain: bool,
    pub delimiter: String,
}

/// Rows of already-formatted cells.
#[derive(Debug, Clone, Default)]
pub(crate) struct Table {
    headers: Vec<&'static str>,
    aligns: Vec<Align>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub(crate) fn new(columns: impl IntoIterator<Item = (&'static str, Align)>) -> Self {
        let (headers, aligns) = columns.into_iter().unzip();
        Self {
            headers,
            aligns,
            rows: Vec::new(),
        }
    }

    pub(crate) fn for_items(columns: &[ItemColumn]) -> Self {
        Self::new(columns.iter().map(|c| (c.header(), c.align())))
    }

    pub(crate) fn for_entries(columns: &[EntryColumn]) -> Self {
        Self::new(columns.iter().map(|c| (c.header(), c.align())))
    }

    pub(crate) fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render to lines. In pretty mode the first line is the header.
    pub(crate) fn render(&self, style: &TableStyle) -> Vec<String> {
        if style.porcelain {
            return self
                .rows
                .iter()
                .map(|row| row.join(&style.delimiter))
                .collect();
        }

        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let header = self.headers.iter().map(|h| h.to_string()).collect::<Vec<_>>();
        std::iter::once(&header)
            .chain(&self.rows)
            .map(|row| self.pad_row(row, &widths))
            .collect()
    }

    fn pad_row(&self, row: &[String], widths: &[usize]) -> String {
        let cells: Vec<String> = row
            .iter()
            .zip(widths)
            .zip(&self.aligns)
            .map(|((cell, &width), align)| match align {
                Align::Left => format!("{cell:<width$}"),
                Align::Right => format!("{cell:>width$}"),
            })
            .collect();
        cells.join("  ").trim_end().to_string()
    }

    /// Log the rendered table, with a bold header in pretty mode.
    pub(crate) fn print(&self, style: &TableStyle) {
        let mut lines = self.render(style).into_iter();
        if !style.porcelain {
            if let Some(header) = lines.next() {
                log::info!("{}", header.if_supports_color(Stdout, |t| t.bold()));
            }
        }
        for line in lines {
            log::info!("{line}");
        }
    }
}

#[cfg(test)]
#[path = "tests/display_tests.rs"]
mod tests;

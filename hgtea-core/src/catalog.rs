//! In-memory catalog linking journal entries to their teas.

use std::collections::{BTreeMap, HashMap};

use crate::error::HgTeaError;
use crate::filter::Filter;
use crate::parse::{parse_entry, parse_item};
use crate::types::{Entry, Item, insert_chronologically};

/// All teas plus a chronological index of every journal entry that belongs
/// to one of them.
///
/// Built once and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: HashMap<u32, Item>,
    log: Vec<Entry>,
    unmatched_entries: usize,
}

impl Catalog {
    /// Build a catalog from the data rows of both sheets (headers already
    /// removed).
    ///
    /// Any malformed row aborts the build. Journal rows that reference an
    /// unknown tea are skipped.
    pub fn build<S, I, E>(item_rows: I, entry_rows: E) -> Result<Self, HgTeaError>
    where
        S: AsRef<str>,
        I: IntoIterator,
        I::Item: AsRef<[S]>,
        E: IntoIterator,
        E::Item: AsRef<[S]>,
    {
        let items = item_rows
            .into_iter()
            .enumerate()
            .map(|(n, row)| {
                parse_item(row.as_ref()).inspect_err(|e| log::debug!("Item row {}: {e}", n + 1))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let entries = entry_rows
            .into_iter()
            .enumerate()
            .map(|(n, row)| {
                parse_entry(row.as_ref())
                    .inspect_err(|e| log::debug!("Journal row {}: {e}", n + 1))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_entities(items, entries))
    }

    /// Build a catalog from already-parsed values.
    pub fn from_entities(
        items: impl IntoIterator<Item = Item>,
        entries: impl IntoIterator<Item = Entry>,
    ) -> Self {
        let mut catalog = Self::default();

        for item in items {
            let id = item.id;
            if catalog.items.insert(id, item).is_some() {
                log::warn!("Duplicate tea id {id}; keeping the later row");
            }
        }

        for entry in entries {
            catalog.link(entry);
        }

        log::debug!(
            "Catalog built: {} teas, {} journal entries, {} unmatched",
            catalog.items.len(),
            catalog.log.len(),
            catalog.unmatched_entries,
        );
        catalog
    }

    fn link(&mut self, entry: Entry) {
        let Some(item) = self.items.get_mut(&entry.item_id) else {
            log::warn!(
                "Skipping journal entry at {} for unknown tea id {}",
                entry.timestamp,
                entry.item_id,
            );
            self.unmatched_entries += 1;
            return;
        };
        item.add_entry(entry.clone());
        insert_chronologically(&mut self.log, entry);
    }

    /// Teas passing `filter`, keyed and ordered by id.
    pub fn items(&self, filter: &Filter) -> BTreeMap<u32, &Item> {
        self.items
            .iter()
            .filter(|(_, item)| filter.matches(item))
            .map(|(&id, item)| (id, item))
            .collect()
    }

    pub fn item_by_id(&self, id: u32) -> Result<&Item, HgTeaError> {
        self.items.get(&id).ok_or(HgTeaError::NotFound(id))
    }

    /// Journal entries in chronological order, limited to teas passing
    /// `filter`.
    pub fn log(&self, filter: &Filter) -> Vec<&Entry> {
        self.log
            .iter()
            .filter(|entry| {
                self.items
                    .get(&entry.item_id)
                    .is_some_and(|item| filter.matches(item))
            })
            .collect()
    }

    /// Number of teas.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of linked journal entries.
    pub fn entry_count(&self) -> usize {
        self.log.len()
    }

    /// Journal rows dropped because their tea id was not in the catalog.
    pub fn unmatched_entries(&self) -> usize {
        self.unmatched_entries
    }
}

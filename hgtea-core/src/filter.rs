//! Read-time predicates for catalog queries.

use std::collections::HashSet;

use crate::types::Item;

/// Query-time predicate over catalog items.
///
/// Built fresh for each query and never modifies the catalog.
///
/// ```
/// use hgtea_core::Filter;
///
/// let mut filter = Filter::new();
/// filter.stocked_only().categories(["Black", "", "Oolong"]);
/// assert!(filter.is_stocked_only());
/// assert_eq!(filter.category_count(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Filter {
    stocked_only: bool,
    samples_only: bool,
    categories: HashSet<String>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only match teas currently in stock.
    pub fn stocked_only(&mut self) -> &mut Self {
        self.stocked_only = true;
        self
    }

    /// Only match teas whose size marks them as a sample.
    pub fn samples_only(&mut self) -> &mut Self {
        self.samples_only = true;
        self
    }

    /// Allow one category, compared case-insensitively.
    pub fn category(&mut self, name: impl AsRef<str>) -> &mut Self {
        self.categories.insert(name.as_ref().to_lowercase());
        self
    }

    /// Allow several categories. Empty names are ignored, which makes this
    /// safe to feed from a split comma list.
    pub fn categories<I>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for name in names {
            if !name.as_ref().is_empty() {
                self.category(name);
            }
        }
        self
    }

    pub fn is_stocked_only(&self) -> bool {
        self.stocked_only
    }

    pub fn is_samples_only(&self) -> bool {
        self.samples_only
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn matches(&self, item: &Item) -> bool {
        if self.stocked_only && !item.storage.stocked {
            return false;
        }
        if self.samples_only && !item.is_sample() {
            return false;
        }
        self.categories.is_empty() || self.categories.contains(&item.category.to_lowercase())
    }
}

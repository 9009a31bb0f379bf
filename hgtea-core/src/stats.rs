//! Rating statistics over a tea's journal entries.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::types::Entry;

/// Truncating integer mean. Needs at least one rating.
pub fn average_rating(ratings: &[u32]) -> Option<u32> {
    if ratings.is_empty() {
        return None;
    }
    let total: u64 = ratings.iter().map(|&r| u64::from(r)).sum();
    Some((total / ratings.len() as u64) as u32)
}

/// Middle rating, or the truncated mean of the two middle ratings for an
/// even count. Needs at least two ratings.
pub fn median_rating(ratings: &[u32]) -> Option<u32> {
    if ratings.len() < 2 {
        return None;
    }
    let mut sorted = ratings.to_vec();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        let pair = u64::from(sorted[mid - 1]) + u64::from(sorted[mid]);
        Some((pair / 2) as u32)
    } else {
        Some(sorted[mid])
    }
}

/// Most frequent rating; the lowest rating wins a tie.
pub fn mode_rating(ratings: &[u32]) -> Option<u32> {
    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for &rating in ratings {
        *counts.entry(rating).or_default() += 1;
    }

    let mut best: Option<(u32, usize)> = None;
    for (rating, count) in counts {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((rating, count)),
        }
    }
    best.map(|(rating, _)| rating)
}

/// Memoized statistics for one item. Reset whenever the item gains an entry.
#[derive(Debug, Clone, Default)]
pub(crate) struct StatsCache {
    average: OnceLock<Option<u32>>,
    median: OnceLock<Option<u32>>,
    mode: OnceLock<Option<u32>>,
}

impl StatsCache {
    pub(crate) fn average(&self, entries: &[Entry]) -> Option<u32> {
        *self.average.get_or_init(|| average_rating(&ratings(entries)))
    }

    pub(crate) fn median(&self, entries: &[Entry]) -> Option<u32> {
        *self.median.get_or_init(|| median_rating(&ratings(entries)))
    }

    pub(crate) fn mode(&self, entries: &[Entry]) -> Option<u32> {
        *self.mode.get_or_init(|| mode_rating(&ratings(entries)))
    }

    pub(crate) fn invalidate(&mut self) {
        *self = Self::default();
    }
}

fn ratings(entries: &[Entry]) -> Vec<u32> {
    entries.iter().map(|e| e.rating).collect()
}

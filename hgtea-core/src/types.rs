//! Data model types for the tea catalog and tasting journal.
//!
//! These types mirror the two published sheets: one row per tea in the
//! catalog sheet, one row per tasting in the journal sheet.

use std::fmt;
use std::time::Duration;

use chrono::DateTime;
use chrono_tz::Tz;

use crate::stats::StatsCache;

/// Zone every journal timestamp is anchored to, regardless of where the
/// sheet was edited.
pub const REFERENCE_TZ: Tz = chrono_tz::America::New_York;

/// Placeholder temperature (°F) for journal rows that leave it blank.
pub const DEFAULT_STEEP_TEMPERATURE: u32 = 212;

// ── Flush ───────────────────────────────────────────────────────────────────

/// Harvest-stage code for a tea's picking period.
///
/// The sheet stores flushes as decimal numbers so that in-between harvests
/// (1.5) can be expressed. Codes outside the known set are kept as-is and
/// render with an empty label.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Flush(f64);

impl Flush {
    pub const FIRST: Flush = Flush(1.0);
    pub const IN_BETWEEN: Flush = Flush(1.5);
    pub const SECOND: Flush = Flush(2.0);
    pub const MONSOON: Flush = Flush(3.0);
    pub const AUTUMN: Flush = Flush(4.0);

    pub fn from_code(code: f64) -> Self {
        Self(code)
    }

    pub fn code(&self) -> f64 {
        self.0
    }

    /// Human-readable name, or `""` for unrecognized codes.
    pub fn label(&self) -> &'static str {
        if *self == Self::FIRST {
            "First"
        } else if *self == Self::IN_BETWEEN {
            "InBetween"
        } else if *self == Self::SECOND {
            "Second"
        } else if *self == Self::MONSOON {
            "Monsoon"
        } else if *self == Self::AUTUMN {
            "Autumn"
        } else {
            ""
        }
    }
}

impl fmt::Display for Flush {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

// ── Vessel ──────────────────────────────────────────────────────────────────

/// Container a tea was steeped in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vessel {
    FrenchPress,
    ShipiaoYixing,
    TeazerTumbler,
    TeaStick,
    MeshSpoon,
    SaucePan,
    Cup,
    Bowl,
    Gaiwan,
    Other,
    /// A code the journal uses that this build does not know about.
    Unrecognized(u32),
}

impl Vessel {
    pub fn from_code(code: u32) -> Self {
        match code {
            0 => Self::FrenchPress,
            1 => Self::ShipiaoYixing,
            2 => Self::TeazerTumbler,
            3 => Self::TeaStick,
            4 => Self::MeshSpoon,
            5 => Self::SaucePan,
            6 => Self::Cup,
            7 => Self::Bowl,
            8 => Self::Gaiwan,
            9 => Self::Other,
            other => Self::Unrecognized(other),
        }
    }

    pub fn code(&self) -> u32 {
        match self {
            Self::FrenchPress => 0,
            Self::ShipiaoYixing => 1,
            Self::TeazerTumbler => 2,
            Self::TeaStick => 3,
            Self::MeshSpoon => 4,
            Self::SaucePan => 5,
            Self::Cup => 6,
            Self::Bowl => 7,
            Self::Gaiwan => 8,
            Self::Other => 9,
            Self::Unrecognized(code) => *code,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FrenchPress => "French Press",
            Self::ShipiaoYixing => "Shipiao Yixing",
            Self::TeazerTumbler => "Tea-zer Tumbler",
            Self::TeaStick => "Tea stick",
            Self::MeshSpoon => "Mesh spoon",
            Self::SaucePan => "Sauce pan",
            Self::Cup => "Cup",
            Self::Bowl => "Bowl",
            Self::Gaiwan => "Gaiwan",
            Self::Other => "Other",
            Self::Unrecognized(_) => "",
        }
    }
}

impl fmt::Display for Vessel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

// ── Fixin ───────────────────────────────────────────────────────────────────

/// Something added to the cup after steeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixin {
    Milk,
    Cream,
    HalfAndHalf,
    Sugar,
    BrownSugar,
    RawSugar,
    Honey,
    VanillaExtract,
    VanillaBean,
    Unrecognized(u32),
}

impl Fixin {
    pub fn from_code(code: u32) -> Self {
        match code {
            0 => Self::Milk,
            1 => Self::Cream,
            2 => Self::HalfAndHalf,
            3 => Self::Sugar,
            4 => Self::BrownSugar,
            5 => Self::RawSugar,
            6 => Self::Honey,
            7 => Self::VanillaExtract,
            8 => Self::VanillaBean,
            other => Self::Unrecognized(other),
        }
    }

    pub fn code(&self) -> u32 {
        match self {
            Self::Milk => 0,
            Self::Cream => 1,
            Self::HalfAndHalf => 2,
            Self::Sugar => 3,
            Self::BrownSugar => 4,
            Self::RawSugar => 5,
            Self::Honey => 6,
            Self::VanillaExtract => 7,
            Self::VanillaBean => 8,
            Self::Unrecognized(code) => *code,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Milk => "Milk",
            Self::Cream => "Cream",
            Self::HalfAndHalf => "Half & half",
            Self::Sugar => "Sugar",
            Self::BrownSugar => "Brown sugar",
            Self::RawSugar => "Raw sugar",
            Self::Honey => "Honey",
            Self::VanillaExtract => "Vanilla extract",
            Self::VanillaBean => "Vanilla bean",
            Self::Unrecognized(_) => "",
        }
    }
}

impl fmt::Display for Fixin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

// ── Entry ───────────────────────────────────────────────────────────────────

/// One tasting session recorded in the journal.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Id of the tea this tasting belongs to.
    pub item_id: u32,
    pub timestamp: DateTime<Tz>,
    /// Observed range is 0 through 4.
    pub rating: u32,
    pub comments: String,
    pub steep_duration: Duration,
    pub vessel: Option<Vessel>,
    /// Degrees Fahrenheit.
    pub steep_temperature: u32,
    /// Groups tastings that were brewed together (e.g. multiple infusions).
    pub session_instance: String,
    pub fixins: Vec<Fixin>,
}

/// Fixins are compared by count only; the journal does not keep them in a
/// stable order.
impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.item_id == other.item_id
            && self.timestamp == other.timestamp
            && self.rating == other.rating
            && self.comments == other.comments
            && self.steep_duration.as_nanos() == other.steep_duration.as_nanos()
            && self.vessel == other.vessel
            && self.steep_temperature == other.steep_temperature
            && self.session_instance == other.session_instance
            && self.fixins.len() == other.fixins.len()
    }
}

// ── Item ────────────────────────────────────────────────────────────────────

/// Where a tea was grown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Origin {
    pub country: String,
    pub region: String,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = if self.region.is_empty() {
            self.country.clone()
        } else {
            format!("{}, {}", self.region, self.country)
        };
        f.pad(&text)
    }
}

/// Harvest year and flush, when the sheet records them.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PickPeriod {
    pub year: Option<i32>,
    pub flush: Option<Flush>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StorageState {
    pub stocked: bool,
    pub aging: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PurchaseInfo {
    pub location: String,
    /// Kept as written in the sheet; not parsed.
    pub date: String,
    pub price: Option<f64>,
    pub packaging: Option<i32>,
}

/// A tea in the catalog, together with its journal entries.
///
/// Entries are kept sorted by timestamp. Rating statistics are computed on
/// first read and recomputed after [`Item::add_entry`].
#[derive(Debug, Clone, Default)]
pub struct Item {
    pub id: u32,
    pub name: String,
    /// Free-text classification ("Black", "Green", "Oolong", ...).
    pub category: String,
    pub pick_period: PickPeriod,
    pub origin: Origin,
    pub storage: StorageState,
    pub purchase: PurchaseInfo,
    pub size: String,
    pub leaf_grade: String,
    entries: Vec<Entry>,
    stats: StatsCache,
}

impl Item {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Default::default()
        }
    }

    /// Insert an entry, keeping entries ordered by timestamp.
    ///
    /// Entries with equal timestamps stay in the order they were added.
    pub fn add_entry(&mut self, entry: Entry) {
        insert_chronologically(&mut self.entries, entry);
        self.stats.invalidate();
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Truncated mean rating; `None` without entries.
    pub fn average(&self) -> Option<u32> {
        self.stats.average(&self.entries)
    }

    /// Median rating; `None` with fewer than two entries.
    pub fn median(&self) -> Option<u32> {
        self.stats.median(&self.entries)
    }

    /// Most frequent rating (lowest wins ties); `None` without entries.
    pub fn mode(&self) -> Option<u32> {
        self.stats.mode(&self.entries)
    }

    /// Whether the size column marks this as a sample.
    pub fn is_sample(&self) -> bool {
        self.size.to_lowercase().contains("sample")
    }
}

/// Compares the catalog attributes only; journal entries and cached
/// statistics are ignored.
impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.category == other.category
            && self.pick_period == other.pick_period
            && self.origin == other.origin
            && self.storage == other.storage
            && self.purchase == other.purchase
            && self.size == other.size
            && self.leaf_grade == other.leaf_grade
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self.pick_period.year {
            Some(year) if year > 0 => format!("{year} {}", self.name),
            _ => self.name.clone(),
        };
        f.pad(&text)
    }
}

/// Insert after every entry whose timestamp is not later than `entry`'s.
pub(crate) fn insert_chronologically(entries: &mut Vec<Entry>, entry: Entry) {
    let pos = entries.partition_point(|e| e.timestamp <= entry.timestamp);
    entries.insert(pos, entry);
}

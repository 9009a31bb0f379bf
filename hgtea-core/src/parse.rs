//! Row parsers for the catalog and journal sheets.
//!
//! Each parser takes one already-split row. Empty numeric cells are treated
//! as absent; a non-empty cell that fails to convert rejects the whole row.
//!
//! Catalog columns used (0-indexed):
//! ```text
//!  2 id        3 name      4 type      5 region    6 year      7 flush
//!  8 bought at 9 bought on 10 price   14 country  15 grade    18 size
//! 19 stocked  20 aging    21 packaging
//! ```
//!
//! Journal columns used:
//! ```text
//!  1 date   2 time   3 tea id   4 rating   5 comments   7 steep time
//!  8 vessel 9 temperature   10 session   11 fixins
//! ```

use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, TimeDelta, TimeZone};
use chrono_tz::Tz;

use crate::error::{HgTeaError, RowKind};
use crate::types::{
    DEFAULT_STEEP_TEMPERATURE, Entry, Fixin, Flush, Item, Origin, PickPeriod, PurchaseInfo,
    REFERENCE_TZ, StorageState, Vessel,
};

/// Minimum number of columns in a catalog row.
pub const ITEM_COLUMNS: usize = 22;

/// Minimum number of columns in a journal row. The fixins column just past
/// this is optional.
pub const ENTRY_COLUMNS: usize = 11;

const NANOS_PER_SECOND: u128 = 1_000_000_000;

/// Parse one catalog row into an [`Item`] with no entries.
pub fn parse_item<S: AsRef<str>>(fields: &[S]) -> Result<Item, HgTeaError> {
    if fields.len() < ITEM_COLUMNS {
        return Err(HgTeaError::structural(
            RowKind::Item,
            ITEM_COLUMNS,
            fields.len(),
        ));
    }
    let field = |i: usize| fields[i].as_ref();

    let mut item = Item::new(required("tea id", field(2))?, field(3));
    item.category = field(4).to_string();
    item.pick_period = PickPeriod {
        year: optional("year", field(6))?,
        flush: optional::<f64>("flush", field(7))?.map(Flush::from_code),
    };
    item.origin = Origin {
        country: field(14).to_string(),
        region: field(5).to_string(),
    };
    item.storage = StorageState {
        stocked: field(19) == "TRUE",
        aging: field(20) == "TRUE",
    };
    item.purchase = PurchaseInfo {
        location: field(8).to_string(),
        date: field(9).to_string(),
        price: optional("purchase price", field(10))?,
        packaging: optional("packaging", field(21))?,
    };
    item.size = field(18).to_string();
    item.leaf_grade = field(15).to_string();

    Ok(item)
}

/// Parse one journal row into an [`Entry`].
pub fn parse_entry<S: AsRef<str>>(fields: &[S]) -> Result<Entry, HgTeaError> {
    if fields.len() < ENTRY_COLUMNS {
        return Err(HgTeaError::structural(
            RowKind::Entry,
            ENTRY_COLUMNS,
            fields.len(),
        ));
    }
    let field = |i: usize| fields[i].as_ref();

    let steep_duration = if field(7).trim().is_empty() {
        Duration::ZERO
    } else {
        parse_steep_duration(field(7))?
    };

    let steep_temperature = match optional("steep temperature", field(9))? {
        None | Some(0) => DEFAULT_STEEP_TEMPERATURE,
        Some(temp) => temp,
    };

    let fixins = match fields.get(11) {
        Some(list) => parse_fixins(list.as_ref())?,
        None => Vec::new(),
    };

    Ok(Entry {
        // An entry without a tea id is linked to nothing and skipped later.
        item_id: optional("tea id", field(3))?.unwrap_or(0),
        timestamp: parse_date_time(field(1), field(2))?,
        rating: optional("rating", field(4))?.unwrap_or(0),
        comments: field(5).to_string(),
        steep_duration,
        vessel: optional("steeping vessel", field(8))?.map(Vessel::from_code),
        steep_temperature,
        session_instance: field(10).to_string(),
        fixins,
    })
}

/// Combine a `month/day/year` date and an `HMM`/`HHMM` time into an instant
/// in [`REFERENCE_TZ`].
///
/// Ambiguous wall-clock times (the repeated hour when DST ends) resolve to
/// the earlier instant. Wall-clock times skipped when DST starts are moved
/// one hour forward.
pub fn parse_date_time(date: &str, time: &str) -> Result<DateTime<Tz>, HgTeaError> {
    if date.is_empty() {
        return Err(HgTeaError::parse("date", date, "date is empty"));
    }
    let parts: Vec<&str> = date.split('/').collect();
    if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
        return Err(HgTeaError::parse("date", date, "expected month/day/year"));
    }

    if time.is_empty() {
        return Err(HgTeaError::parse("time", time, "time is empty"));
    }
    if time.len() < 3 || !time.is_ascii() {
        return Err(HgTeaError::parse("time", time, "expected HMM or HHMM"));
    }

    let month: u32 = required("date month", parts[0])?;
    let day: u32 = required("date day", parts[1])?;
    let year: i32 = required("date year", parts[2])?;

    let (hour_text, minute_text) = time.split_at(time.len() - 2);
    let minute: u32 = required("time minute", minute_text)?;
    let hour: u32 = required("time hour", hour_text)?;

    let naive = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| HgTeaError::parse("date", date, "no such calendar date"))?
        .and_hms_opt(hour, minute, 0)
        .ok_or_else(|| HgTeaError::parse("time", time, "hour or minute out of range"))?;

    REFERENCE_TZ
        .from_local_datetime(&naive)
        .earliest()
        .or_else(|| {
            REFERENCE_TZ
                .from_local_datetime(&(naive + TimeDelta::hours(1)))
                .earliest()
        })
        .ok_or_else(|| HgTeaError::parse("time", time, "not representable in reference zone"))
}

/// Parse a hand-written steep time such as `"4m 20s"` or `"1.5m"`.
///
/// Whitespace is ignored. Each number needs one of the units `h`, `m` or
/// `s`; a lone `0` is accepted as zero.
pub fn parse_steep_duration(text: &str) -> Result<Duration, HgTeaError> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(HgTeaError::parse("steep time", text, "duration is empty"));
    }
    if compact == "0" {
        return Ok(Duration::ZERO);
    }

    let is_number_char = |c: char| c.is_ascii_digit() || c == '.';
    let mut rest = compact.as_str();
    let mut total: u128 = 0;

    while !rest.is_empty() {
        let number_len = rest.find(|c: char| !is_number_char(c)).unwrap_or(rest.len());
        let (number, tail) = rest.split_at(number_len);
        if number.is_empty() {
            return Err(HgTeaError::parse("steep time", text, "expected a number"));
        }

        let unit_len = tail.find(is_number_char).unwrap_or(tail.len());
        let (unit, tail) = tail.split_at(unit_len);
        let unit_nanos = match unit {
            "h" => 3_600 * NANOS_PER_SECOND,
            "m" => 60 * NANOS_PER_SECOND,
            "s" => NANOS_PER_SECOND,
            "" => return Err(HgTeaError::parse("steep time", text, "missing unit")),
            other => {
                return Err(HgTeaError::parse(
                    "steep time",
                    text,
                    format!("unknown unit {other:?}"),
                ));
            }
        };

        let nanos = scale(number, unit_nanos)
            .ok_or_else(|| HgTeaError::parse("steep time", text, "invalid number"))?;
        total = total
            .checked_add(nanos)
            .ok_or_else(|| HgTeaError::parse("steep time", text, "duration too large"))?;
        rest = tail;
    }

    let nanos = u64::try_from(total)
        .map_err(|_| HgTeaError::parse("steep time", text, "duration too large"))?;
    Ok(Duration::from_nanos(nanos))
}

/// Parse a `;`-separated list of fixin codes, skipping empty tokens.
pub fn parse_fixins(list: &str) -> Result<Vec<Fixin>, HgTeaError> {
    list.split(';')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| required("fixins", token).map(Fixin::from_code))
        .collect()
}

/// `number` (digits with an optional fraction) times `unit_nanos`.
fn scale(number: &str, unit_nanos: u128) -> Option<u128> {
    let (whole, fraction) = match number.split_once('.') {
        Some((w, f)) => (w, f),
        None => (number, ""),
    };
    if (whole.is_empty() && fraction.is_empty()) || fraction.contains('.') {
        return None;
    }

    let whole: u128 = if whole.is_empty() {
        0
    } else {
        whole.parse::<u64>().ok()?.into()
    };
    let mut nanos = whole.checked_mul(unit_nanos)?;

    // Digits beyond nanosecond precision cannot change the result.
    let fraction = &fraction[..fraction.len().min(18)];
    if !fraction.is_empty() {
        let digits: u128 = fraction.parse().ok()?;
        let denominator = 10u128.pow(fraction.len() as u32);
        nanos = nanos.checked_add(digits * unit_nanos / denominator)?;
    }
    Some(nanos)
}

fn required<T>(field: &'static str, value: &str) -> Result<T, HgTeaError>
where
    T: FromStr,
    T::Err: Display,
{
    value
        .parse()
        .map_err(|e: T::Err| HgTeaError::parse(field, value, e))
}

fn optional<T>(field: &'static str, value: &str) -> Result<Option<T>, HgTeaError>
where
    T: FromStr,
    T::Err: Display,
{
    if value.is_empty() {
        Ok(None)
    } else {
        required(field, value).map(Some)
    }
}

#[cfg(test)]
#[path = "tests/parse_tests.rs"]
mod tests;

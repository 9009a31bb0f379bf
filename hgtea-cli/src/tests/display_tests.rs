use super::*;

use chrono::TimeZone;
use hgtea_core::{Fixin, Flush, Item, REFERENCE_TZ, Vessel};

fn pretty() -> TableStyle {
    TableStyle {
        porcelain: false,
        delimiter: "\t".to_string(),
    }
}

fn porcelain() -> TableStyle {
    TableStyle {
        porcelain: true,
        delimiter: "|".to_string(),
    }
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn entry(rating: u32) -> Entry {
    Entry {
        item_id: 42,
        timestamp: REFERENCE_TZ
            .with_ymd_and_hms(2016, 3, 2, 8, 30, 0)
            .single()
            .unwrap(),
        rating,
        comments: "malty".to_string(),
        steep_duration: Duration::from_secs(260),
        vessel: Some(Vessel::Gaiwan),
        steep_temperature: 195,
        session_instance: "AAA".to_string(),
        fixins: vec![Fixin::Milk, Fixin::from_code(3)],
    }
}

fn tea() -> Item {
    let mut item = Item::new(42, "Keemun Mao Feng");
    item.category = "Black".to_string();
    item.pick_period.year = Some(2015);
    item.pick_period.flush = Some(Flush::from_code(1.0));
    item.origin.country = "China".to_string();
    item.origin.region = "Anhui".to_string();
    item.purchase.price = Some(12.5);
    item.storage.stocked = true;
    item
}

#[test]
fn column_names_are_case_insensitive() {
    let columns = item_columns(&names(&["id", "NAME", " avg ", ""])).unwrap();
    assert_eq!(
        columns,
        vec![ItemColumn::Id, ItemColumn::Name, ItemColumn::Avg]
    );

    let columns = entry_columns(&names(&["steep time", "Temp"])).unwrap();
    assert_eq!(columns, vec![EntryColumn::SteepTime, EntryColumn::Temp]);
}

#[test]
fn unknown_column_lists_choices() {
    let err = item_columns(&names(&["Id", "Colour"])).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("'Colour'"));
    assert!(message.contains("Median"));
}

#[test]
fn item_cells() {
    let mut item = tea();
    assert_eq!(ItemColumn::Name.cell(&item, false), "Keemun Mao Feng");
    assert_eq!(ItemColumn::Year.cell(&item, false), "2015");
    assert_eq!(ItemColumn::Flush.cell(&item, false), Flush::FIRST.label());
    assert_eq!(ItemColumn::Origin.cell(&item, false), "Anhui, China");
    assert_eq!(ItemColumn::Price.cell(&item, false), "12.50");
    assert_eq!(ItemColumn::Stocked.cell(&item, false), "yes");
    assert_eq!(ItemColumn::Aging.cell(&item, false), "no");

    assert_eq!(ItemColumn::Avg.cell(&item, false), "-");
    assert_eq!(ItemColumn::Avg.cell(&item, true), "");

    item.add_entry(entry(3));
    item.add_entry(entry(4));
    assert_eq!(ItemColumn::Entries.cell(&item, false), "2");
    assert_eq!(ItemColumn::Avg.cell(&item, true), "3");
    assert_eq!(ItemColumn::Median.cell(&item, false), "3");
    assert_eq!(ItemColumn::Mode.cell(&item, false), "3");
}

#[test]
fn missing_year_is_blank() {
    let mut item = tea();
    item.pick_period.year = None;
    assert_eq!(ItemColumn::Year.cell(&item, false), "");
    item.pick_period.year = Some(0);
    assert_eq!(ItemColumn::Year.cell(&item, false), "");
}

#[test]
fn entry_cells() {
    let item = tea();
    let entry = entry(3);
    assert_eq!(
        EntryColumn::Time.cell(&entry, Some(&item)),
        "02 Mar 16 08:30 -0500"
    );
    assert_eq!(
        EntryColumn::Tea.cell(&entry, Some(&item)),
        "2015 Keemun Mao Feng"
    );
    assert_eq!(EntryColumn::Tea.cell(&entry, None), "");
    assert_eq!(EntryColumn::SteepTime.cell(&entry, None), "4m20s");
    assert_eq!(EntryColumn::Vessel.cell(&entry, None), "Gaiwan");
    assert_eq!(EntryColumn::Temp.cell(&entry, None), "195°");
    assert_eq!(
        EntryColumn::Fixins.cell(&entry, None),
        format!("{}, {}", Fixin::Milk.label(), Fixin::from_code(3).label())
    );
}

#[test]
fn steep_times() {
    assert_eq!(format_steep_time(Duration::ZERO), "0s");
    assert_eq!(format_steep_time(Duration::from_secs(45)), "45s");
    assert_eq!(format_steep_time(Duration::from_secs(180)), "3m0s");
    assert_eq!(format_steep_time(Duration::from_millis(90_500)), "1m30.5s");
    assert_eq!(format_steep_time(Duration::from_secs(3_725)), "1h2m5s");
}

#[test]
fn pretty_table_pads_columns() {
    let mut table = Table::for_items(&[ItemColumn::Id, ItemColumn::Name, ItemColumn::Avg]);
    table.push(names(&["1", "Sencha", "3"]));
    table.push(names(&["101", "Da Hong Pao", "-"]));

    let lines = table.render(&pretty());
    assert_eq!(
        lines,
        vec![
            " Id  Name         Avg",
            "  1  Sencha         3",
            "101  Da Hong Pao    -",
        ]
    );
}

#[test]
fn pretty_table_trims_trailing_padding() {
    let mut table = Table::for_entries(&[EntryColumn::Rating, EntryColumn::Comments]);
    table.push(names(&["3", ""]));
    let lines = table.render(&pretty());
    assert_eq!(lines[1], "     3");
}

#[test]
fn porcelain_table_has_no_header() {
    let mut table = Table::for_items(&[ItemColumn::Id, ItemColumn::Name]);
    table.push(names(&["1", "Sencha"]));
    table.push(names(&["2", ""]));
    assert!(!table.is_empty());
    assert_eq!(table.render(&porcelain()), vec!["1|Sencha", "2|"]);
}

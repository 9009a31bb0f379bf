use std::fs;
use std::path::Path;

use hgtea_core::{Filter, HgTeaError};
use hgtea_lib::{LibError, Settings, load_catalog};
use tempfile::TempDir;

const TEAS_TSV: &str = "\
Timestamp\tDate\tID\tName\tType\tRegion\tYear\tFlush\tPurchase Location\tPurchase Date\tPurchase Price\tRatings\tComments\tPictures\tCountry\tLeaf Grade\tBlended Teas\tBlend Ratio\tSize\tStocked\tAging\tPackaging
1/2/2009 10:00:00\t1/2/2009\t42\tTest Tea #1\tBlack Flavored\tAssam\t2009\t1.5\ttesting.com\t1/2/2009\t1234.56\t\t\t\tIndia\tSTFTGFOP1\t\t\t2oz sample\tTRUE\tFALSE\t0
11/14/2010 10:00:00\t11/14/2010\t101\tTest Tea #2\tBlack\t\t2009\t\ttesting.com\t11/14/2010\t19.99\t\t\t\tChina\tOP\t\t\t2oz\tFALSE\tFALSE\t0
";

const JOURNAL_TSV: &str = "\
Timestamp\tDate\tTime\tTea\tRating\tComments\tPictures\tSteep Time\tSteeping Vessel\tSteep Temperature\tSession Instance\tFixins
3/2/2016 8:30:00\t3/2/2016\t830\t42\t3\tMalty, \"bready\"\t\t4m 20s\t0\t\tAAA\t0;3
3/1/2016 9:00:00\t3/1/2016\t900\t42\t2\t\t\t3m\t8\t195\tBBB\t
3/1/2016 9:30:00\t3/1/2016\t930\t77\t4\t\t\t3m\t8\t195\tCCC\t
3/3/2016 9:00:00\t3/3/2016\t900\t101\t1\t\t\t5m\t6\t\tDDD\t
";

fn write(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path.display().to_string()
}

fn settings_for(teas: String, journal: String) -> Settings {
    let mut settings = Settings::default();
    settings.sheets.teas_url = teas;
    settings.sheets.journal_url = journal;
    settings
}

#[test]
fn loads_catalog_from_local_sheets() {
    let tmp = TempDir::new().unwrap();
    let settings = settings_for(
        write(tmp.path(), "teas.tsv", TEAS_TSV),
        write(tmp.path(), "journal.tsv", JOURNAL_TSV),
    );

    let catalog = load_catalog(&settings).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.entry_count(), 3);
    assert_eq!(catalog.unmatched_entries(), 1);

    let tea = catalog.item_by_id(42).unwrap();
    assert_eq!(tea.to_string(), "2009 Test Tea #1");
    assert_eq!(tea.origin.to_string(), "Assam, India");
    assert_eq!(tea.entry_count(), 2);
    assert_eq!(tea.entries()[0].session_instance, "BBB");
    assert_eq!(tea.entries()[1].comments, "Malty, \"bready\"");
    assert_eq!(tea.entries()[1].steep_temperature, 212);
    assert_eq!(tea.average(), Some(2));

    let sessions: Vec<_> = catalog
        .log(&Filter::new())
        .iter()
        .map(|e| e.session_instance.clone())
        .collect();
    assert_eq!(sessions, vec!["BBB", "AAA", "DDD"]);
}

#[test]
fn file_url_prefix_is_accepted() {
    let tmp = TempDir::new().unwrap();
    let teas = write(tmp.path(), "teas.tsv", TEAS_TSV);
    let journal = write(tmp.path(), "journal.tsv", JOURNAL_TSV);
    let settings = settings_for(format!("file://{teas}"), format!("file://{journal}"));
    assert_eq!(load_catalog(&settings).unwrap().len(), 2);
}

#[test]
fn header_only_sheets_build_empty_catalog() {
    let tmp = TempDir::new().unwrap();
    let header = |tsv: &str| tsv.lines().next().unwrap().to_string();
    let settings = settings_for(
        write(tmp.path(), "teas.tsv", &header(TEAS_TSV)),
        write(tmp.path(), "journal.tsv", &header(JOURNAL_TSV)),
    );
    assert!(load_catalog(&settings).unwrap().is_empty());
}

#[test]
fn empty_sheet_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let settings = settings_for(
        write(tmp.path(), "teas.tsv", ""),
        write(tmp.path(), "journal.tsv", JOURNAL_TSV),
    );
    assert!(matches!(
        load_catalog(&settings),
        Err(LibError::EmptySheet(name)) if name == "teas"
    ));
}

#[test]
fn malformed_row_fails_the_load() {
    let tmp = TempDir::new().unwrap();
    let journal = format!("{JOURNAL_TSV}3/4/2016 9:00:00\t3/4/2016\t9\t42\t3\n");
    let settings = settings_for(
        write(tmp.path(), "teas.tsv", TEAS_TSV),
        write(tmp.path(), "journal.tsv", &journal),
    );
    assert!(matches!(
        load_catalog(&settings),
        Err(LibError::Catalog(HgTeaError::Structural { .. }))
    ));
}

#[test]
fn missing_sheet_file_is_io_error() {
    let tmp = TempDir::new().unwrap();
    let settings = settings_for(
        tmp.path().join("nope.tsv").display().to_string(),
        tmp.path().join("nope2.tsv").display().to_string(),
    );
    assert!(matches!(load_catalog(&settings), Err(LibError::Io { .. })));
}

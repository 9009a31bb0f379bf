use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const TEAS_TSV: &str = "\
Timestamp\tDate\tID\tName\tType\tRegion\tYear\tFlush\tPurchase Location\tPurchase Date\tPurchase Price\tRatings\tComments\tPictures\tCountry\tLeaf Grade\tBlended Teas\tBlend Ratio\tSize\tStocked\tAging\tPackaging
1/2/2009 10:00:00\t1/2/2009\t42\tTest Tea #1\tBlack\tAssam\t2009\t1\ttesting.com\t1/2/2009\t12.5\t\t\t\tIndia\tSTFTGFOP1\t\t\t2oz sample\tTRUE\tFALSE\t0
11/14/2010 10:00:00\t11/14/2010\t101\tTest Tea #2\tOolong\t\t\t\ttesting.com\t11/14/2010\t19.99\t\t\t\tTaiwan\t\t\t\t100g\tFALSE\tFALSE\t0
";

const JOURNAL_TSV: &str = "\
Timestamp\tDate\tTime\tTea\tRating\tComments\tPictures\tSteep Time\tSteeping Vessel\tSteep Temperature\tSession Instance\tFixins
3/2/2016 8:30:00\t3/2/2016\t830\t42\t3\tMalty\t\t4m 20s\t0\t\tAAA\t0
3/1/2016 9:00:00\t3/1/2016\t900\t42\t2\t\t\t3m\t8\t195\tBBB\t
3/3/2016 9:00:00\t3/3/2016\t900\t101\t1\t\t\t5m\t6\t\tCCC\t
";

struct Fixture {
    dir: TempDir,
    teas: PathBuf,
    journal: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let teas = dir.path().join("teas.tsv");
        let journal = dir.path().join("journal.tsv");
        fs::write(&teas, TEAS_TSV).unwrap();
        fs::write(&journal, JOURNAL_TSV).unwrap();
        Self { dir, teas, journal }
    }

    fn config_home(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_hgtea"))
            .args(args)
            .arg("--teas")
            .arg(&self.teas)
            .arg("--journal")
            .arg(&self.journal)
            .env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.config_home())
            .env("NO_COLOR", "1")
            .env_remove("HGTEA_TEAS_URL")
            .env_remove("HGTEA_JOURNAL_URL")
            .env_remove("HGTEA_PROXY")
            .output()
            .unwrap()
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn lines(output: &Output) -> Vec<String> {
    stdout(output).lines().map(str::to_string).collect()
}

#[test]
fn ls_porcelain_lists_teas_by_id() {
    let fx = Fixture::new();
    let out = fx.run(&["ls", "--porcelain", "--delimiter", ",", "--fields", "Id,Name,Avg,Median"]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(lines(&out), vec!["42,Test Tea #1,2,2", "101,Test Tea #2,1,"]);
}

#[test]
fn ls_filters() {
    let fx = Fixture::new();
    let out = fx.run(&["ls", "--porcelain", "--fields", "Id", "--stocked"]);
    assert_eq!(lines(&out), vec!["42"]);

    let out = fx.run(&["ls", "--porcelain", "--fields", "Id", "--types", "oolong"]);
    assert_eq!(lines(&out), vec!["101"]);

    let out = fx.run(&["ls", "--porcelain", "--fields", "Id", "--samples"]);
    assert_eq!(lines(&out), vec!["42"]);
}

#[test]
fn ls_pretty_has_header() {
    let fx = Fixture::new();
    let out = fx.run(&["ls", "--fields", "Id,Name,Median"]);
    let lines = lines(&out);
    assert_eq!(lines[0], " Id  Name         Median");
    assert_eq!(lines[2], "101  Test Tea #2       -");
}

#[test]
fn log_is_chronological_and_filtered() {
    let fx = Fixture::new();
    let out = fx.run(&["log", "--porcelain", "--fields", "Session,Rating"]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(lines(&out), vec!["BBB\t2", "AAA\t3", "CCC\t1"]);

    let out = fx.run(&["log", "--porcelain", "--fields", "Session", "--stocked"]);
    assert_eq!(lines(&out), vec!["BBB", "AAA"]);
}

#[test]
fn stats_table() {
    let fx = Fixture::new();
    let out = fx.run(&["stats", "--porcelain", "--delimiter", "|"]);
    assert_eq!(lines(&out), vec!["2009 Test Tea #1|2|2|2|2", "Test Tea #2|1|1||1"]);
}

#[test]
fn show_prints_tea_and_journal() {
    let fx = Fixture::new();
    let out = fx.run(&["show", "42"]);
    assert!(out.status.success(), "{}", stderr(&out));
    let text = stdout(&out);
    assert!(text.contains("2009 Test Tea #1"));
    assert!(text.contains("Assam, India"));
    assert!(text.contains("4m20s"));
    assert!(text.contains("Total steep time: 7m20s"));
}

#[test]
fn show_unknown_id_fails() {
    let fx = Fixture::new();
    let out = fx.run(&["show", "999"]);
    assert!(!out.status.success());
    assert!(stderr(&out).contains("Could not retrieve tea by id: 999"));
}

#[test]
fn unknown_field_fails() {
    let fx = Fixture::new();
    let out = fx.run(&["ls", "--fields", "Id,Colour"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("Unknown field 'Colour'"));
}

#[test]
fn quiet_suppresses_output() {
    let fx = Fixture::new();
    let out = fx.run(&["ls", "--quiet"]);
    assert!(out.status.success());
    assert!(stdout(&out).is_empty());
}

#[test]
fn logfile_mirrors_output() {
    let fx = Fixture::new();
    let logfile = fx.dir.path().join("hgtea.log");
    let out = fx.run(&[
        "ls",
        "--porcelain",
        "--fields",
        "Id",
        "--logfile",
        logfile.to_str().unwrap(),
    ]);
    assert!(out.status.success());
    let logged = fs::read_to_string(&logfile).unwrap();
    assert_eq!(logged.lines().collect::<Vec<_>>(), vec!["42", "101"]);
}

#[test]
fn missing_sheet_fails() {
    let fx = Fixture::new();
    fs::remove_file(&fx.journal).unwrap();
    let out = fx.run(&["ls"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("journal.tsv"));
}

#[test]
fn config_init_and_path() {
    let fx = Fixture::new();
    let expected: &Path = &fx.config_home().join("hgtea").join("settings.toml");

    let out = fx.run(&["config", "path"]);
    assert_eq!(lines(&out), vec![expected.display().to_string()]);

    let out = fx.run(&["config", "init"]);
    assert!(out.status.success(), "{}", stderr(&out));
    let written = fs::read_to_string(expected).unwrap();
    assert!(written.contains("[sheets]"));

    fs::write(expected, "porcelain = true\n").unwrap();
    let out = fx.run(&["config", "init"]);
    assert!(out.status.success());
    assert_eq!(fs::read_to_string(expected).unwrap(), "porcelain = true\n");

    let out = fx.run(&["ls", "--fields", "Id"]);
    assert_eq!(lines(&out), vec!["42", "101"]);
}

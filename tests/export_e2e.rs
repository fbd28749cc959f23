// tests/export_e2e.rs
use std::fs;
use std::path::PathBuf;

use creator_scrape::config::options::{AppOptions, ExportFormat};
use creator_scrape::config::prefs::{self, Prefs};
use creator_scrape::config::state::{AppState, Theme};
use creator_scrape::extract_usernames;
use creator_scrape::file;
use creator_scrape::table::{Order, Table};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("creator_scrape_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

#[test]
fn extracted_usernames_export_as_single_column() {
    let dir = tmp_dir("single");
    let mut opts = AppOptions::default();
    opts.export.set_path(dir.join("picked").to_str().unwrap());

    let ex = extract_usernames("@zeta_shop @alpha.one Health");
    let table = Table::from_usernames(&ex.usernames);

    let written = file::write_export(&opts.export, &table).unwrap();
    assert!(written.to_string_lossy().ends_with("picked.csv"));
    assert_eq!(fs::read_to_string(&written).unwrap(), "username\nalpha.one\nzeta_shop\n");

    // TSV without headers; the user's extension stays
    opts.export.format = ExportFormat::Tsv;
    opts.export.include_headers = false;
    opts.export.set_path(dir.join("picked.txt").to_str().unwrap());
    let written = file::write_export(&opts.export, &table).unwrap();
    assert!(written.to_string_lossy().ends_with("picked.txt"));
    assert_eq!(fs::read_to_string(&written).unwrap(), "alpha.one\nzeta_shop\n");
}

#[test]
fn sort_then_split_into_outreach_parts() {
    let dir = tmp_dir("split");
    let src = dir.join("creators.csv");
    fs::write(&src, "Creator,GMV\nann,$900\nbo,1.2K\ncy,40\ndee,\"$1,262.34\"\neve,n/a\n").unwrap();

    let mut table = file::read_table(&src, file::delimiter_for(&src)).unwrap();
    let gmv = table.require_column("gmv").unwrap();
    table.sort_by_metric(gmv, Order::Descending);
    let order: Vec<&str> = table.column(0).collect();
    assert_eq!(order, vec!["dee", "bo", "ann", "cy", "eve"]);

    let parts = table.batches(2).unwrap();
    let out = dir.join("batches");
    let written = file::write_batches(&out, &parts, None).unwrap();
    assert_eq!(written.len(), 3);
    assert!(written[2].ends_with("outreach_part_3.csv"));

    let first = fs::read_to_string(&written[0]).unwrap();
    assert_eq!(first, "Creator,GMV\ndee,\"$1,262.34\"\nbo,1.2K\n");
    let last = fs::read_to_string(&written[2]).unwrap();
    assert_eq!(last, "Creator,GMV\neve,n/a\n");
}

#[test]
fn dedup_on_named_column() {
    let dir = tmp_dir("dedup");
    let src = dir.join("list.tsv");
    fs::write(&src, "username\tnote\nann\tfirst\nbo\tx\nann\tsecond\n").unwrap();

    let mut table = file::read_table(&src, file::delimiter_for(&src)).unwrap();
    let col = table.require_column("Username").unwrap();
    assert_eq!(table.dedup_by(col), 1);

    let out = dir.join("list_clean.tsv");
    file::write_table(&out, &table, true, file::delimiter_for(&out)).unwrap();
    assert_eq!(fs::read_to_string(&out).unwrap(), "username\tnote\nann\tfirst\nbo\tx\n");
}

#[test]
fn write_into_a_file_path_that_is_not_a_directory_fails() {
    let dir = tmp_dir("notadir");
    let blocker = dir.join("blocker");
    fs::write(&blocker, "x").unwrap();

    let table = Table::from_usernames(&[String::from("someone")]);
    let parts = table.batches(10).unwrap();
    assert!(file::write_batches(&blocker, &parts, None).is_err());
}

#[test]
fn prefs_survive_a_save_load_cycle() {
    let dir = tmp_dir("prefs");
    let path = dir.join("nested").join("gui.cfg");

    let mut state = AppState::default();
    state.gui.theme = Theme::Light;
    state.gui.show_trace = true;
    state.options.export.format = ExportFormat::Tsv;
    state.options.batch.rows_per_batch = 25;
    state.options.extract.trace_rejections = true;
    state.options.extract.extra_denylist = vec![String::from("brandshop"), String::from("promo")];

    let saved = Prefs::from_state(&state);
    prefs::save(&path, &saved).unwrap();
    let loaded = prefs::load(&path);
    assert_eq!(loaded, saved);

    let mut fresh = AppState::default();
    loaded.apply(&mut fresh);
    assert_eq!(fresh.gui.theme, Theme::Light);
    assert_eq!(fresh.options, state.options);
}

#[test]
fn missing_prefs_file_means_defaults() {
    let dir = tmp_dir("noprefs");
    assert_eq!(prefs::load(&dir.join("absent.cfg")), Prefs::default());
}

#[test]
fn filter_rows_then_export() {
    let dir = tmp_dir("filter");
    let src = dir.join("creators.csv");
    fs::write(&src, "Creator,Category\nAnnaGlow,Beauty\nbob,Sports\nglowup_kim,BEAUTY care\n").unwrap();

    let mut table = file::read_table(&src, file::delimiter_for(&src)).unwrap();
    let col = table.require_column("category").unwrap();
    assert_eq!(table.filter_contains(col, "beauty"), 1);

    let out = dir.join("beauty.csv");
    file::write_table(&out, &table, true, file::delimiter_for(&out)).unwrap();
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "Creator,Category\nAnnaGlow,Beauty\nglowup_kim,BEAUTY care\n"
    );
}

#[test]
fn month_filter_over_a_read_file() {
    let dir = tmp_dir("months");
    let src = dir.join("videos.csv");
    fs::write(
        &src,
        "Creator,Post Date,GMV\nann,2024-02-28,$10\nbo,2024-03-01 09:00:00,$20\ncy,03/15/2024,$30\ndee,,$40\n",
    )
    .unwrap();

    let mut table = file::read_table(&src, file::delimiter_for(&src)).unwrap();
    let col = table.require_column("Post Date").unwrap();
    assert_eq!(table.months(col), vec!["2024-02", "2024-03"]);

    assert_eq!(table.filter_months(col, &["2024-03"]).unwrap(), 2);
    let kept: Vec<&str> = table.column(0).collect();
    assert_eq!(kept, vec!["bo", "cy"]);
}

//! Snapshot tests using the insta crate.
//!
//! Inline snapshots pin down text the presentation layer shows or writes:
//! the CSV export, the text table and the settings file.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::{TestCsvBuilder, scenario_dataset};
use statboard::data::write_csv_content;
use statboard::settings::Settings;
use statboard::table_view::{TablePage, render_table};
use statboard::types::Row;

#[test]
fn snapshot_csv_export() {
    let ds = scenario_dataset();
    insta::assert_snapshot!(write_csv_content(&ds), @r"
Country/Region,Confirmed
USA,100
Brazil,80
India,50
");
}

#[test]
fn snapshot_csv_export_with_missing_cells() {
    let ds = TestCsvBuilder::new(&["Country/Region", "Deaths", "WHO Region"])
        .row(&["Chad", "75", "Africa"])
        .row(&["Greenland", "", "NA"])
        .row(&["Peru", "18418.5", "Americas"])
        .build();
    insta::assert_snapshot!(write_csv_content(&ds), @r"
Country/Region,Deaths,WHO Region
Chad,75,Africa
Greenland,,
Peru,18418.5,Americas
");
}

#[test]
fn snapshot_table_view() {
    let ds = scenario_dataset();
    let rows: Vec<&Row> = ds.rows().iter().collect();
    let page = TablePage::new(rows.len());
    insta::assert_snapshot!(render_table(&ds, &rows, &page), @r"
Country/Region | Confirmed
-------------- | ---------
USA            | 100
Brazil         | 80
India          | 50
Rows 1-3 of 3
");
}

#[test]
fn snapshot_settings_default() {
    insta::assert_json_snapshot!(Settings::default(), @r#"
{
  "source": "covid_dataset/country_wise_latest.csv",
  "key_column": null,
  "top_n": 10,
  "top_n_min": 5,
  "top_n_max": 20
}
"#);
}

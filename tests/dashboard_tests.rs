// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use cashbook::models::RangeKind;
use cashbook::{cli, commands::dashboard};
use chrono::NaiveDate;

fn filter_for(args: &[&str]) -> anyhow::Result<cashbook::models::DateRangeFilter> {
    let mut argv = vec!["cashbook", "dashboard"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("dashboard", m)) = matches.subcommand() {
        dashboard::filter_from_args(m)
    } else {
        panic!("no dashboard subcommand");
    }
}

#[test]
fn default_range_is_monthly() {
    let f = filter_for(&[]).unwrap();
    assert_eq!(f.kind, RangeKind::Monthly);
    assert!(f.start_date.is_none());
    assert!(f.end_date.is_none());
}

#[test]
fn custom_range_carries_both_dates() {
    let f = filter_for(&["--range", "custom", "--from", "2025-06-01", "--to", "2025-06-10"])
        .unwrap();
    assert_eq!(f.kind, RangeKind::Custom);
    assert_eq!(
        f.start_date,
        Some(NaiveDate::parse_from_str("2025-06-01", "%Y-%m-%d").unwrap())
    );
    assert_eq!(
        f.end_date,
        Some(NaiveDate::parse_from_str("2025-06-10", "%Y-%m-%d").unwrap())
    );
}

#[test]
fn unknown_range_is_rejected() {
    let err = filter_for(&["--range", "yearly"]).unwrap_err();
    assert!(err.to_string().contains("yearly"));
}

#[test]
fn bad_date_is_rejected() {
    assert!(filter_for(&["--range", "custom", "--from", "06/01/2025"]).is_err());
}

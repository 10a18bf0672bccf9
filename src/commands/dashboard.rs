// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::Local;

use crate::models::{DateRangeFilter, RangeKind};
use crate::range;
use crate::report::{self, Breakdown, Summary};
use crate::store::DocumentStore;
use crate::utils::{fmt_money, maybe_print_json, parse_date, pretty_table};

pub fn handle(store: &dyn DocumentStore, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let filter = filter_from_args(m)?;

    let data = store.load();
    let resolved = range::resolve(&filter, Local::now().date_naive())?;
    let summary = report::summarize(&data.transactions, &resolved);

    if maybe_print_json(json_flag, jsonl_flag, &summary)? {
        return Ok(());
    }
    render(&filter, &summary);
    Ok(())
}

pub fn filter_from_args(m: &clap::ArgMatches) -> Result<DateRangeFilter> {
    let kind = RangeKind::parse(m.get_one::<String>("range").unwrap())?;
    let start_date = m
        .get_one::<String>("from")
        .map(|s| parse_date(s))
        .transpose()?;
    let end_date = m
        .get_one::<String>("to")
        .map(|s| parse_date(s))
        .transpose()?;
    Ok(DateRangeFilter {
        kind,
        start_date,
        end_date,
    })
}

fn render(filter: &DateRangeFilter, summary: &Summary) {
    let mut label = filter.kind.label().to_string();
    if filter.kind == RangeKind::Custom {
        if let (Some(from), Some(to)) = (filter.start_date, filter.end_date) {
            label = format!("{} ({} to {})", label, from, to);
        }
    }
    println!("Showing data for: {}", label);

    println!(
        "{}",
        pretty_table(
            &["Total Income", "Total Expenses", "Net Balance"],
            vec![vec![
                fmt_money(&summary.income_total, "PKR"),
                fmt_money(&summary.expense_total, "PKR"),
                fmt_money(&summary.balance, "PKR"),
            ]],
        )
    );

    print_breakdown(
        "Income by Category",
        &summary.income_by_category,
        "No income data for selected period",
    );
    print_breakdown(
        "Expenses by Category",
        &summary.expense_by_category,
        "No expense data for selected period",
    );

    println!(
        "{}",
        pretty_table(
            &["Income Entries", "Expense Entries", "Total Entries", "Categories Used"],
            vec![vec![
                summary.income_entries.to_string(),
                summary.expense_entries.to_string(),
                summary.total_entries.to_string(),
                summary.categories_used.to_string(),
            ]],
        )
    );
}

fn print_breakdown(title: &str, breakdown: &Breakdown, placeholder: &str) {
    println!("{}", title);
    if breakdown.is_empty() {
        println!("{}", placeholder);
        return;
    }
    let rows: Vec<Vec<String>> = breakdown
        .iter()
        .map(|c| vec![c.category.clone(), fmt_money(&c.total, "PKR")])
        .collect();
    println!("{}", pretty_table(&["Category", "Total (PKR)"], rows));
}

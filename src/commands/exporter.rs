// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::Local;

use crate::store::DocumentStore;

pub fn handle(store: &dyn DocumentStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("json", sub)) => export_json(store, sub),
        Some(("csv", sub)) => export_csv(store, sub),
        _ => Ok(()),
    }
}

fn default_name(infix: &str, ext: &str) -> String {
    format!("cashbook{}-{}.{}", infix, Local::now().date_naive(), ext)
}

fn export_json(store: &dyn DocumentStore, sub: &clap::ArgMatches) -> Result<()> {
    let out = sub
        .get_one::<String>("out")
        .cloned()
        .unwrap_or_else(|| default_name("", "json"));
    let data = store.load();
    std::fs::write(&out, serde_json::to_string_pretty(&data)?)
        .with_context(|| format!("Write backup to {}", out))?;
    println!(
        "Exported {} transactions and {} categories to {}",
        data.transactions.len(),
        data.categories.len(),
        out
    );
    Ok(())
}

fn export_csv(store: &dyn DocumentStore, sub: &clap::ArgMatches) -> Result<()> {
    let out = sub
        .get_one::<String>("out")
        .cloned()
        .unwrap_or_else(|| default_name("-transactions", "csv"));
    let data = store.load();
    let mut wtr = csv::Writer::from_path(&out).with_context(|| format!("Write CSV to {}", out))?;
    wtr.write_record(["Date", "Type", "Category", "Amount", "Currency", "Description"])?;
    for t in &data.transactions {
        wtr.write_record([
            t.date.to_string(),
            t.r#type.as_str().to_string(),
            t.category.clone(),
            t.amount.to_string(),
            t.currency.as_str().to_string(),
            t.description.clone(),
        ])?;
    }
    wtr.flush()?;
    println!("Exported {} transactions to {}", data.transactions.len(), out);
    Ok(())
}

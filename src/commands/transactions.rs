// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use chrono::{Local, Utc};
use serde::Serialize;

use crate::models::{AppData, Currency, Transaction, TxType};
use crate::store::DocumentStore;
use crate::utils::{
    fmt_money, generate_id, maybe_print_json, parse_date, parse_decimal, pretty_table,
};

pub fn handle(store: &dyn DocumentStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, sub)?,
        Some(("edit", sub)) => edit(store, sub)?,
        Some(("rm", sub)) => rm(store, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &dyn DocumentStore, sub: &clap::ArgMatches) -> Result<()> {
    let r#type = TxType::parse(sub.get_one::<String>("type").unwrap())?;
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let currency = Currency::parse(sub.get_one::<String>("currency").unwrap())?;
    let category = sub.get_one::<String>("category").unwrap().clone();
    let description = sub.get_one::<String>("description").unwrap().clone();
    let date = match sub.get_one::<String>("date") {
        Some(s) => parse_date(s)?,
        None => Local::now().date_naive(),
    };

    let tx = Transaction {
        id: generate_id(),
        r#type,
        amount,
        currency,
        category,
        description,
        date,
        created_at: Utc::now(),
    };

    let mut data = store.load();
    println!(
        "Recorded {} {} in '{}' on {}",
        tx.r#type.as_str(),
        fmt_money(&tx.amount, tx.currency.as_str()),
        tx.category,
        tx.date
    );
    data.transactions.push(tx);
    store.save(&data);
    Ok(())
}

fn edit(store: &dyn DocumentStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let mut data = store.load();
    let tx = data
        .transactions
        .iter_mut()
        .find(|t| &t.id == id)
        .ok_or_else(|| anyhow!("Transaction '{}' not found", id))?;

    // id and created_at are immutable; everything else may change.
    if let Some(s) = sub.get_one::<String>("type") {
        tx.r#type = TxType::parse(s)?;
    }
    if let Some(s) = sub.get_one::<String>("amount") {
        tx.amount = parse_decimal(s)?;
    }
    if let Some(s) = sub.get_one::<String>("currency") {
        tx.currency = Currency::parse(s)?;
    }
    if let Some(s) = sub.get_one::<String>("category") {
        tx.category = s.clone();
    }
    if let Some(s) = sub.get_one::<String>("description") {
        tx.description = s.clone();
    }
    if let Some(s) = sub.get_one::<String>("date") {
        tx.date = parse_date(s)?;
    }

    println!("Updated transaction {}", id);
    store.save(&data);
    Ok(())
}

fn rm(store: &dyn DocumentStore, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let mut data = store.load();
    let before = data.transactions.len();
    data.transactions.retain(|t| &t.id != id);
    if data.transactions.len() == before {
        return Err(anyhow!("Transaction '{}' not found", id));
    }
    store.save(&data);
    println!("Deleted transaction {}", id);
    Ok(())
}

fn list(store: &dyn DocumentStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = store.load();
    let rows_data = query_rows(&data, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &rows_data)? {
        let rows: Vec<Vec<String>> = rows_data
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.date.clone(),
                    r.r#type.clone(),
                    r.category.clone(),
                    r.amount.clone(),
                    r.currency.clone(),
                    r.description.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Date", "Type", "Category", "Amount", "CCY", "Description"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub r#type: String,
    pub category: String,
    pub amount: String,
    pub currency: String,
    pub description: String,
}

pub fn query_rows(data: &AppData, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let type_filter = sub
        .get_one::<String>("type")
        .map(|s| TxType::parse(s))
        .transpose()?;
    let category = sub.get_one::<String>("category");

    let mut txs: Vec<&Transaction> = data
        .transactions
        .iter()
        .filter(|t| type_filter.map_or(true, |ty| t.r#type == ty))
        .filter(|t| category.map_or(true, |c| &t.category == c))
        .collect();
    // Newest first; equal dates keep insertion order.
    txs.sort_by(|a, b| b.date.cmp(&a.date));

    if let Some(limit) = sub.get_one::<usize>("limit") {
        txs.truncate(*limit);
    }

    Ok(txs
        .into_iter()
        .map(|t| TransactionRow {
            id: t.id.clone(),
            date: t.date.to_string(),
            r#type: t.r#type.as_str().to_string(),
            category: t.category.clone(),
            amount: t.amount.to_string(),
            currency: t.currency.as_str().to_string(),
            description: t.description.clone(),
        })
        .collect())
}

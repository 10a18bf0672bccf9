// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::models::TxType;
use crate::store::DocumentStore;
use crate::utils::pretty_table;

pub fn handle(store: &dyn DocumentStore) -> Result<()> {
    let data = store.load();
    let income = data
        .transactions
        .iter()
        .filter(|t| t.r#type == TxType::Income)
        .count();
    let expense = data.transactions.len() - income;

    println!("Document store: {}", crate::store::db_path()?.display());
    let rows = vec![
        vec!["Transactions".to_string(), data.transactions.len().to_string()],
        vec!["Income entries".to_string(), income.to_string()],
        vec!["Expense entries".to_string(), expense.to_string()],
        vec!["Categories".to_string(), data.categories.len().to_string()],
    ];
    println!("{}", pretty_table(&["Recorded", "Count"], rows));
    Ok(())
}

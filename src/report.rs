// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Currency, Transaction, TxType};
use crate::range::DateRange;

/// All reporting happens in PKR; USD entries are converted at this fixed
/// rate. The rate is deliberately not fetched or configurable.
static PKR_PER_USD: Lazy<Decimal> = Lazy::new(|| Decimal::from(280));

pub fn to_pkr(amount: Decimal, currency: Currency) -> Decimal {
    match currency {
        Currency::PKR => amount,
        Currency::USD => amount * *PKR_PER_USD,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
}

/// Per-category sums, kept in the order categories first appear in the
/// filtered set rather than sorted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Breakdown(Vec<CategoryTotal>);

impl Breakdown {
    fn add(&mut self, category: &str, amount: Decimal) {
        match self.0.iter_mut().find(|c| c.category == category) {
            Some(entry) => entry.total += amount,
            None => self.0.push(CategoryTotal {
                category: category.to_string(),
                total: amount,
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.0.iter()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub income_total: Decimal,
    pub expense_total: Decimal,
    pub balance: Decimal,
    pub income_by_category: Breakdown,
    pub expense_by_category: Breakdown,
    pub income_entries: usize,
    pub expense_entries: usize,
    pub total_entries: usize,
    pub categories_used: usize,
}

pub fn filter_by_range<'a>(
    transactions: &'a [Transaction],
    range: &DateRange,
) -> Vec<&'a Transaction> {
    transactions.iter().filter(|t| range.contains(t.date)).collect()
}

pub fn summarize(transactions: &[Transaction], range: &DateRange) -> Summary {
    let filtered = filter_by_range(transactions, range);

    let mut income_total = Decimal::ZERO;
    let mut expense_total = Decimal::ZERO;
    let mut income_by_category = Breakdown::default();
    let mut expense_by_category = Breakdown::default();
    let mut income_entries = 0;
    let mut expense_entries = 0;
    let mut categories = HashSet::new();

    for t in &filtered {
        let amount = to_pkr(t.amount, t.currency);
        categories.insert(t.category.as_str());
        match t.r#type {
            TxType::Income => {
                income_total += amount;
                income_by_category.add(&t.category, amount);
                income_entries += 1;
            }
            TxType::Expense => {
                expense_total += amount;
                expense_by_category.add(&t.category, amount);
                expense_entries += 1;
            }
        }
    }

    Summary {
        income_total,
        expense_total,
        balance: income_total - expense_total,
        income_by_category,
        expense_by_category,
        income_entries,
        expense_entries,
        total_entries: filtered.len(),
        categories_used: categories.len(),
    }
}

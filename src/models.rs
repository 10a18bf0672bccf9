// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxType {
    Income,
    Expense,
}

impl TxType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxType::Income => "income",
            TxType::Expense => "expense",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "income" => Ok(TxType::Income),
            "expense" => Ok(TxType::Expense),
            _ => bail!("Invalid type '{}', expected income|expense", s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    PKR,
    USD,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::PKR => "PKR",
            Currency::USD => "USD",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "PKR" => Ok(Currency::PKR),
            "USD" => Ok(Currency::USD),
            _ => bail!("Invalid currency '{}', expected PKR|USD", s),
        }
    }
}

/// A single income or expense entry. `category` is a display name matched
/// against category names, not a foreign key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub r#type: TxType,
    pub amount: Decimal,
    pub currency: Currency,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub r#type: TxType,
    pub is_default: bool,
}

/// The whole persisted document. Field names stay camelCase on the wire so
/// backups from earlier builds of the product import unchanged; a backup
/// missing one of the collections is filled in on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppData {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default = "default_categories")]
    pub categories: Vec<Category>,
}

impl AppData {
    /// A fresh document: no transactions, the seeded category set.
    pub fn seed() -> Self {
        AppData {
            transactions: Vec::new(),
            categories: default_categories(),
        }
    }
}

pub fn default_categories() -> Vec<Category> {
    fn seeded(id: &str, name: &str, r#type: TxType) -> Category {
        Category {
            id: id.to_string(),
            name: name.to_string(),
            r#type,
            is_default: true,
        }
    }
    vec![
        seeded("1", "Sales (orders)", TxType::Income),
        seeded("2", "Custom Orders", TxType::Income),
        seeded("3", "Other Income", TxType::Income),
        seeded("4", "Raw Material", TxType::Expense),
        seeded("5", "Ads/Marketing", TxType::Expense),
        seeded("6", "Packaging", TxType::Expense),
        seeded("7", "Delivery/Courier Charges", TxType::Expense),
        seeded("8", "Maintenance", TxType::Expense),
        seeded("9", "Inventory/Stock Purchase", TxType::Expense),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeKind {
    Daily,
    Weekly,
    Monthly,
    Custom,
}

impl RangeKind {
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "daily" => Ok(RangeKind::Daily),
            "weekly" => Ok(RangeKind::Weekly),
            "monthly" => Ok(RangeKind::Monthly),
            "custom" => Ok(RangeKind::Custom),
            _ => bail!("Invalid range '{}', expected daily|weekly|monthly|custom", s),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RangeKind::Daily => "Today",
            RangeKind::Weekly => "This Week",
            RangeKind::Monthly => "This Month",
            RangeKind::Custom => "Custom Range",
        }
    }
}

/// What the user asked to see; start/end only apply to `Custom`.
#[derive(Debug, Clone)]
pub struct DateRangeFilter {
    pub kind: RangeKind,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

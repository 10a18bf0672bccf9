// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use cashbook::models::{AppData, Currency, Transaction, TxType};
use cashbook::store::{DocumentError, DocumentStore, STORAGE_KEY, SqliteStore, parse_document};
use chrono::NaiveDate;
use rusqlite::Connection;
use tempfile::tempdir;

fn mem_store() -> SqliteStore {
    SqliteStore::from_connection(Connection::open_in_memory().unwrap()).unwrap()
}

fn sample_tx() -> Transaction {
    Transaction {
        id: "t1".to_string(),
        r#type: TxType::Expense,
        amount: "12.34".parse().unwrap(),
        currency: Currency::PKR,
        category: "Packaging".to_string(),
        description: "boxes".to_string(),
        date: NaiveDate::parse_from_str("2025-06-15", "%Y-%m-%d").unwrap(),
        created_at: "2025-06-15T08:30:00Z".parse().unwrap(),
    }
}

#[test]
fn fresh_store_loads_seed_document() {
    let store = mem_store();
    let data = store.load();
    assert!(data.transactions.is_empty());
    assert_eq!(data.categories.len(), 9);
    let income = data
        .categories
        .iter()
        .filter(|c| c.r#type == TxType::Income)
        .count();
    assert_eq!(income, 3);
    assert_eq!(data.categories.len() - income, 6);
    assert!(data.categories.iter().all(|c| c.is_default));
}

#[test]
fn save_then_load_round_trips() {
    let store = mem_store();
    let mut data = store.load();
    data.transactions.push(sample_tx());
    store.save(&data);
    assert_eq!(store.load(), data);
}

#[test]
fn malformed_blob_falls_back_to_seed() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("CREATE TABLE documents(key TEXT PRIMARY KEY, value TEXT NOT NULL);")
        .unwrap();
    conn.execute(
        "INSERT INTO documents(key, value) VALUES (?1, '{not json')",
        rusqlite::params![STORAGE_KEY],
    )
    .unwrap();
    let store = SqliteStore::from_connection(conn).unwrap();
    assert_eq!(store.load(), AppData::seed());
}

#[test]
fn partial_blob_fills_missing_collections() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("CREATE TABLE documents(key TEXT PRIMARY KEY, value TEXT NOT NULL);")
        .unwrap();
    conn.execute(
        "INSERT INTO documents(key, value) VALUES (?1, '{\"transactions\": []}')",
        rusqlite::params![STORAGE_KEY],
    )
    .unwrap();
    let store = SqliteStore::from_connection(conn).unwrap();
    let data = store.load();
    assert!(data.transactions.is_empty());
    // Missing categories come back as the seed set on the load path.
    assert_eq!(data.categories, cashbook::models::default_categories());
}

#[test]
fn file_store_persists_across_opens() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.sqlite");
    {
        let store = SqliteStore::open(&path).unwrap();
        let mut data = store.load();
        data.transactions.push(sample_tx());
        store.save(&data);
    }
    let store = SqliteStore::open(&path).unwrap();
    assert_eq!(store.load().transactions, vec![sample_tx()]);
}

#[test]
fn parse_document_accepts_full_shape() {
    let text = r#"{"transactions": [], "categories": []}"#;
    let data = parse_document(text).unwrap();
    assert!(data.transactions.is_empty());
    assert!(data.categories.is_empty());
}

#[test]
fn parse_document_names_missing_fields() {
    let err = parse_document(r#"{"transactions": []}"#).unwrap_err();
    match &err {
        DocumentError::MissingFields(fields) => assert_eq!(fields, &vec!["categories"]),
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("categories"));

    let err = parse_document("{}").unwrap_err();
    match err {
        DocumentError::MissingFields(fields) => {
            assert_eq!(fields, vec!["transactions", "categories"])
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn parse_document_rejects_malformed_json() {
    assert!(matches!(
        parse_document("not json at all"),
        Err(DocumentError::Json(_))
    ));
    // Present but wrongly typed fields surface serde's complaint.
    assert!(matches!(
        parse_document(r#"{"transactions": 5, "categories": []}"#),
        Err(DocumentError::Json(_))
    ));
}

// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use cashbook::store::{DocumentStore, SqliteStore};
use cashbook::{cli, commands::exporter, commands::importer};
use rusqlite::Connection;
use tempfile::tempdir;

fn mem_store() -> SqliteStore {
    SqliteStore::from_connection(Connection::open_in_memory().unwrap()).unwrap()
}

fn run_import(store: &SqliteStore, path: &str) -> anyhow::Result<()> {
    let matches = cli::build_cli().get_matches_from(["cashbook", "import", path]);
    if let Some(("import", m)) = matches.subcommand() {
        importer::handle(store, m)
    } else {
        panic!("no import subcommand");
    }
}

const VALID_BACKUP: &str = r#"{
  "transactions": [
    {
      "id": "t1",
      "type": "expense",
      "amount": 100,
      "currency": "PKR",
      "category": "Packaging",
      "description": "boxes",
      "date": "2025-06-15",
      "createdAt": "2025-06-15T08:30:00Z"
    }
  ],
  "categories": [
    {"id": "c1", "name": "Packaging", "type": "expense", "isDefault": false}
  ]
}"#;

#[test]
fn import_replaces_the_document() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("backup.json");
    std::fs::write(&path, VALID_BACKUP).unwrap();

    let store = mem_store();
    run_import(&store, path.to_str().unwrap()).unwrap();

    let data = store.load();
    assert_eq!(data.transactions.len(), 1);
    assert_eq!(data.transactions[0].id, "t1");
    assert_eq!(data.categories.len(), 1);
    assert!(!data.categories[0].is_default);
}

#[test]
fn import_missing_categories_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("backup.json");
    std::fs::write(&path, r#"{"transactions": []}"#).unwrap();

    let store = mem_store();
    let err = run_import(&store, path.to_str().unwrap()).unwrap_err();
    assert!(format!("{:#}", err).contains("categories"));

    // Existing state is untouched: still the seed document.
    let data = store.load();
    assert!(data.transactions.is_empty());
    assert_eq!(data.categories.len(), 9);
}

#[test]
fn import_rejects_invalid_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("backup.json");
    std::fs::write(&path, "definitely not json").unwrap();

    let store = mem_store();
    assert!(run_import(&store, path.to_str().unwrap()).is_err());
    assert_eq!(store.load().categories.len(), 9);
}

#[test]
fn import_rejects_missing_file() {
    let store = mem_store();
    assert!(run_import(&store, "/no/such/file.json").is_err());
}

#[test]
fn export_then_import_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("backup.json");
    let path_str = path.to_string_lossy().to_string();

    let source = mem_store();
    {
        let inner = dir.path().join("seed.json");
        std::fs::write(&inner, VALID_BACKUP).unwrap();
        run_import(&source, inner.to_str().unwrap()).unwrap();
    }

    let matches =
        cli::build_cli().get_matches_from(["cashbook", "export", "json", "--out", &path_str]);
    if let Some(("export", m)) = matches.subcommand() {
        exporter::handle(&source, m).unwrap();
    } else {
        panic!("no export subcommand");
    }

    let target = mem_store();
    run_import(&target, &path_str).unwrap();
    assert_eq!(target.load(), source.load());
}

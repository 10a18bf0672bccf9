// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use cashbook::models::TxType;
use cashbook::store::{DocumentStore, SqliteStore};
use cashbook::{cli, commands::categories};
use rusqlite::Connection;

fn mem_store() -> SqliteStore {
    SqliteStore::from_connection(Connection::open_in_memory().unwrap()).unwrap()
}

fn run_category(store: &SqliteStore, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["cashbook", "category"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("category", cat_m)) = matches.subcommand() {
        categories::handle(store, cat_m)
    } else {
        panic!("no category subcommand");
    }
}

#[test]
fn add_appends_a_user_category() {
    let store = mem_store();
    run_category(&store, &["add", "Fuel", "--type", "expense"]).unwrap();

    let data = store.load();
    assert_eq!(data.categories.len(), 10);
    let added = data.categories.last().unwrap();
    assert_eq!(added.name, "Fuel");
    assert_eq!(added.r#type, TxType::Expense);
    assert!(!added.is_default);
    assert!(!added.id.is_empty());
}

#[test]
fn duplicate_names_are_not_prevented() {
    let store = mem_store();
    run_category(&store, &["add", "Fuel", "--type", "expense"]).unwrap();
    run_category(&store, &["add", "Fuel", "--type", "expense"]).unwrap();

    let data = store.load();
    assert_eq!(
        data.categories.iter().filter(|c| c.name == "Fuel").count(),
        2
    );
}

#[test]
fn rejects_unknown_type() {
    let store = mem_store();
    assert!(run_category(&store, &["add", "Fuel", "--type", "transfer"]).is_err());
    assert_eq!(store.load().categories.len(), 9);
}

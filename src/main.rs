// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use cashbook::store::SqliteStore;
use cashbook::{cli, commands, store, utils};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    utils::init_logging(matches.get_flag("verbose"));

    let store = SqliteStore::open_default()?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Document store initialised at {}", store::db_path()?.display());
        }
        Some(("tx", sub)) => commands::transactions::handle(&store, sub)?,
        Some(("category", sub)) => commands::categories::handle(&store, sub)?,
        Some(("dashboard", sub)) => commands::dashboard::handle(&store, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        Some(("import", sub)) => commands::importer::handle(&store, sub)?,
        Some(("status", _)) => commands::status::handle(&store)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}

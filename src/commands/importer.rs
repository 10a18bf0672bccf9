// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

use crate::store::{DocumentStore, parse_document};

/// Importing replaces the whole document. Validation happens before any
/// write, so a rejected file leaves existing data untouched.
pub fn handle(store: &dyn DocumentStore, m: &clap::ArgMatches) -> Result<()> {
    let path = m.get_one::<String>("path").unwrap();
    let text =
        std::fs::read_to_string(path).with_context(|| format!("Open backup {}", path))?;
    let data =
        parse_document(&text).with_context(|| format!("'{}' is not a valid backup", path))?;
    store.save(&data);
    println!(
        "Imported {} transactions and {} categories from {}",
        data.transactions.len(),
        data.categories.len(),
        path
    );
    Ok(())
}

// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::models::{Category, TxType};
use crate::store::DocumentStore;
use crate::utils::{generate_id, pretty_table};

pub fn handle(store: &dyn DocumentStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let r#type = TxType::parse(sub.get_one::<String>("type").unwrap())?;
            let mut data = store.load();
            // Duplicate names are legal; transactions match on the name text.
            data.categories.push(Category {
                id: generate_id(),
                name: name.clone(),
                r#type,
                is_default: false,
            });
            store.save(&data);
            println!("Added {} category '{}'", r#type.as_str(), name);
        }
        Some(("list", _)) => {
            let data = store.load();
            let rows: Vec<Vec<String>> = data
                .categories
                .iter()
                .map(|c| {
                    vec![
                        c.name.clone(),
                        c.r#type.as_str().to_string(),
                        if c.is_default { "yes".into() } else { String::new() },
                    ]
                })
                .collect();
            println!("{}", pretty_table(&["Category", "Type", "Seeded"], rows));
        }
        _ => {}
    }
    Ok(())
}

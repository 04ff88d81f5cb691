// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::commands::subscriptions::print_table;
use crate::config::Settings;
use crate::models::Category;
use crate::store::Store;

pub fn search(store: &mut Store, settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let term = sub
        .get_many::<String>("term")
        .map(|words| words.map(String::as_str).collect::<Vec<_>>().join(" "))
        .unwrap_or_default();
    store.set_search_term(term.trim());
    let visible = store.visible();
    if store.query().search_term.is_empty() {
        println!("Search cleared ({} shown)", visible.len());
    } else {
        println!(
            "Search '{}' matches {} subscription(s)",
            store.query().search_term,
            visible.len()
        );
    }
    print_table(&visible, settings);
    Ok(())
}

pub fn filter(store: &mut Store, settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    if sub.get_flag("clear") {
        store.clear_category_filter();
    } else if let Some(raw) = sub.get_one::<String>("category") {
        let category = raw.parse::<Category>()?;
        store.set_category_filter(category);
    }
    match store.query().category {
        Some(c) => println!("Category filter: {}", c),
        None => println!("Category filter cleared"),
    }
    print_table(&store.visible(), settings);
    Ok(())
}

// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde_json::json;
use subscribe::store::Store;
use subscribe::{cli, commands::exporter};
use tempfile::tempdir;

fn export(store: &Store, format: &str, out: &str) -> anyhow::Result<()> {
    let matches = cli::build_cli().get_matches_from([
        "subscribe", "export", "--format", format, "--out", out,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(store, export_m)
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn export_json_writes_current_view() {
    let mut store = Store::seeded().unwrap();
    store.set_search_term("work");

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("subs.json");
    export(&store, "json", &out_path.to_string_lossy()).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        parsed,
        json!([
            {
                "id": 1,
                "name": "Workday",
                "plan": "Enterprise",
                "category": "HR",
                "category_inferred": false,
                "billing_cycle": "yearly",
                "amount": "120000",
                "days_left": 7,
                "next_billing_date": "2025-03-25",
                "icon": "👥"
            }
        ])
    );
}

#[test]
fn export_csv_has_header_and_sorted_rows() {
    let store = Store::seeded().unwrap();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("subs.csv");
    export(&store, "CSV", &out_path.to_string_lossy()).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(
        lines[0],
        "id,name,plan,category,category_inferred,billing_cycle,amount,days_left,next_billing_date,icon"
    );
    assert!(lines[1].starts_with("6,Epic Systems,Healthcare Suite,healthcare,false,yearly,300000,5,2025-03-23,"));
    assert!(lines[7].starts_with("5,Dell EMC,"));
}

#[test]
fn export_rejects_unknown_format() {
    let store = Store::seeded().unwrap();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("subs.xml");
    assert!(export(&store, "xml", &out_path.to_string_lossy()).is_err());
    assert!(!out_path.exists());
}

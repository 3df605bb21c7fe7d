// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde_json::json;
use tallybook::models::{Transaction, TxKind};
use tallybook::store::LedgerStore;
use tallybook::{cli, commands::exporter};
use tempfile::{tempdir, TempDir};

fn seeded_store() -> (TempDir, LedgerStore) {
    let dir = tempdir().unwrap();
    let store = LedgerStore::at(dir.path().join("ledger.csv"));
    let tx = Transaction::new(
        TxKind::Expense,
        Some("2025-01-02".parse().unwrap()),
        "Food",
        "12.34".parse::<Decimal>().unwrap(),
        "Cash",
        "Weekly run",
    )
    .unwrap();
    store.save(&[tx]).unwrap();
    (dir, store)
}

fn run_export(store: &LedgerStore, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["tallybook", "export", "transactions"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(store, export_m)
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn export_transactions_streams_pretty_json() {
    let (dir, store) = seeded_store();
    let out_path = dir.path().join("export.json");
    let out_str = out_path.to_string_lossy().to_string();

    run_export(&store, &["--format", "json", "--out", &out_str]).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        parsed,
        json!([
            {
                "date": "2025-01-02",
                "kind": "Expense",
                "category": "Food",
                "amount": "12.34",
                "account": "Cash",
                "description": "Weekly run"
            }
        ])
    );
}

#[test]
fn export_transactions_writes_ledger_schema_csv() {
    let (dir, store) = seeded_store();
    let out_path = dir.path().join("export.csv");
    let out_str = out_path.to_string_lossy().to_string();

    run_export(&store, &["--out", &out_str]).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    assert_eq!(
        contents,
        "Type,Date,Category/Source,Amount,Account,Description\n\
         Expense,2025-01-02,Food,12.34,Cash,Weekly run\n"
    );
}

#[test]
fn export_transactions_honors_kind_filter() {
    let (dir, store) = seeded_store();
    store
        .append(
            Transaction::new(
                TxKind::Income,
                Some("2025-01-05".parse().unwrap()),
                "Salary",
                "2500".parse::<Decimal>().unwrap(),
                "Bank Account",
                "",
            )
            .unwrap(),
        )
        .unwrap();
    let out_path = dir.path().join("export.json");
    let out_str = out_path.to_string_lossy().to_string();

    run_export(
        &store,
        &["--format", "json", "--kind", "income", "--out", &out_str],
    )
    .unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["kind"], "Income");
}

#[test]
fn export_transactions_rejects_unknown_format() {
    let (dir, store) = seeded_store();
    let out_path = dir.path().join("export.unknown");
    let out_str = out_path.to_string_lossy().to_string();

    assert!(run_export(&store, &["--format", "xml", "--out", &out_str]).is_err());
    assert!(!out_path.exists());
}

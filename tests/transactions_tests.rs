// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use tallybook::models::{Transaction, TxKind};
use tallybook::store::LedgerStore;
use tallybook::{cli, commands};
use tempfile::{tempdir, TempDir};

fn tx(kind: TxKind, date: &str, category: &str, amount: &str, account: &str) -> Transaction {
    Transaction::new(
        kind,
        Some(date.parse().unwrap()),
        category,
        amount.parse::<Decimal>().unwrap(),
        account,
        "",
    )
    .unwrap()
}

fn setup() -> (TempDir, LedgerStore) {
    let dir = tempdir().unwrap();
    let store = LedgerStore::at(dir.path().join("ledger.csv"));
    store
        .save(&[
            tx(TxKind::Expense, "2025-01-01", "Food", "10", "Cash"),
            tx(TxKind::Expense, "2025-01-02", "Transport", "20", "Credit Card"),
            tx(TxKind::Income, "2025-01-03", "Salary", "2500", "Bank Account"),
            tx(TxKind::Expense, "2025-02-05", "Food", "30", "Cash"),
        ])
        .unwrap();
    (dir, store)
}

#[test]
fn list_limit_respected() {
    let (_dir, store) = setup();
    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["tallybook", "list", "--limit", "2"]);
    if let Some(("list", list_m)) = matches.subcommand() {
        let rows = commands::transactions::query_rows(&store, list_m).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, "2025-02-05");
    } else {
        panic!("no list subcommand");
    }
}

#[test]
fn list_without_kind_flag_shows_both_kinds() {
    let (_dir, store) = setup();
    let matches = cli::build_cli().get_matches_from(["tallybook", "list"]);
    if let Some(("list", list_m)) = matches.subcommand() {
        let rows = commands::transactions::query_rows(&store, list_m).unwrap();
        assert_eq!(rows.len(), 4);
    } else {
        panic!("no list subcommand");
    }
}

#[test]
fn list_kind_flag_narrows_to_one_kind() {
    let (_dir, store) = setup();
    let matches = cli::build_cli().get_matches_from(["tallybook", "list", "--kind", "income"]);
    if let Some(("list", list_m)) = matches.subcommand() {
        let rows = commands::transactions::query_rows(&store, list_m).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].kind, "Income");
        assert_eq!(rows[0].category, "Salary");
    } else {
        panic!("no list subcommand");
    }
}

#[test]
fn list_kind_flag_accepts_mixed_case() {
    let (_dir, store) = setup();
    let matches = cli::build_cli().get_matches_from(["tallybook", "list", "--kind", "Income"]);
    if let Some(("list", list_m)) = matches.subcommand() {
        let rows = commands::transactions::query_rows(&store, list_m).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].kind, "Income");
    } else {
        panic!("no list subcommand");
    }
}

#[test]
fn list_month_flag_keeps_one_month() {
    let (_dir, store) = setup();
    let matches = cli::build_cli().get_matches_from(["tallybook", "list", "--month", "2025-01"]);
    if let Some(("list", list_m)) = matches.subcommand() {
        let rows = commands::transactions::query_rows(&store, list_m).unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.date.starts_with("2025-01")));
    } else {
        panic!("no list subcommand");
    }
}

#[test]
fn list_category_flag_is_repeatable() {
    let (_dir, store) = setup();
    let matches = cli::build_cli().get_matches_from([
        "tallybook",
        "list",
        "--category",
        "Food",
        "--category",
        "Salary",
    ]);
    if let Some(("list", list_m)) = matches.subcommand() {
        let rows = commands::transactions::query_rows(&store, list_m).unwrap();
        assert_eq!(rows.len(), 3);
    } else {
        panic!("no list subcommand");
    }
}

#[test]
fn add_expense_appends_validated_row() {
    let dir = tempdir().unwrap();
    let store = LedgerStore::at(dir.path().join("ledger.csv"));
    store.init().unwrap();

    let matches = cli::build_cli().get_matches_from([
        "tallybook",
        "add",
        "expense",
        "--category",
        "Food",
        "--amount",
        "12.5",
        "--account",
        "Cash",
        "--date",
        "2025-01-02",
        "--description",
        "lunch",
    ]);
    if let Some(("add", add_m)) = matches.subcommand() {
        commands::add::handle(&store, add_m).unwrap();
    } else {
        panic!("no add subcommand");
    }

    let txs = store.load().unwrap();
    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0].kind, TxKind::Expense);
    assert_eq!(txs[0].amount, "12.5".parse::<Decimal>().unwrap());
    assert_eq!(txs[0].description, "lunch");
}

#[test]
fn add_income_uses_source_flag() {
    let dir = tempdir().unwrap();
    let store = LedgerStore::at(dir.path().join("ledger.csv"));
    store.init().unwrap();

    let matches = cli::build_cli().get_matches_from([
        "tallybook",
        "add",
        "income",
        "--source",
        "Salary",
        "--amount",
        "2500",
        "--account",
        "Bank Account",
    ]);
    if let Some(("add", add_m)) = matches.subcommand() {
        commands::add::handle(&store, add_m).unwrap();
    } else {
        panic!("no add subcommand");
    }

    let txs = store.load().unwrap();
    assert_eq!(txs.len(), 1);
    assert_eq!(txs[0].kind, TxKind::Income);
    assert_eq!(txs[0].category, "Salary");
    assert_eq!(txs[0].description, "");
}

#[test]
fn add_rejects_zero_amount_and_leaves_ledger_untouched() {
    let dir = tempdir().unwrap();
    let store = LedgerStore::at(dir.path().join("ledger.csv"));
    store.init().unwrap();

    let matches = cli::build_cli().get_matches_from([
        "tallybook",
        "add",
        "expense",
        "--category",
        "Food",
        "--amount",
        "0",
        "--account",
        "Cash",
    ]);
    if let Some(("add", add_m)) = matches.subcommand() {
        assert!(commands::add::handle(&store, add_m).is_err());
    } else {
        panic!("no add subcommand");
    }
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn add_rejects_unknown_category_and_leaves_ledger_untouched() {
    let dir = tempdir().unwrap();
    let store = LedgerStore::at(dir.path().join("ledger.csv"));
    store.init().unwrap();

    let matches = cli::build_cli().get_matches_from([
        "tallybook",
        "add",
        "expense",
        "--category",
        "Rent",
        "--amount",
        "800",
        "--account",
        "Cash",
    ]);
    if let Some(("add", add_m)) = matches.subcommand() {
        assert!(commands::add::handle(&store, add_m).is_err());
    } else {
        panic!("no add subcommand");
    }
    assert!(store.load().unwrap().is_empty());
}

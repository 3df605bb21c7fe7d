// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::commands::transactions::TransactionRow;
use crate::query::{self, TxFilter};
use crate::report::{self, Totals};
use crate::store::LedgerStore;
use crate::utils::{maybe_print_json, pretty_table};

const RECENT: usize = 5;

#[derive(Serialize)]
struct Overview {
    transactions: usize,
    totals: Totals,
}

pub fn handle(store: &LedgerStore, m: &clap::ArgMatches) -> Result<()> {
    let txs = store.load()?;
    let overview = Overview {
        transactions: txs.len(),
        totals: report::totals(&txs),
    };
    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &overview)? {
        return Ok(());
    }

    println!(
        "{}",
        pretty_table(
            &["Totals", "Amount"],
            vec![
                vec!["Income".into(), format!("{:.2}", overview.totals.income)],
                vec!["Expense".into(), format!("{:.2}", overview.totals.expense)],
                vec!["Net".into(), format!("{:.2}", overview.totals.net)],
            ],
        )
    );
    println!("Transactions recorded: {}", overview.transactions);

    let recent = query::filter(&txs, &TxFilter::all());
    if recent.is_empty() {
        println!("No transactions added yet.");
        return Ok(());
    }
    let rows: Vec<Vec<String>> = recent
        .iter()
        .take(RECENT)
        .map(|tx| TransactionRow::from_tx(tx).cells())
        .collect();
    println!("Recent transactions:");
    println!(
        "{}",
        pretty_table(
            &["Date", "Kind", "Category/Source", "Amount", "Account", "Description"],
            rows,
        )
    );
    Ok(())
}

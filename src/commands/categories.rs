// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeSet;
use std::str::FromStr;

use anyhow::Result;

use crate::models::TxKind;
use crate::query;
use crate::store::LedgerStore;
use crate::utils::pretty_table;

pub fn handle(store: &LedgerStore, m: &clap::ArgMatches) -> Result<()> {
    let kinds: BTreeSet<TxKind> = match m.get_many::<String>("kind") {
        Some(vals) => vals
            .map(|s| TxKind::from_str(s))
            .collect::<Result<_, _>>()?,
        None => [TxKind::Expense, TxKind::Income].into_iter().collect(),
    };

    if m.get_flag("recorded") {
        let txs = store.load()?;
        let rows: Vec<Vec<String>> = query::category_options(&txs, &kinds)
            .into_iter()
            .map(|c| vec![c])
            .collect();
        println!("{}", pretty_table(&["Category/Source"], rows));
        return Ok(());
    }

    let mut label_rows = Vec::new();
    let mut account_rows = Vec::new();
    for kind in &kinds {
        for c in kind.categories() {
            label_rows.push(vec![kind.to_string(), c.to_string()]);
        }
        for a in kind.accounts() {
            account_rows.push(vec![kind.to_string(), a.to_string()]);
        }
    }
    println!("{}", pretty_table(&["Kind", "Category/Source"], label_rows));
    println!("{}", pretty_table(&["Kind", "Account"], account_rows));
    Ok(())
}

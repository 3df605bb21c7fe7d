// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::str::FromStr;

use anyhow::Result;
use serde::Serialize;

use crate::models::{Transaction, TxKind};
use crate::query::{self, TxFilter};
use crate::store::LedgerStore;
use crate::utils::{maybe_print_json, parse_month, pretty_table};

pub fn handle(store: &LedgerStore, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let data = query_rows(store, m)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        if data.is_empty() {
            println!("No transactions added yet.");
            return Ok(());
        }
        let rows: Vec<Vec<String>> = data.iter().map(TransactionRow::cells).collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Kind", "Category/Source", "Amount", "Account", "Description"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub date: String,
    pub kind: String,
    pub category: String,
    pub amount: String,
    pub account: String,
    pub description: String,
}

impl TransactionRow {
    pub fn from_tx(tx: &Transaction) -> Self {
        TransactionRow {
            date: tx.date.to_string(),
            kind: tx.kind.to_string(),
            category: tx.category.clone(),
            amount: format!("{:.2}", tx.amount),
            account: tx.account.clone(),
            description: tx.description.clone(),
        }
    }

    pub fn cells(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.kind.clone(),
            self.category.clone(),
            self.amount.clone(),
            self.account.clone(),
            self.description.clone(),
        ]
    }
}

pub fn filter_from_args(m: &clap::ArgMatches) -> Result<TxFilter> {
    let kinds: Vec<TxKind> = match m.get_many::<String>("kind") {
        Some(vals) => vals
            .map(|s| TxKind::from_str(s))
            .collect::<Result<_, _>>()?,
        None => vec![TxKind::Expense, TxKind::Income],
    };
    let categories: Vec<String> = m
        .get_many::<String>("category")
        .map(|vals| vals.cloned().collect())
        .unwrap_or_default();
    Ok(TxFilter::new(kinds, categories))
}

pub fn select(store: &LedgerStore, m: &clap::ArgMatches) -> Result<Vec<Transaction>> {
    let sel = filter_from_args(m)?;
    let mut txs = query::filter(&store.load()?, &sel);
    if let Some(month) = m.get_one::<String>("month") {
        let month = parse_month(month)?;
        txs.retain(|tx| tx.month_key() == month);
    }
    Ok(txs)
}

pub fn query_rows(store: &LedgerStore, m: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let mut txs = select(store, m)?;
    if let Some(&limit) = m.get_one::<usize>("limit") {
        txs.truncate(limit);
    }
    Ok(txs.iter().map(TransactionRow::from_tx).collect())
}

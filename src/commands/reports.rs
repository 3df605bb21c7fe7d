// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::str::FromStr;

use anyhow::Result;

use crate::models::TxKind;
use crate::report;
use crate::store::LedgerStore;
use crate::utils::{maybe_print_json, parse_month, pretty_table};

pub fn handle(store: &LedgerStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("by-category", sub)) => by_category(store, sub)?,
        Some(("monthly", sub)) => monthly(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn by_category(store: &LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let kind = TxKind::from_str(sub.get_one::<String>("kind").unwrap())?;
    let mut txs = store.load()?;
    if let Some(month) = sub.get_one::<String>("month") {
        let month = parse_month(month)?;
        txs.retain(|tx| tx.month_key() == month);
    }

    let mut items: Vec<_> = report::category_breakdown(&txs, kind).into_iter().collect();
    items.sort_by(|a, b| b.1.cmp(&a.1));
    let data: Vec<Vec<String>> = items
        .into_iter()
        .map(|(cat, amt)| vec![cat, format!("{:.2}", amt)])
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let amount_hdr = match kind {
            TxKind::Expense => "Spent",
            TxKind::Income => "Received",
        };
        println!("{}", pretty_table(&["Category/Source", amount_hdr], data));
    }
    Ok(())
}

fn monthly(store: &LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let months: usize = *sub.get_one::<usize>("months").unwrap_or(&12);
    let txs = store.load()?;

    let rows = report::monthly_rows(&report::monthly_summary(&txs));
    let data: Vec<Vec<String>> = rows
        .iter()
        .rev()
        .take(months)
        .map(|r| {
            vec![
                r.month.clone(),
                format!("{:.2}", r.income),
                format!("{:.2}", r.expense),
            ]
        })
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!("{}", pretty_table(&["Month", "Income", "Expense"], data));
    }
    Ok(())
}

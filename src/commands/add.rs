// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::models::{parse_amount, Transaction, TxKind};
use crate::store::LedgerStore;
use crate::utils::parse_date;

pub fn handle(store: &LedgerStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("expense", sub)) => add(store, sub, TxKind::Expense, "category")?,
        Some(("income", sub)) => add(store, sub, TxKind::Income, "source")?,
        _ => {}
    }
    Ok(())
}

fn add(store: &LedgerStore, sub: &clap::ArgMatches, kind: TxKind, label_arg: &str) -> Result<()> {
    let category = sub.get_one::<String>(label_arg).unwrap();
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let account = sub.get_one::<String>("account").unwrap();
    let date = match sub.get_one::<String>("date") {
        Some(s) => Some(parse_date(s)?),
        None => None,
    };
    let description = sub.get_one::<String>("description").unwrap();

    let tx = Transaction::new(
        kind,
        date,
        category.as_str(),
        amount,
        account.as_str(),
        description.as_str(),
    )?;
    let line = format!(
        "Recorded {} {:.2} on {} ({}, acct: {})",
        tx.kind, tx.amount, tx.date, tx.category, tx.account
    );
    store.append(tx)?;
    println!("{}", line);
    Ok(())
}

// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs::File;

use anyhow::{bail, Result};

use crate::commands::transactions::{self, TransactionRow};
use crate::store::{write_csv, LedgerStore};

pub fn handle(store: &LedgerStore, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(store, sub),
        _ => Ok(()),
    }
}

fn export_transactions(store: &LedgerStore, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();
    let txs = transactions::select(store, sub)?;

    match fmt.as_str() {
        "csv" => {
            let file = File::create(out)?;
            write_csv(file, &txs)?;
        }
        "json" => {
            let rows: Vec<TransactionRow> = txs.iter().map(TransactionRow::from_tx).collect();
            std::fs::write(out, serde_json::to_string_pretty(&rows)?)?;
        }
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    }
    println!("Exported {} transactions to {}", txs.len(), out);
    Ok(())
}

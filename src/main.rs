// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use tallybook::{cli, commands, store::LedgerStore};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let store = LedgerStore::open_default()?;

    match matches.subcommand() {
        Some(("init", _)) => {
            store.init()?;
            println!("Ledger initialized at {}", store.path().display());
        }
        Some(("add", sub)) => commands::add::handle(&store, sub)?,
        Some(("list", sub)) => commands::transactions::handle(&store, sub)?,
        Some(("categories", sub)) => commands::categories::handle(&store, sub)?,
        Some(("overview", sub)) => commands::overview::handle(&store, sub)?,
        Some(("report", sub)) => commands::reports::handle(&store, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        Some(("check", _)) => commands::check::handle(&store)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}

// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::store::LedgerStore;

pub fn handle(store: &LedgerStore) -> Result<()> {
    let txs = store.load()?;
    println!(
        "✅ ledger OK: {} transactions at {}",
        txs.len(),
        store.path().display()
    );
    Ok(())
}

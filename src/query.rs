// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeSet;

use crate::models::{Transaction, TxKind};

/// Kind and category selection. An empty kind set matches nothing; an
/// empty category set matches every category.
#[derive(Debug, Clone, Default)]
pub struct TxFilter {
    pub kinds: BTreeSet<TxKind>,
    pub categories: BTreeSet<String>,
}

impl TxFilter {
    pub fn new(
        kinds: impl IntoIterator<Item = TxKind>,
        categories: impl IntoIterator<Item = String>,
    ) -> Self {
        TxFilter {
            kinds: kinds.into_iter().collect(),
            categories: categories.into_iter().collect(),
        }
    }

    pub fn all() -> Self {
        TxFilter::new([TxKind::Expense, TxKind::Income], [])
    }

    pub fn matches(&self, tx: &Transaction) -> bool {
        self.kinds.contains(&tx.kind)
            && (self.categories.is_empty() || self.categories.contains(&tx.category))
    }
}

pub fn filter(txs: &[Transaction], sel: &TxFilter) -> Vec<Transaction> {
    let mut out: Vec<Transaction> = txs.iter().filter(|tx| sel.matches(tx)).cloned().collect();
    out.sort_by(|a, b| b.date.cmp(&a.date));
    out
}

pub fn category_options(txs: &[Transaction], kinds: &BTreeSet<TxKind>) -> Vec<String> {
    txs.iter()
        .filter(|tx| kinds.contains(&tx.kind))
        .map(|tx| tx.category.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_owned)
        .collect()
}

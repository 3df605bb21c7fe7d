// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Transaction, TxKind};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
    pub net: Decimal,
}

pub fn totals(txs: &[Transaction]) -> Totals {
    let mut income = Decimal::ZERO;
    let mut expense = Decimal::ZERO;
    for tx in txs {
        match tx.kind {
            TxKind::Income => income += tx.amount,
            TxKind::Expense => expense += tx.amount,
        }
    }
    Totals {
        income,
        expense,
        net: income - expense,
    }
}

pub fn category_breakdown(txs: &[Transaction], kind: TxKind) -> BTreeMap<String, Decimal> {
    let mut out = BTreeMap::new();
    for tx in txs.iter().filter(|tx| tx.kind == kind) {
        *out.entry(tx.category.clone()).or_insert(Decimal::ZERO) += tx.amount;
    }
    out
}

pub fn monthly_summary(txs: &[Transaction]) -> BTreeMap<(String, TxKind), Decimal> {
    let mut out = BTreeMap::new();
    for tx in txs {
        *out.entry((tx.month_key(), tx.kind)).or_insert(Decimal::ZERO) += tx.amount;
    }
    out
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyRow {
    pub month: String,
    pub income: Decimal,
    pub expense: Decimal,
}

pub fn monthly_rows(summary: &BTreeMap<(String, TxKind), Decimal>) -> Vec<MonthlyRow> {
    let months: BTreeSet<&str> = summary.keys().map(|(m, _)| m.as_str()).collect();
    let cell = |month: &str, kind: TxKind| {
        summary
            .get(&(month.to_string(), kind))
            .copied()
            .unwrap_or(Decimal::ZERO)
    };
    months
        .into_iter()
        .map(|month| MonthlyRow {
            month: month.to_string(),
            income: cell(month, TxKind::Income),
            expense: cell(month, TxKind::Expense),
        })
        .collect()
}

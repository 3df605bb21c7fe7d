// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};

pub const EXPENSE_CATEGORIES: &[&str] = &[
    "Food",
    "Transport",
    "Entertainment",
    "Utilities",
    "Shopping",
    "Health",
    "Education",
];

pub const INCOME_SOURCES: &[&str] = &["Salary", "Freelance", "Business", "Investments", "Other"];

pub const EXPENSE_ACCOUNTS: &[&str] = &["Cash", "Credit Card", "Bank Account"];

pub const INCOME_ACCOUNTS: &[&str] = &["Cash", "Bank Account"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TxKind {
    Expense,
    Income,
}

impl TxKind {
    pub fn categories(self) -> &'static [&'static str] {
        match self {
            TxKind::Expense => EXPENSE_CATEGORIES,
            TxKind::Income => INCOME_SOURCES,
        }
    }

    pub fn accounts(self) -> &'static [&'static str] {
        match self {
            TxKind::Expense => EXPENSE_ACCOUNTS,
            TxKind::Income => INCOME_ACCOUNTS,
        }
    }

    pub fn category_field(self) -> &'static str {
        match self {
            TxKind::Expense => "expense category",
            TxKind::Income => "income source",
        }
    }

    fn account_field(self) -> &'static str {
        match self {
            TxKind::Expense => "expense account",
            TxKind::Income => "income account",
        }
    }
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TxKind::Expense => "Expense",
            TxKind::Income => "Income",
        })
    }
}

impl FromStr for TxKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("expense") {
            Ok(TxKind::Expense)
        } else if s.eq_ignore_ascii_case("income") {
            Ok(TxKind::Income)
        } else {
            Err(LedgerError::invalid_choice(
                "transaction kind",
                s,
                &["expense", "income"],
            ))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub kind: TxKind,
    pub date: NaiveDate,
    pub category: String,
    pub amount: Decimal,
    pub account: String,
    pub description: String,
}

impl Transaction {
    pub fn new(
        kind: TxKind,
        date: Option<NaiveDate>,
        category: impl Into<String>,
        amount: Decimal,
        account: impl Into<String>,
        description: impl Into<String>,
    ) -> LedgerResult<Self> {
        Transaction {
            kind,
            date: date.unwrap_or_else(|| Utc::now().date_naive()),
            category: category.into(),
            amount,
            account: account.into(),
            description: description.into(),
        }
        .validate()
    }

    /// Check the record rules and normalize the amount to two decimal places.
    pub fn validate(mut self) -> LedgerResult<Self> {
        if self.amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount {
                given: self.amount.to_string(),
            });
        }
        if !self.kind.categories().contains(&self.category.as_str()) {
            return Err(LedgerError::invalid_choice(
                self.kind.category_field(),
                self.category.as_str(),
                self.kind.categories(),
            ));
        }
        if !self.kind.accounts().contains(&self.account.as_str()) {
            return Err(LedgerError::invalid_choice(
                self.kind.account_field(),
                self.account.as_str(),
                self.kind.accounts(),
            ));
        }
        self.amount = self.amount.round_dp(2);
        Ok(self)
    }

    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

pub fn parse_amount(s: &str) -> LedgerResult<Decimal> {
    s.trim().parse::<Decimal>().map_err(|_| LedgerError::InvalidAmount {
        given: s.to_string(),
    })
}

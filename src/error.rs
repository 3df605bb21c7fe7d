// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("invalid amount '{given}': expected a number greater than zero")]
    InvalidAmount { given: String },

    #[error("invalid {field} '{given}': allowed values are {allowed}")]
    InvalidChoice {
        field: &'static str,
        given: String,
        allowed: String,
    },

    #[error("corrupt ledger {} (row {row}): {reason}", .path.display())]
    CorruptLedger {
        path: PathBuf,
        row: u64,
        reason: String,
    },

    #[error("ledger store unavailable ({op} {}): {source}", .path.display())]
    StoreUnavailable {
        op: &'static str,
        path: PathBuf,
        source: io::Error,
    },
}

impl LedgerError {
    pub fn invalid_choice(field: &'static str, given: impl Into<String>, allowed: &[&str]) -> Self {
        LedgerError::InvalidChoice {
            field,
            given: given.into(),
            allowed: allowed.join(", "),
        }
    }
}

pub type LedgerResult<T> = std::result::Result<T, LedgerError>;

// Copyright (c) Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Transaction, TxKind};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.tallybook", "Tallybook", "tallybook"));

pub const LEDGER_COLUMNS: [&str; 6] = [
    "Type",
    "Date",
    "Category/Source",
    "Amount",
    "Account",
    "Description",
];

pub fn ledger_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("ledger.csv"))
}

pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    pub fn open_default() -> Result<Self> {
        Ok(LedgerStore {
            path: ledger_path()?,
        })
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        LedgerStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn init(&self) -> LedgerResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| unavailable("create", &self.path, e))?;
            }
        }
        if !self.path.exists() {
            self.save(&[])?;
        }
        Ok(())
    }

    /// A missing or zero-length file is an empty ledger, not an error.
    pub fn load(&self) -> LedgerResult<Vec<Transaction>> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(unavailable("read", &self.path, e)),
        };
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);
        let headers = reader.headers().map_err(|e| self.read_err(e))?.clone();
        if headers.is_empty() {
            return Ok(Vec::new());
        }
        let header_ok = headers.len() == LEDGER_COLUMNS.len()
            && headers.iter().zip(LEDGER_COLUMNS).all(|(got, want)| got == want);
        if !header_ok {
            return Err(LedgerError::CorruptLedger {
                path: self.path.clone(),
                row: 1,
                reason: format!(
                    "unexpected header '{}'",
                    headers.iter().collect::<Vec<_>>().join(",")
                ),
            });
        }
        let mut txs = Vec::new();
        for rec in reader.records() {
            let rec = rec.map_err(|e| self.read_err(e))?;
            let row = rec.position().map(|p| p.line()).unwrap_or(0);
            txs.push(self.parse_row(&rec, row)?);
        }
        Ok(txs)
    }

    pub fn append(&self, tx: Transaction) -> LedgerResult<()> {
        let mut txs = self.load()?;
        txs.push(tx);
        self.save(&txs)
    }

    pub fn save(&self, txs: &[Transaction]) -> LedgerResult<()> {
        let file = File::create(&self.path).map_err(|e| unavailable("write", &self.path, e))?;
        write_csv(file, txs).map_err(|e| self.write_err(e))
    }

    fn parse_row(&self, rec: &csv::StringRecord, row: u64) -> LedgerResult<Transaction> {
        let corrupt = |reason: String| LedgerError::CorruptLedger {
            path: self.path.clone(),
            row,
            reason,
        };
        if rec.len() != LEDGER_COLUMNS.len() {
            return Err(corrupt(format!(
                "expected {} columns, found {}",
                LEDGER_COLUMNS.len(),
                rec.len()
            )));
        }
        let kind = match &rec[0] {
            "Expense" => TxKind::Expense,
            "Income" => TxKind::Income,
            other => return Err(corrupt(format!("unknown type '{other}'"))),
        };
        let date = NaiveDate::parse_from_str(&rec[1], "%Y-%m-%d")
            .map_err(|_| corrupt(format!("invalid date '{}'", &rec[1])))?;
        let amount = rec[3]
            .parse::<Decimal>()
            .map_err(|_| corrupt(format!("invalid amount '{}'", &rec[3])))?;
        Ok(Transaction {
            kind,
            date,
            category: rec[2].to_string(),
            amount,
            account: rec[4].to_string(),
            description: rec[5].to_string(),
        })
    }

    fn read_err(&self, e: csv::Error) -> LedgerError {
        let row = e.position().map(|p| p.line()).unwrap_or(0);
        let reason = e.to_string();
        match e.into_kind() {
            csv::ErrorKind::Io(io) => unavailable("read", &self.path, io),
            _ => LedgerError::CorruptLedger {
                path: self.path.clone(),
                row,
                reason,
            },
        }
    }

    fn write_err(&self, e: csv::Error) -> LedgerError {
        let reason = e.to_string();
        match e.into_kind() {
            csv::ErrorKind::Io(io) => unavailable("write", &self.path, io),
            _ => unavailable("write", &self.path, io::Error::other(reason)),
        }
    }
}

fn unavailable(op: &'static str, path: &Path, source: io::Error) -> LedgerError {
    LedgerError::StoreUnavailable {
        op,
        path: path.to_path_buf(),
        source,
    }
}

pub fn write_csv<W: io::Write>(out: W, txs: &[Transaction]) -> Result<(), csv::Error> {
    let mut w = csv::Writer::from_writer(out);
    w.write_record(LEDGER_COLUMNS)?;
    for tx in txs {
        w.write_record([
            tx.kind.to_string(),
            tx.date.to_string(),
            tx.category.clone(),
            format!("{:.2}", tx.amount),
            tx.account.clone(),
            tx.description.clone(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::PENDING;
use crate::error::Result;
use crate::identity::derive_id;
use crate::models::{RawRow, Transaction, TxType};
use crate::parse::{parse_amount, parse_date};

// ---------------------------------------------------------------------------
// Statement layout
// ---------------------------------------------------------------------------

/// Zero-based positions of the fields we read from each statement line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMap {
    pub value_date: usize,
    pub secondary_date: usize,
    pub description: usize,
    pub movement_detail: usize,
    pub amount: usize,
    pub balance: usize,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            value_date: 1,
            secondary_date: 2,
            description: 3,
            movement_detail: 4,
            amount: 5,
            balance: 7,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatementLayout {
    /// Lines discarded unconditionally at the top of every file.
    pub header_lines: usize,
    /// Lines with fewer `;`-separated fields are dropped.
    pub min_fields: usize,
    pub columns: ColumnMap,
}

impl Default for StatementLayout {
    fn default() -> Self {
        Self {
            header_lines: 5,
            min_fields: 6,
            columns: ColumnMap::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Row extraction
// ---------------------------------------------------------------------------

pub fn extract_rows(content: &str, layout: &StatementLayout) -> Result<Vec<RawRow>> {
    let body = content
        .lines()
        .skip(layout.header_lines)
        .collect::<Vec<_>>()
        .join("\n");
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .delimiter(b';')
        .from_reader(body.as_bytes());

    let cols = &layout.columns;
    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        if record.len() < layout.min_fields {
            continue;
        }
        let field = |idx: usize| record.get(idx).unwrap_or("").trim().to_string();
        let row = RawRow {
            line: layout.header_lines
                + record.position().map_or(0, |p| p.line() as usize),
            value_date: field(cols.value_date),
            secondary_date: field(cols.secondary_date),
            description: field(cols.description),
            movement_detail: field(cols.movement_detail),
            amount: field(cols.amount),
            balance: field(cols.balance),
        };
        if row.value_date.is_empty() || row.description.is_empty() || row.amount.is_empty() {
            continue;
        }
        rows.push(row);
    }
    Ok(rows)
}

// ---------------------------------------------------------------------------
// Transaction building
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct RowFailure {
    pub line: usize,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct BuildOutcome {
    pub transactions: Vec<Transaction>,
    pub failures: Vec<RowFailure>,
}

pub fn build_transaction(row: &RawRow, account: &str) -> Result<Transaction> {
    let date = parse_date(&row.value_date)?;
    let secondary = if row.secondary_date.is_empty() {
        date.clone()
    } else {
        parse_date(&row.secondary_date)?
    };
    let signed = parse_amount(&row.amount)?;
    let amount = signed.abs();
    let id = derive_id(
        &date,
        &secondary,
        &row.description,
        &row.movement_detail,
        amount,
        &row.balance,
    );
    Ok(Transaction {
        id,
        date,
        description: row.description.clone(),
        description_override: None,
        amount,
        category: PENDING.to_string(),
        category_override: None,
        account: account.to_string(),
        kind: TxType::from_signed(signed),
    })
}

/// Builds every row it can; bad rows are logged and collected, never fatal.
pub fn build_transactions(rows: &[RawRow], account: &str, source: &str) -> BuildOutcome {
    let mut outcome = BuildOutcome::default();
    for row in rows {
        match build_transaction(row, account) {
            Ok(txn) => outcome.transactions.push(txn),
            Err(e) => {
                tracing::warn!("{source}:{}: skipping row: {e}", row.line);
                outcome.failures.push(RowFailure {
                    line: row.line,
                    reason: e.to_string(),
                });
            }
        }
    }
    outcome
}

// ---------------------------------------------------------------------------
// import_file
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct FileSummary {
    pub file_name: String,
    pub rows: usize,
    pub built: usize,
    pub failures: Vec<RowFailure>,
    /// Ids already seen earlier in the same run; filled in by the pipeline.
    pub duplicates: usize,
}

pub fn import_file(
    file_path: &Path,
    layout: &StatementLayout,
    account: &str,
) -> Result<(Vec<Transaction>, FileSummary)> {
    let bytes = std::fs::read(file_path)?;
    let content = String::from_utf8_lossy(&bytes);
    let file_name = file_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("")
        .to_string();

    let rows = extract_rows(&content, layout)?;
    let outcome = build_transactions(&rows, account, &file_name);
    tracing::info!(
        "{file_name}: {} rows, {} transactions, {} skipped",
        rows.len(),
        outcome.transactions.len(),
        outcome.failures.len()
    );

    let summary = FileSummary {
        file_name,
        rows: rows.len(),
        built: outcome.transactions.len(),
        failures: outcome.failures,
        duplicates: 0,
    };
    Ok((outcome.transactions, summary))
}

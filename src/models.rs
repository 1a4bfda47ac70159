use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog::PENDING;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxType {
    Income,
    Expense,
}

impl TxType {
    /// Zero is treated as income; only a negative amount is an expense.
    pub fn from_signed(amount: f64) -> Self {
        if amount < 0.0 {
            Self::Expense
        } else {
            Self::Income
        }
    }
}

/// Canonical transaction record as persisted in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub date: String,
    pub description: String,
    #[serde(
        default,
        deserialize_with = "non_blank",
        skip_serializing_if = "is_blank"
    )]
    pub description_override: Option<String>,
    pub amount: f64,
    pub category: String,
    #[serde(
        default,
        deserialize_with = "non_blank",
        skip_serializing_if = "is_blank"
    )]
    pub category_override: Option<String>,
    pub account: String,
    #[serde(rename = "type")]
    pub kind: TxType,
}

impl Transaction {
    pub fn has_category_override(&self) -> bool {
        !is_blank(&self.category_override)
    }

    pub fn is_pending(&self) -> bool {
        self.category == PENDING
    }

    pub fn display_description(&self) -> &str {
        match self.description_override.as_deref() {
            Some(d) if !d.trim().is_empty() => d,
            _ => &self.description,
        }
    }

    pub fn effective_category(&self) -> &str {
        match self.category_override.as_deref() {
            Some(c) if !c.trim().is_empty() => c,
            _ => &self.category,
        }
    }

    /// Amount with the sign restored from `kind`.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TxType::Income => self.amount,
            TxType::Expense => -self.amount,
        }
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |s| s.trim().is_empty())
}

fn non_blank<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Positional fields pulled from one statement line, before any parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub line: usize,
    pub value_date: String,
    pub secondary_date: String,
    pub description: String,
    pub movement_detail: String,
    pub amount: String,
    pub balance: String,
}

use std::collections::BTreeMap;

use crate::catalog::CategoryCatalog;
use crate::models::{Transaction, TxType};

pub struct PendingReport<'a> {
    pub total: usize,
    pub pending: Vec<&'a Transaction>,
}

impl PendingReport<'_> {
    pub fn pct(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.pending.len() as f64 / self.total as f64 * 100.0
        }
    }
}

pub fn get_pending(txns: &[Transaction]) -> PendingReport<'_> {
    PendingReport {
        total: txns.len(),
        pending: txns
            .iter()
            .filter(|t| !t.has_category_override() && t.is_pending())
            .collect(),
    }
}

/// Records whose effective category is not a catalog id.
pub fn get_invalid_categories<'a>(
    txns: &'a [Transaction],
    catalog: &CategoryCatalog,
) -> Vec<&'a Transaction> {
    txns.iter()
        .filter(|t| !catalog.contains(t.effective_category()))
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub id: String,
    pub name: String,
    pub count: usize,
    pub income: f64,
    pub expenses: f64,
}

impl CategoryTotal {
    pub fn net(&self) -> f64 {
        self.income - self.expenses
    }
}

/// Per-category counts and sums over effective categories, largest
/// volume first.
pub fn get_category_totals(txns: &[Transaction], catalog: &CategoryCatalog) -> Vec<CategoryTotal> {
    let mut by_id: BTreeMap<&str, CategoryTotal> = BTreeMap::new();
    for t in txns {
        let id = t.effective_category();
        let entry = by_id.entry(id).or_insert_with(|| CategoryTotal {
            id: id.to_string(),
            name: catalog.name(id).unwrap_or(id).to_string(),
            count: 0,
            income: 0.0,
            expenses: 0.0,
        });
        entry.count += 1;
        match t.kind {
            TxType::Income => entry.income += t.amount,
            TxType::Expense => entry.expenses += t.amount,
        }
    }
    let mut totals: Vec<CategoryTotal> = by_id.into_values().collect();
    totals.sort_by(|a, b| {
        (b.income + b.expenses)
            .partial_cmp(&(a.income + a.expenses))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    totals
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct StoreSummary {
    pub total: usize,
    pub pending: usize,
    pub overridden: usize,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
}

pub fn get_summary(txns: &[Transaction]) -> StoreSummary {
    StoreSummary {
        total: txns.len(),
        pending: get_pending(txns).pending.len(),
        overridden: txns.iter().filter(|t| t.has_category_override()).count(),
        first_date: txns.iter().map(|t| t.date.clone()).min(),
        last_date: txns.iter().map(|t| t.date.clone()).max(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PENDING;

    fn tx(id: &str, date: &str, category: &str, kind: TxType, amount: f64) -> Transaction {
        Transaction {
            id: id.to_string(),
            date: date.to_string(),
            description: id.to_uppercase(),
            description_override: None,
            amount,
            category: category.to_string(),
            category_override: None,
            account: "main".to_string(),
            kind,
        }
    }

    fn sample() -> Vec<Transaction> {
        let mut overridden = tx("d", "2024-02-10", PENDING, TxType::Expense, 20.0);
        overridden.category_override = Some("leisure".to_string());
        vec![
            tx("a", "2024-03-01", "groceries", TxType::Expense, 50.0),
            tx("b", "2024-02-28", PENDING, TxType::Expense, 5.0),
            tx("c", "2024-02-15", "salary", TxType::Income, 2000.0),
            overridden,
            tx("e", "2024-01-05", "gadgets", TxType::Expense, 99.0),
            tx("f", "2024-01-04", "groceries", TxType::Expense, 25.0),
        ]
    }

    #[test]
    fn test_pending_report() {
        let txns = sample();
        let report = get_pending(&txns);
        assert_eq!(report.total, 6);
        assert_eq!(report.pending.len(), 1);
        assert_eq!(report.pending[0].id, "b");
        assert!((report.pct() - 100.0 / 6.0).abs() < 1e-9);
        assert_eq!(get_pending(&[]).pct(), 0.0);
    }

    #[test]
    fn test_invalid_categories_use_effective_category() {
        let txns = sample();
        let catalog = CategoryCatalog::default();
        let invalid = get_invalid_categories(&txns, &catalog);
        assert_eq!(invalid.len(), 1);
        assert_eq!(invalid[0].id, "e");
    }

    #[test]
    fn test_category_totals() {
        let txns = sample();
        let totals = get_category_totals(&txns, &CategoryCatalog::default());
        assert_eq!(totals[0].id, "salary");
        assert_eq!(totals[0].net(), 2000.0);
        let groceries = totals.iter().find(|t| t.id == "groceries").unwrap();
        assert_eq!(groceries.count, 2);
        assert_eq!(groceries.expenses, 75.0);
        assert_eq!(groceries.name, "Groceries");
        let unknown = totals.iter().find(|t| t.id == "gadgets").unwrap();
        assert_eq!(unknown.name, "gadgets");
        assert!(totals.iter().any(|t| t.id == "leisure"));
    }

    #[test]
    fn test_summary() {
        let summary = get_summary(&sample());
        assert_eq!(summary.total, 6);
        assert_eq!(summary.pending, 1);
        assert_eq!(summary.overridden, 1);
        assert_eq!(summary.first_date.as_deref(), Some("2024-01-04"));
        assert_eq!(summary.last_date.as_deref(), Some("2024-03-01"));
        assert_eq!(get_summary(&[]), StoreSummary::default());
    }
}

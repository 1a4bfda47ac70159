use std::collections::HashSet;

use crate::models::Transaction;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct MergeResult {
    pub added: usize,
    pub already_present: usize,
}

/// Union `incoming` into `existing`, keyed by id. On a collision the existing
/// record wins so manual overrides survive a re-import. The result is sorted
/// by date descending; same-day records keep their insertion order.
pub fn merge(existing: Vec<Transaction>, incoming: Vec<Transaction>) -> (Vec<Transaction>, MergeResult) {
    let mut seen: HashSet<String> = existing.iter().map(|t| t.id.clone()).collect();
    let mut merged = existing;
    let mut result = MergeResult::default();

    for txn in incoming {
        if seen.insert(txn.id.clone()) {
            merged.push(txn);
            result.added += 1;
        } else {
            result.already_present += 1;
        }
    }

    // `sort_by` is stable.
    merged.sort_by(|a, b| b.date.cmp(&a.date));
    (merged, result)
}

/// Drop repeated ids from a batch, keeping the first occurrence.
/// Returns how many were dropped.
pub fn dedup_batch(batch: &mut Vec<Transaction>, seen: &mut HashSet<String>) -> usize {
    let before = batch.len();
    batch.retain(|t| seen.insert(t.id.clone()));
    before - batch.len()
}

/// Ids that occur more than once, in order of their second appearance.
pub fn find_duplicate_ids(txns: &[Transaction]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut dups = Vec::new();
    for txn in txns {
        if !seen.insert(txn.id.as_str()) && reported.insert(txn.id.as_str()) {
            dups.push(txn.id.clone());
        }
    }
    dups
}

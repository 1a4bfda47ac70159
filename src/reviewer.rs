use crate::catalog::CategoryCatalog;
use crate::error::{ExtractoError, Result};
use crate::models::Transaction;

/// Manual edits to one stored record. `None` leaves a field alone.
#[derive(Debug, Default, Clone)]
pub struct Edit {
    pub category: Option<String>,
    pub description: Option<String>,
    pub clear_category: bool,
    pub clear_description: bool,
}

/// Apply a manual edit. A category override also sets `category` so the
/// record reads consistently before the next run.
pub fn apply_edit(
    txns: &mut [Transaction],
    id: &str,
    edit: &Edit,
    catalog: &CategoryCatalog,
) -> Result<()> {
    if let Some(cat) = &edit.category {
        if !catalog.contains(cat) {
            return Err(ExtractoError::UnknownCategory(cat.clone()));
        }
    }
    let txn = txns
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or_else(|| ExtractoError::UnknownTransaction(id.to_string()))?;

    if edit.clear_category {
        txn.category_override = None;
    }
    if let Some(cat) = &edit.category {
        txn.category_override = Some(cat.clone());
        txn.category = cat.clone();
    }
    if edit.clear_description {
        txn.description_override = None;
    }
    if let Some(desc) = &edit.description {
        let desc = desc.trim();
        txn.description_override = (!desc.is_empty()).then(|| desc.to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PENDING;
    use crate::models::TxType;

    fn store() -> Vec<Transaction> {
        vec![Transaction {
            id: "tx_1".to_string(),
            date: "2024-03-15".to_string(),
            description: "SUPERMART MADRID".to_string(),
            description_override: None,
            amount: 45.3,
            category: PENDING.to_string(),
            category_override: None,
            account: "main".to_string(),
            kind: TxType::Expense,
        }]
    }

    #[test]
    fn test_set_and_clear_overrides() {
        let catalog = CategoryCatalog::default();
        let mut txns = store();
        let edit = Edit {
            category: Some("leisure".to_string()),
            description: Some(" Birthday dinner ".to_string()),
            ..Default::default()
        };
        apply_edit(&mut txns, "tx_1", &edit, &catalog).unwrap();
        assert_eq!(txns[0].category_override.as_deref(), Some("leisure"));
        assert_eq!(txns[0].category, "leisure");
        assert_eq!(txns[0].display_description(), "Birthday dinner");
        assert_eq!(txns[0].description, "SUPERMART MADRID");

        let clear = Edit { clear_category: true, clear_description: true, ..Default::default() };
        apply_edit(&mut txns, "tx_1", &clear, &catalog).unwrap();
        assert_eq!(txns[0].category_override, None);
        assert_eq!(txns[0].description_override, None);
    }

    #[test]
    fn test_rejects_unknown_ids() {
        let catalog = CategoryCatalog::default();
        let mut txns = store();
        let edit = Edit { category: Some("gadgets".to_string()), ..Default::default() };
        assert!(matches!(
            apply_edit(&mut txns, "tx_1", &edit, &catalog),
            Err(ExtractoError::UnknownCategory(_))
        ));
        assert!(matches!(
            apply_edit(&mut txns, "tx_9", &Edit::default(), &catalog),
            Err(ExtractoError::UnknownTransaction(_))
        ));
    }
}

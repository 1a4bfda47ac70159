use std::collections::BTreeMap;

/// Sentinel for a transaction no rule has classified yet.
pub const PENDING: &str = "pending";
/// Catch-all id; reserved alongside `PENDING`.
pub const OTHER: &str = "other";

/// Read-only lookup of valid category ids to display names. Built once and
/// passed by reference.
#[derive(Debug, Clone)]
pub struct CategoryCatalog {
    entries: BTreeMap<String, String>,
}

const BUILTIN: &[(&str, &str)] = &[
    ("groceries", "Groceries"),
    ("restaurants", "Restaurants & Bars"),
    ("transport", "Transport"),
    ("fuel", "Fuel"),
    ("utilities", "Utilities"),
    ("housing", "Housing"),
    ("health", "Health"),
    ("shopping", "Shopping"),
    ("leisure", "Leisure"),
    ("subscriptions", "Subscriptions"),
    ("insurance", "Insurance"),
    ("taxes", "Taxes & Fees"),
    ("cash", "Cash Withdrawals"),
    ("transfers", "Transfers"),
    ("salary", "Salary"),
    ("income", "Other Income"),
    (OTHER, "Other"),
    (PENDING, "Pending"),
];

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self::from_pairs(BUILTIN)
    }
}

impl CategoryCatalog {
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut entries: BTreeMap<String, String> = pairs
            .iter()
            .map(|(id, name)| (id.to_string(), name.to_string()))
            .collect();
        for reserved in [PENDING, OTHER] {
            entries
                .entry(reserved.to_string())
                .or_insert_with(|| reserved.to_string());
        }
        Self { entries }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn name(&self, id: &str) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

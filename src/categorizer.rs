use crate::catalog::PENDING;
use crate::models::{Transaction, TxType};

/// One keyword rule. Position in the owning `RuleSet` is its priority.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub name: &'static str,
    pub category: &'static str,
    pub income_only: bool,
    /// Lowercase substrings; any one of them is enough.
    pub keywords: &'static [&'static str],
}

impl Rule {
    pub fn matches(&self, txn: &Transaction) -> bool {
        if self.income_only && txn.kind != TxType::Income {
            return false;
        }
        let desc = txn.description.to_lowercase();
        self.keywords.iter().any(|kw| desc.contains(kw))
    }
}

const BUILTIN_RULES: &[Rule] = &[
    Rule {
        name: "Payroll",
        category: "salary",
        income_only: true,
        keywords: &["nomina", "nómina", "salario", "payroll"],
    },
    Rule {
        name: "Incoming money",
        category: "income",
        income_only: true,
        keywords: &[
            "transferencia recibida",
            "abono",
            "devolucion",
            "devolución",
            "reembolso",
            "bizum de",
            "intereses",
        ],
    },
    Rule {
        name: "Supermarkets",
        category: "groceries",
        income_only: false,
        keywords: &[
            "supermart",
            "supermercado",
            "mercadona",
            "carrefour",
            "lidl",
            "aldi",
            "alcampo",
            "eroski",
            "hipercor",
            "ahorramas",
            "consum",
        ],
    },
    Rule {
        name: "Eating out",
        category: "restaurants",
        income_only: false,
        keywords: &[
            "restaurante",
            "cafeteria",
            "cafe ",
            "burger",
            "mcdonald",
            "telepizza",
            "just eat",
            "glovo",
            "uber eats",
        ],
    },
    Rule {
        name: "Fuel stations",
        category: "fuel",
        income_only: false,
        keywords: &["gasolinera", "estacion de servicio", "repsol", "cepsa", "galp"],
    },
    Rule {
        name: "Getting around",
        category: "transport",
        income_only: false,
        keywords: &[
            "renfe", "metro", "emt ", "cabify", "uber", "taxi", "autobus", "blablacar",
            "iberia", "vueling", "ryanair", "parking",
        ],
    },
    Rule {
        name: "Utilities",
        category: "utilities",
        income_only: false,
        keywords: &[
            "iberdrola", "endesa", "naturgy", "canal de isabel", "movistar", "vodafone",
            "orange", "jazztel", "digi mobil",
        ],
    },
    Rule {
        name: "Housing",
        category: "housing",
        income_only: false,
        keywords: &["alquiler", "comunidad de propietarios", "hipoteca"],
    },
    Rule {
        name: "Insurance",
        category: "insurance",
        income_only: false,
        keywords: &["seguro", "mapfre", "mutua", "allianz", "axa "],
    },
    Rule {
        name: "Health",
        category: "health",
        income_only: false,
        keywords: &["farmacia", "clinica", "clínica", "dentista", "hospital", "optica"],
    },
    Rule {
        name: "Subscriptions",
        category: "subscriptions",
        income_only: false,
        keywords: &[
            "netflix", "spotify", "hbo", "disney", "amazon prime", "apple.com", "icloud",
            "google storage",
        ],
    },
    Rule {
        name: "Shopping",
        category: "shopping",
        income_only: false,
        keywords: &[
            "amazon", "zara", "el corte ingles", "ikea", "decathlon", "primark", "mediamarkt",
            "aliexpress",
        ],
    },
    Rule {
        name: "Leisure",
        category: "leisure",
        income_only: false,
        keywords: &["cine", "teatro", "gimnasio", "ticketmaster", "museo"],
    },
    Rule {
        name: "Cash",
        category: "cash",
        income_only: false,
        keywords: &["cajero", "retirada efectivo", "reintegro"],
    },
    Rule {
        name: "Taxes and fees",
        category: "taxes",
        income_only: false,
        keywords: &["comision", "comisión", "agencia tributaria", "impuesto", "ayuntamiento"],
    },
    Rule {
        name: "Transfers",
        category: "transfers",
        income_only: false,
        keywords: &["transferencia", "bizum", "traspaso"],
    },
];

#[derive(Debug, Default, Clone, PartialEq)]
pub struct CategorizeResult {
    pub categorized: usize,
    pub still_pending: usize,
    pub preserved: usize,
}

/// Ordered rule list; evaluation is first-match-wins in list order.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new(BUILTIN_RULES.to_vec())
    }
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn find_matching_rule(&self, txn: &Transaction) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.matches(txn))
    }

    pub fn categorize(&self, txn: &Transaction) -> &str {
        self.find_matching_rule(txn).map_or(PENDING, |rule| rule.category)
    }

    /// Recompute `category` in place.
    ///
    /// Records with a category override are never touched. With
    /// `preserve_manual`, any record that is no longer pending is left alone
    /// too; otherwise every other record is fully recomputed, so an earlier
    /// match can fall back to pending when rules change.
    pub fn apply_rules(&self, txns: &mut [Transaction], preserve_manual: bool) -> CategorizeResult {
        let mut result = CategorizeResult::default();
        for txn in txns.iter_mut() {
            if txn.has_category_override() || (preserve_manual && !txn.is_pending()) {
                result.preserved += 1;
                continue;
            }
            let category = self.categorize(txn);
            if category == PENDING {
                result.still_pending += 1;
            } else {
                tracing::debug!("{} -> {category}", txn.id);
                result.categorized += 1;
            }
            txn.category = category.to_string();
        }
        result
    }

    /// How many records each rule would claim, by position. Overridden
    /// records are not counted.
    pub fn hit_counts(&self, txns: &[Transaction]) -> Vec<usize> {
        let mut hits = vec![0usize; self.rules.len()];
        for txn in txns.iter().filter(|t| !t.has_category_override()) {
            if let Some(pos) = self.rules.iter().position(|rule| rule.matches(txn)) {
                hits[pos] += 1;
            }
        }
        hits
    }
}

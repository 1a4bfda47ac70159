use comfy_table::{Cell, Table};

use crate::categorizer::RuleSet;
use crate::error::Result;
use crate::settings::load_settings;
use crate::store::load_store;

pub fn list(store: Option<&str>) -> Result<()> {
    let settings = load_settings();
    let txns = load_store(&super::store_path(&settings, store))?;
    let rules = RuleSet::default();
    let hits = rules.hit_counts(&txns);

    let mut table = Table::new();
    table.set_header(vec!["#", "Name", "Category", "Income only", "Keywords", "Hits"]);
    for (pos, (rule, hits)) in rules.rules().iter().zip(hits).enumerate() {
        table.add_row(vec![
            Cell::new(pos + 1),
            Cell::new(rule.name),
            Cell::new(rule.category),
            Cell::new(if rule.income_only { "yes" } else { "" }),
            Cell::new(rule.keywords.join(", ")),
            Cell::new(hits),
        ]);
    }
    println!("Rules (first match wins)\n{table}");
    Ok(())
}

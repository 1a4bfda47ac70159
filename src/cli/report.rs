use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::catalog::CategoryCatalog;
use crate::error::Result;
use crate::fmt::money;
use crate::models::Transaction;
use crate::reports;
use crate::settings::load_settings;
use crate::store::load_store;

fn load(store: Option<&str>) -> Result<Vec<Transaction>> {
    let settings = load_settings();
    load_store(&super::store_path(&settings, store))
}

fn transaction_table(txns: &[&Transaction], with_category: bool) -> Table {
    let mut table = Table::new();
    let mut header = vec!["ID", "Date", "Description", "Amount"];
    if with_category {
        header.push("Category");
    }
    table.set_header(header);
    for t in txns {
        let mut row = vec![
            Cell::new(&t.id),
            Cell::new(&t.date),
            Cell::new(t.display_description()),
            Cell::new(money(t.signed_amount())),
        ];
        if with_category {
            row.push(Cell::new(t.effective_category()));
        }
        table.add_row(row);
    }
    table
}

pub fn pending(store: Option<&str>) -> Result<()> {
    let txns = load(store)?;
    let report = reports::get_pending(&txns);
    println!(
        "{} of {} transactions pending ({:.1}%)",
        report.pending.len(),
        report.total,
        report.pct()
    );
    if report.pending.is_empty() {
        println!("{}", "Everything is categorized.".green());
        return Ok(());
    }
    println!("{}", transaction_table(&report.pending, false));
    Ok(())
}

pub fn invalid(store: Option<&str>) -> Result<()> {
    let txns = load(store)?;
    let catalog = CategoryCatalog::default();
    let invalid = reports::get_invalid_categories(&txns, &catalog);
    if invalid.is_empty() {
        println!("{}", "All categories are valid.".green());
        return Ok(());
    }
    println!(
        "{}",
        format!("{} transaction(s) with unknown categories", invalid.len()).red()
    );
    println!("{}", transaction_table(&invalid, true));
    let valid: Vec<&str> = catalog.ids().collect();
    println!("Valid ids: {}", valid.join(", "));
    Ok(())
}

pub fn categories(store: Option<&str>) -> Result<()> {
    let txns = load(store)?;
    let totals = reports::get_category_totals(&txns, &CategoryCatalog::default());

    let mut table = Table::new();
    table.set_header(vec!["Id", "Category", "Count", "Income", "Expenses", "Net"]);
    for item in &totals {
        let net = if item.net() >= 0.0 {
            money(item.net()).green().to_string()
        } else {
            money(item.net()).red().to_string()
        };
        table.add_row(vec![
            Cell::new(&item.id),
            Cell::new(&item.name),
            Cell::new(item.count),
            Cell::new(money(item.income)),
            Cell::new(money(item.expenses)),
            Cell::new(net),
        ]);
    }
    println!("Categories\n{table}");
    Ok(())
}

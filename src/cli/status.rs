use crate::error::Result;
use crate::fmt::format_bytes;
use crate::reports::get_summary;
use crate::settings::{load_settings, settings_path};
use crate::store::load_store;

pub fn run(store: Option<&str>) -> Result<()> {
    let settings = load_settings();
    let path = super::store_path(&settings, store);

    println!("Settings:   {}", settings_path().display());
    println!("Data dir:   {}", settings.data_dir);
    println!("Statements: {}", settings.input_dir().display());
    println!("Store:      {}", path.display());
    println!("Account:    {}", settings.account);

    if path.exists() {
        let size = std::fs::metadata(&path)?.len();
        println!("Store size: {}", format_bytes(size));

        let summary = get_summary(&load_store(&path)?);
        println!();
        println!("Transactions:  {}", summary.total);
        println!("Pending:       {}", summary.pending);
        println!("Overridden:    {}", summary.overridden);
        if let (Some(first), Some(last)) = (&summary.first_date, &summary.last_date) {
            println!("Date range:    {first} .. {last}");
        }
    } else {
        println!();
        println!("Store not found. Run `extracto import` to create it.");
    }
    Ok(())
}

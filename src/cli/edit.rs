use crate::catalog::CategoryCatalog;
use crate::error::{ExtractoError, Result};
use crate::reviewer::{apply_edit, Edit};
use crate::settings::load_settings;
use crate::store::{load_store, save_store};

pub fn run(id: &str, edit: Edit, store: Option<&str>) -> Result<()> {
    let settings = load_settings();
    let path = super::store_path(&settings, store);
    if !path.exists() {
        return Err(ExtractoError::MissingInput(format!("no store at {}", path.display())));
    }
    let mut txns = load_store(&path)?;
    apply_edit(&mut txns, id, &edit, &CategoryCatalog::default())?;
    save_store(&path, &txns)?;

    if let Some(txn) = txns.iter().find(|t| t.id == id) {
        println!(
            "{} {}  {}  [{}]",
            txn.id,
            txn.date,
            txn.display_description(),
            txn.effective_category()
        );
    }
    Ok(())
}

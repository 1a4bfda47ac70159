use std::path::Path;

use crate::error::{ExtractoError, Result};
use crate::models::Transaction;

/// Read the persisted store. A missing file is an empty store; a file that
/// exists but cannot be read or parsed is fatal.
pub fn load_store(path: &Path) -> Result<Vec<Transaction>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = std::fs::read_to_string(path).map_err(|e| {
        ExtractoError::MissingInput(format!("cannot read store {}: {e}", path.display()))
    })?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(&content).map_err(|e| {
        ExtractoError::MissingInput(format!("cannot parse store {}: {e}", path.display()))
    })
}

/// Write the store through a sibling temp file and a rename, so a failed
/// write leaves the previous store intact.
pub fn save_store(path: &Path, txns: &[Transaction]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(txns)?;
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, format!("{json}\n"))?;
    std::fs::rename(&tmp, path)?;
    tracing::info!("wrote {} transactions to {}", txns.len(), path.display());
    Ok(())
}

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::categorizer::{CategorizeResult, RuleSet};
use crate::error::{ExtractoError, Result};
use crate::importer::{import_file, FileSummary, StatementLayout};
use crate::reconciler::{dedup_batch, find_duplicate_ids, merge};
use crate::store::{load_store, save_store};

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input_dir: PathBuf,
    pub store_path: PathBuf,
    pub account: String,
    pub layout: StatementLayout,
}

#[derive(Debug, Default)]
pub struct PipelineReport {
    pub files: Vec<FileSummary>,
    pub existing: usize,
    pub added: usize,
    pub already_present: usize,
    pub total: usize,
    pub categorized: usize,
    pub pending: usize,
    /// Integrity warning: ids that occur more than once in the written store.
    pub duplicate_ids: Vec<String>,
}

impl PipelineReport {
    pub fn row_failures(&self) -> usize {
        self.files.iter().map(|f| f.failures.len()).sum()
    }

    pub fn batch_duplicates(&self) -> usize {
        self.files.iter().map(|f| f.duplicates).sum()
    }
}

/// Statement files in `dir`, sorted by file name.
pub fn discover_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ExtractoError::MissingInput(format!(
            "input directory {} does not exist",
            dir.display()
        )));
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
        })
        .collect();
    if files.is_empty() {
        return Err(ExtractoError::MissingInput(format!(
            "no .csv statements found in {}",
            dir.display()
        )));
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Full import run: load, extract and build, dedup, categorize, merge,
/// recategorize everything, then persist. Nothing is written unless every
/// stage before the write succeeds.
pub fn run(config: &PipelineConfig, rules: &RuleSet) -> Result<PipelineReport> {
    let existing = load_store(&config.store_path)?;
    let files = discover_files(&config.input_dir)?;
    tracing::info!("{} statement file(s) in {}", files.len(), config.input_dir.display());

    let mut report = PipelineReport {
        existing: existing.len(),
        ..Default::default()
    };

    let mut seen = HashSet::new();
    let mut incoming = Vec::new();
    for path in &files {
        let (mut batch, mut summary) = import_file(path, &config.layout, &config.account)?;
        summary.duplicates = dedup_batch(&mut batch, &mut seen);
        incoming.extend(batch);
        report.files.push(summary);
    }

    rules.apply_rules(&mut incoming, false);

    let (mut merged, merge_result) = merge(existing, incoming);
    report.added = merge_result.added;
    report.already_present = merge_result.already_present;
    tracing::info!(
        "merged: {} added, {} already present",
        merge_result.added,
        merge_result.already_present
    );

    rules.apply_rules(&mut merged, false);

    report.total = merged.len();
    report.pending = merged.iter().filter(|t| t.is_pending()).count();
    report.categorized = report.total - report.pending;
    report.duplicate_ids = find_duplicate_ids(&merged);
    if !report.duplicate_ids.is_empty() {
        tracing::warn!(
            "integrity warning: {} duplicate id(s) in output: {}",
            report.duplicate_ids.len(),
            report.duplicate_ids.join(", ")
        );
    }

    save_store(&config.store_path, &merged)?;
    Ok(report)
}

/// Re-run the rules over the persisted store alone.
pub fn recategorize_store(store_path: &Path, rules: &RuleSet) -> Result<(CategorizeResult, usize)> {
    if !store_path.exists() {
        return Err(ExtractoError::MissingInput(format!(
            "no store at {}",
            store_path.display()
        )));
    }
    let mut txns = load_store(store_path)?;
    let result = rules.apply_rules(&mut txns, false);
    save_store(store_path, &txns)?;
    Ok((result, txns.len()))
}

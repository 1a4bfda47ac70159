use std::path::PathBuf;

use colored::Colorize;

use crate::categorizer::RuleSet;
use crate::error::Result;
use crate::pipeline::{run as run_pipeline, PipelineConfig};
use crate::settings::load_settings;

pub fn run(input_dir: Option<&str>, store: Option<&str>, account: Option<&str>) -> Result<()> {
    let settings = load_settings();
    let config = PipelineConfig {
        input_dir: input_dir.map_or_else(|| settings.input_dir(), PathBuf::from),
        store_path: super::store_path(&settings, store),
        account: account.unwrap_or(settings.account.as_str()).to_string(),
        layout: settings.layout.clone(),
    };

    let report = run_pipeline(&config, &RuleSet::default())?;

    for file in &report.files {
        println!(
            "{}: {} rows, {} built, {} skipped, {} duplicate",
            file.file_name,
            file.rows,
            file.built,
            file.failures.len(),
            file.duplicates
        );
        for failure in &file.failures {
            println!("  line {}: {}", failure.line, failure.reason);
        }
    }
    println!(
        "{} added, {} already in store ({} before, {} now)",
        report.added, report.already_present, report.existing, report.total
    );
    println!("{} categorized, {} pending", report.categorized, report.pending);
    if report.row_failures() > 0 {
        println!("{}", format!("{} row(s) skipped, see log", report.row_failures()).yellow());
    }
    if !report.duplicate_ids.is_empty() {
        println!(
            "{}",
            format!(
                "Warning: {} duplicate id(s) in store: {}",
                report.duplicate_ids.len(),
                report.duplicate_ids.join(", ")
            )
            .red()
        );
    }
    Ok(())
}

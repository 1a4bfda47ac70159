pub mod categorize;
pub mod edit;
pub mod import;
pub mod init;
pub mod report;
pub mod rules;
pub mod status;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::settings::Settings;

/// Store path from `--store`, falling back to the configured data dir.
pub(crate) fn store_path(settings: &Settings, store: Option<&str>) -> PathBuf {
    store.map_or_else(|| settings.store_path(), PathBuf::from)
}

#[derive(Parser)]
#[command(
    name = "extracto",
    version,
    about = "Import bank statement CSVs, deduplicate and categorize transactions."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up extracto: choose a data directory and create its folders.
    Init {
        /// Path for extracto data (default: ~/Documents/extracto)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Import every statement in the input directory into the store.
    Import {
        /// Directory of statement CSVs (default: <data_dir>/statements)
        #[arg(long = "input-dir")]
        input_dir: Option<String>,
        /// Transaction store file (default: <data_dir>/transactions.json)
        #[arg(long)]
        store: Option<String>,
        /// Account label stamped on new transactions
        #[arg(long)]
        account: Option<String>,
    },
    /// Re-run the categorization rules over the whole store.
    Categorize {
        #[arg(long)]
        store: Option<String>,
    },
    /// Set or clear manual overrides on one transaction.
    Edit {
        /// Transaction id, e.g. tx_3f9a0c12be45
        id: String,
        /// Category id to pin on this transaction
        #[arg(long, conflicts_with = "clear_category")]
        category: Option<String>,
        /// Replacement description for display
        #[arg(long, conflicts_with = "clear_description")]
        description: Option<String>,
        /// Remove the category override
        #[arg(long = "clear-category")]
        clear_category: bool,
        /// Remove the description override
        #[arg(long = "clear-description")]
        clear_description: bool,
        #[arg(long)]
        store: Option<String>,
    },
    /// Inspect categorization rules.
    Rules {
        #[command(subcommand)]
        command: RulesCommands,
    },
    /// Read-only reports over the store.
    Report {
        #[command(subcommand)]
        command: ReportCommands,
    },
    /// Show settings and store summary.
    Status {
        #[arg(long)]
        store: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum RulesCommands {
    /// List rules in evaluation order, with hits against the store.
    List {
        #[arg(long)]
        store: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ReportCommands {
    /// Transactions no rule has classified.
    Pending {
        #[arg(long)]
        store: Option<String>,
    },
    /// Transactions whose category is not in the catalog.
    Invalid {
        #[arg(long)]
        store: Option<String>,
    },
    /// Counts and totals per category.
    Categories {
        #[arg(long)]
        store: Option<String>,
    },
}

mod catalog;
mod categorizer;
mod cli;
mod error;
mod fmt;
mod identity;
mod importer;
mod models;
mod parse;
mod pipeline;
mod reconciler;
mod reports;
mod reviewer;
mod settings;
mod store;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, ReportCommands, RulesCommands};
use reviewer::Edit;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { data_dir } => cli::init::run(data_dir),
        Commands::Import {
            input_dir,
            store,
            account,
        } => cli::import::run(input_dir.as_deref(), store.as_deref(), account.as_deref()),
        Commands::Categorize { store } => cli::categorize::run(store.as_deref()),
        Commands::Edit {
            id,
            category,
            description,
            clear_category,
            clear_description,
            store,
        } => cli::edit::run(
            &id,
            Edit {
                category,
                description,
                clear_category,
                clear_description,
            },
            store.as_deref(),
        ),
        Commands::Rules { command } => match command {
            RulesCommands::List { store } => cli::rules::list(store.as_deref()),
        },
        Commands::Report { command } => match command {
            ReportCommands::Pending { store } => cli::report::pending(store.as_deref()),
            ReportCommands::Invalid { store } => cli::report::invalid(store.as_deref()),
            ReportCommands::Categories { store } => cli::report::categories(store.as_deref()),
        },
        Commands::Status { store } => cli::status::run(store.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

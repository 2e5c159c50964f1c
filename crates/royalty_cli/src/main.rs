//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `royalty_core` wiring by running one signing scenario.
//! - Print the resulting catalog as JSON for quick local sanity checks.
//!
//! Logging is enabled only when `ROYALTY_LOG_DIR` is set.

use log::info;
use royalty_core::{
    core_version, init_logging, AuthorService, BookService, ContractService, InMemoryCatalog,
    LogConfig,
};
use std::error::Error;
use std::process::ExitCode;

const SCENARIO_DATE: &str = "2023-01-01";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("royalty_cli error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    if let Some(config) = LogConfig::from_env()? {
        init_logging(&config)?;
    }

    let catalog = InMemoryCatalog::new();
    let authors = AuthorService::new(&catalog);
    let books = BookService::new(&catalog);
    let contracts = ContractService::new(&catalog);

    let jane = authors.create_author("Jane");
    let hamlet = books.create_book("Hamlet");
    authors.sign_contract(&jane, &hamlet, SCENARIO_DATE, 100)?;

    println!("royalty_core version={}", core_version());
    println!(
        "author={} books={} total_royalties={}",
        jane.name,
        authors.books(&jane).len(),
        authors.total_royalties(&jane)
    );
    println!(
        "date={} contracts={}",
        SCENARIO_DATE,
        contracts.contracts_by_date(SCENARIO_DATE).len()
    );
    println!("{}", serde_json::to_string_pretty(&catalog.snapshot())?);

    info!("event=cli_run module=cli status=ok");
    Ok(())
}

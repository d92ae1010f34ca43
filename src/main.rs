mod cli;

use cli::Args;
use cve_lookup::prelude::*;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse command-line arguments; clap exits with code 2 on usage errors
    let args = Args::parse_args();

    init_tracing();

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::from_error(&e).as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    // Create adapters (Dependency Injection)
    let repository = match args.api_url.as_deref() {
        Some(api_url) => NvdClient::with_base_url(api_url)?,
        None => NvdClient::new()?,
    };
    let formatter = TableFormatter::new();
    let presenter = StdoutPresenter::new();

    let use_case = LookupCveUseCase::new(repository, formatter, presenter);

    let request = LookupRequest::new(args.identifier, args.verbose);
    use_case.execute(request)?;

    Ok(())
}

/// Diagnostics go to stderr so stdout only ever carries the table or raw echo
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

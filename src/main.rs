// src/main.rs
// =============================================================================
// Entry point of the link-sieve CLI.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Start logging to the console and to {country}_linvalid_link.log
// 3. Validate every input file, in order
// 4. Write {country}_links.json and {country}_invalid_links.json
// 5. Exit 0 when the run completed, 2 on a fatal error
// =============================================================================

use anyhow::Result;
use clap::Parser;
use log::info;
use std::time::Instant;

use link_sieve::checker::HttpProbe;
use link_sieve::cli::Cli;
use link_sieve::config::ValidatorSettings;
use link_sieve::{logging, validate};

#[tokio::main]
async fn main() {
    // Argument errors exit here through clap, before any work begins
    let cli = Cli::parse();

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> Result<()> {
    let started = Instant::now();
    let settings = ValidatorSettings::default();
    let paths = settings.output_paths(&cli.country);

    logging::init(&paths.log)?;
    info!(
        "Validating links for {} from {} file(s)",
        cli.country,
        cli.inputs.len()
    );

    let probe = HttpProbe::new(settings.timeout)?;
    let report = validate::run_batch(&cli.inputs, &probe, &settings).await?;
    validate::write_outputs(&report, &paths)?;

    info!("Run finished in {:.2?}", started.elapsed());
    Ok(())
}

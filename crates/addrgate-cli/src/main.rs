//! `addrgate` — validate one address from the command line.
//!
//! Exit codes: 0 pass, 1 fail, 2 configuration or service error.

use std::collections::HashMap;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use addrgate_core::ValidationOutcome;
use addrgate_runtime::{AddressValidator, ClientConfig, GoogleAddressClient, Validator};

#[derive(Parser, Debug)]
#[command(
    name = "addrgate",
    version,
    about = "Validate an address against the Google Address Validation API"
)]
struct Cli {
    /// Address to validate
    address: String,

    /// CLDR region code constraining verification
    #[arg(long, default_value = "US")]
    region: String,

    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let client = GoogleAddressClient::new(ClientConfig {
        region_code: cli.region,
        ..ClientConfig::default()
    })
    .context("failed to configure verification client")?;

    let validator = AddressValidator::new(Arc::new(client));
    let outcome = validator
        .validate(&cli.address, &HashMap::new())
        .await
        .context("address verification failed")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        match &outcome {
            ValidationOutcome::Pass => println!("PASS: {}", cli.address),
            ValidationOutcome::Fail {
                error_message,
                fix_value,
            } => {
                println!("FAIL: {error_message}");
                if let Some(fix) = fix_value {
                    println!("suggested fix: {fix}");
                }
            }
        }
    }

    Ok(if outcome.is_pass() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

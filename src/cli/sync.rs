use anyhow::Result;
use clap::Parser;

use super::CommonArgs;
use crate::config::SyncCredentials;
use crate::logging;
use crate::sync::{HttpTransport, SyncOutcome, run_sync};
use crate::utils::terminal::{MAX_ECHO_CHARS, sanitize_for_terminal};

#[derive(Parser)]
#[command(name = "sync-database")]
#[command(version = "0.1.0")]
#[command(
    about = "Submit the HTML file manifest to the remote database in one batch",
    long_about = "Submit the HTML file manifest to the remote database in one batch.\n\n\
                  Requires GAS_URL (endpoint) and ACTION_KEY (shared secret) in the \
                  environment; the variable names can be changed in the config file."
)]
pub struct Cli {
    #[command(flatten)]
    pub common: CommonArgs,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init();

    let config = cli.common.load_config()?;
    // Credentials are a precondition: fail before scanning or touching the network
    let credentials = SyncCredentials::from_env(&config.sync)?;
    let root = cli.common.root_or(&config.sync.root);

    let transport = HttpTransport::new()?;
    let outcome = run_sync(root, &config, credentials, &transport)?;

    match outcome {
        SyncOutcome::NothingToSync => println!("No files found to sync."),
        SyncOutcome::Synced { count, response } => {
            println!("Successfully synced {} files.", count);
            println!("Server Response: {}", sanitize_for_terminal(&response, MAX_ECHO_CHARS));
        }
        SyncOutcome::Rejected { status, body } => {
            println!("Failed to sync. Status Code: {}", status);
            println!("{}", sanitize_for_terminal(&body, MAX_ECHO_CHARS));
        }
        SyncOutcome::Failed { reason } => {
            println!("An error occurred: {}", sanitize_for_terminal(&reason, MAX_ECHO_CHARS));
        }
    }

    Ok(())
}

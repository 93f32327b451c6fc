use anyhow::Result;
use clap::Parser;

use super::CommonArgs;
use crate::indexer::generate_index;
use crate::logging;

#[derive(Parser)]
#[command(name = "generate-index")]
#[command(version = "0.1.0")]
#[command(
    about = "Generate a searchable index.html for a year-organised collection of HTML files",
    long_about = None
)]
pub struct Cli {
    #[command(flatten)]
    pub common: CommonArgs,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init();

    let config = cli.common.load_config()?;
    let root = cli.common.root_or(&config.index.root);

    let report = generate_index(root, &config)?;

    println!("--- Success ---");
    println!(
        "Generated {} at: {} ({} years, {} files)",
        config.index.output_file,
        report.output_path.display(),
        report.years,
        report.files
    );

    Ok(())
}

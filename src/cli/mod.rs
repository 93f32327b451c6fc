//! Command-line front ends for the two binaries
//!
//! Both commands run with no arguments. `--root` and `--config` exist to point them
//! at a different tree or settings file.

pub mod generate;
pub mod sync;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;

use crate::config::Config;

/// Options shared by both commands
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Collection root (defaults to the root in the config, `PastPaper`)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// TOML file overriding the built-in settings
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl CommonArgs {
    fn load_config(&self) -> Result<Config> {
        Config::load(self.config.as_deref())
    }

    fn root_or<'a>(&'a self, configured: &'a Path) -> &'a Path {
        self.root.as_deref().unwrap_or(configured)
    }
}

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Alphabetical contact list with a draggable side index.
#[derive(Parser, Debug, Default)]
#[command(name = "rolodex", version)]
pub struct Cli {
    /// Config file (default: ~/.config/rolodex/config.toml).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// TOML contacts file. Overrides `store.contacts_file`.
    #[arg(long, value_name = "PATH")]
    pub contacts: Option<PathBuf>,

    /// Make the sample store fail its first fetch.
    #[arg(long)]
    pub fail_first_fetch: bool,

    /// Artificial sample store latency, in milliseconds.
    #[arg(long, value_name = "MS")]
    pub latency_ms: Option<u64>,
}

impl Cli {
    /// Layer command-line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.contacts {
            config.store.contacts_file = Some(path.clone());
        }
        if self.fail_first_fetch {
            config.store.fail_first_fetch = true;
        }
        if let Some(latency) = self.latency_ms {
            config.store.simulated_latency_ms = latency;
        }
    }
}

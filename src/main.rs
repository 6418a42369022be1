use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;

use rolodex::cli::Cli;
use rolodex::config::Config;
use rolodex::contacts::{ContactStore, FileContactStore, SampleContactStore};
use rolodex::logging::init_tracing;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;
    cli.apply(&mut config);

    // Still on the plain terminal, so stderr is visible.
    if let Err(err) = init_tracing(&config.logging) {
        eprintln!("Warning: logging disabled: {err}");
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;

    let store: Arc<dyn ContactStore> = match &config.store.contacts_file {
        Some(path) => {
            let store = FileContactStore::new(path.clone());
            tracing::info!(path = %store.path().display(), "Reading contacts from file");
            Arc::new(store)
        }
        None => Arc::new(SampleContactStore::new(
            Duration::from_millis(config.store.simulated_latency_ms),
            config.store.fail_first_fetch,
        )),
    };
    tracing::info!(store = store.name(), "Starting rolodex");

    rolodex::ui::run(&config, store, runtime.handle().clone()).context("running terminal UI")?;
    Ok(())
}

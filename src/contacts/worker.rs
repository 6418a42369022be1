//! Background fetch worker.
//!
//! The UI thread never awaits a fetch. It posts a [`FetchRequest`] tagged
//! with the load generation, and the worker reports a [`FetchOutcome`]
//! carrying the same tag back through the supplied callback.

use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;

use super::error::FetchError;
use super::model::Contact;
use super::store::ContactStore;

/// Command to fetch contacts for one load generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: u64,
}

/// Completion of a [`FetchRequest`].
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOutcome {
    pub generation: u64,
    pub result: Result<Vec<Contact>, FetchError>,
}

pub type FetchRequestSender = mpsc::UnboundedSender<FetchRequest>;

/// Spawn the worker on `runtime` and return the request sender.
///
/// Each request runs in its own task so a slow fetch never delays a newer
/// one; stale outcomes are filtered by generation on the UI side.
pub fn spawn_fetch_worker<F>(
    runtime: &Handle,
    store: Arc<dyn ContactStore>,
    on_outcome: F,
) -> FetchRequestSender
where
    F: Fn(FetchOutcome) + Send + Sync + 'static,
{
    let (tx, mut rx) = mpsc::unbounded_channel::<FetchRequest>();
    let on_outcome = Arc::new(on_outcome);
    let spawner = runtime.clone();

    runtime.spawn(async move {
        while let Some(FetchRequest { generation }) = rx.recv().await {
            let store = Arc::clone(&store);
            let on_outcome = Arc::clone(&on_outcome);
            spawner.spawn(async move {
                tracing::debug!(generation, store = store.name(), "Fetching contacts");
                let result = store.fetch_contacts().await;
                match &result {
                    Ok(contacts) => {
                        tracing::info!(generation, count = contacts.len(), "Contacts fetched")
                    }
                    Err(err) => tracing::warn!(generation, error = %err, "Contact fetch failed"),
                }
                on_outcome(FetchOutcome { generation, result });
            });
        }
        tracing::trace!("Fetch worker stopped (request channel closed)");
    });

    tx
}

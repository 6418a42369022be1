//! Intents for the load lifecycle.

use crate::contacts::FetchError;
use crate::ui::mvi::Intent;

/// Intents that can be dispatched to [`LoadReducer`](super::LoadReducer).
#[derive(Debug, Clone)]
pub enum LoadIntent<T> {
    /// Start a fetch (first load, retry, or refresh).
    Request,

    /// The fetch tagged `generation` returned data.
    Succeeded { generation: u64, value: T },

    /// The fetch tagged `generation` failed.
    Failed { generation: u64, error: FetchError },
}

impl<T: Send + 'static> Intent for LoadIntent<T> {}

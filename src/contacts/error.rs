use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by a [`ContactStore`](super::ContactStore) fetch.
///
/// Stored inside UI state, so it keeps only displayable strings and is
/// cheap to clone and compare.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Failed to read contacts from '{path}': {message}")]
    Io { path: PathBuf, message: String },

    #[error("Failed to parse contacts file '{path}': {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Contact store unavailable: {message}")]
    Unavailable { message: String },
}

impl FetchError {
    /// Short headline for the error surface.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::Io { .. } => "Couldn't read your contacts",
            FetchError::Parse { .. } => "Your contacts file looks damaged",
            FetchError::Unavailable { .. } => "Contacts are unavailable right now",
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        FetchError::Unavailable {
            message: message.into(),
        }
    }
}

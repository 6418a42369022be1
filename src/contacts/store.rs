//! Contact stores: the asynchronous data source behind the list.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use super::error::FetchError;
use super::model::Contact;

/// Asynchronous source of contacts.
///
/// Called exactly once per accepted load request. Implementations must not
/// retry on their own; retry is always user initiated.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Fetch a full snapshot of the contacts.
    async fn fetch_contacts(&self) -> Result<Vec<Contact>, FetchError>;
}

/// On-disk contacts file layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactFile {
    #[serde(default)]
    pub contacts: Vec<Contact>,
}

/// Store backed by a TOML contacts file, re-read on every fetch.
pub struct FileContactStore {
    path: PathBuf,
}

impl FileContactStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ContactStore for FileContactStore {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn fetch_contacts(&self) -> Result<Vec<Contact>, FetchError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| FetchError::Io {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        let file: ContactFile = toml::from_str(&content).map_err(|e| FetchError::Parse {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        tracing::debug!(
            path = %self.path.display(),
            count = file.contacts.len(),
            "Contacts file read"
        );
        Ok(file.contacts)
    }
}

/// Built-in demo store with simulated latency.
///
/// With `fail_first` set, the first fetch fails so the retry surface can be
/// tried out; every later fetch succeeds.
pub struct SampleContactStore {
    contacts: Vec<Contact>,
    latency: Duration,
    fail_next: AtomicBool,
}

impl SampleContactStore {
    pub fn new(latency: Duration, fail_first: bool) -> Self {
        Self::with_contacts(sample_contacts(), latency, fail_first)
    }

    pub fn with_contacts(contacts: Vec<Contact>, latency: Duration, fail_first: bool) -> Self {
        Self {
            contacts,
            latency,
            fail_next: AtomicBool::new(fail_first),
        }
    }
}

#[async_trait]
impl ContactStore for SampleContactStore {
    fn name(&self) -> &'static str {
        "sample"
    }

    async fn fetch_contacts(&self) -> Result<Vec<Contact>, FetchError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(FetchError::unavailable("simulated network failure"));
        }
        Ok(self.contacts.clone())
    }
}

const SAMPLE_NAMES: &[&str] = &[
    "Aaliyah Brooks",
    "Adam Fischer",
    "Ana Lima",
    "Benedikt Huber",
    "Bianca Rossi",
    "Carlos Mendes",
    "Chloé Martin",
    "Dmitri Volkov",
    "Elena Petrova",
    "Émile Laurent",
    "Farah Haddad",
    "Gabriel Costa",
    "Hana Sato",
    "Ingrid Larsen",
    "Jonas Berg",
    "Kofi Mensah",
    "Laila Ahmadi",
    "Mateo García",
    "Nora Lindqvist",
    "Oskar Nowak",
    "Priya Nair",
    "Quentin Dubois",
    "Rosa Jiménez",
    "Sven Olsen",
    "Tomás Herrera",
    "Uma Iyer",
    "Viktor Horvat",
    "Wen Li",
    "Ximena Ortiz",
    "Yusuf Demir",
    "Zara Khan",
    "",
];

fn sample_contacts() -> Vec<Contact> {
    SAMPLE_NAMES
        .iter()
        .enumerate()
        .map(|(idx, name)| Contact::new(format!("sample-{}", idx + 1), *name))
        .collect()
}

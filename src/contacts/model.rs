use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable contact identifier assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(String);

impl ContactId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh random identifier for contacts stored without one.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ContactId {
    fn default() -> Self {
        Self::generate()
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single contact as handed out by the store. Immutable snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub id: ContactId,
    /// Display name. May be empty.
    #[serde(default)]
    pub name: String,
}

impl Contact {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: ContactId::new(id),
            name: name.into(),
        }
    }

    /// Contact with a generated identifier.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: ContactId::generate(),
            name: name.into(),
        }
    }
}

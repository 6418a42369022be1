//! Partitioning a flat contact list into lettered sections.
//!
//! Keys are the uppercased first character of the display name. Contacts
//! with an empty name land in the unknown group, whose key is the empty
//! string and therefore sorts ahead of every letter. Ordering is ordinal
//! (`String`'s `Ord`), the same comparator used for the scrubber titles.
//! Inside a group, contacts keep their source order.

use std::collections::BTreeMap;
use std::fmt;

use super::model::Contact;

/// Label shown for the unknown group.
const UNKNOWN_LABEL: &str = "#";

/// Section key. Doubles as the scroll anchor identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct GroupKey(String);

impl GroupKey {
    /// Key for contacts without a first character.
    pub fn unknown() -> Self {
        Self(String::new())
    }

    /// Normalized key for a display name.
    pub fn for_name(name: &str) -> Self {
        match name.chars().next() {
            Some(first) => Self(first.to_uppercase().collect()),
            None => Self::unknown(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw key value (empty for the unknown group).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Text used for headers, scrubber rows and the bubble.
    pub fn label(&self) -> &str {
        if self.is_unknown() {
            UNKNOWN_LABEL
        } else {
            &self.0
        }
    }
}

impl From<&str> for GroupKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One section of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactGroup {
    pub key: GroupKey,
    pub contacts: Vec<Contact>,
}

/// Group contacts by normalized first letter, sorted by key.
///
/// Total over any input: empty input gives no groups, duplicate names are
/// all retained.
pub fn group_contacts(contacts: &[Contact]) -> Vec<ContactGroup> {
    let mut buckets: BTreeMap<GroupKey, Vec<Contact>> = BTreeMap::new();
    for contact in contacts {
        buckets
            .entry(GroupKey::for_name(&contact.name))
            .or_default()
            .push(contact.clone());
    }

    buckets
        .into_iter()
        .map(|(key, contacts)| ContactGroup { key, contacts })
        .collect()
}

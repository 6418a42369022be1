//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use parking_lot::Mutex;
use rolodex::config::{HapticIntensity, ScrubberConfig};
use rolodex::contacts::{Contact, FetchRequest, GroupKey};
use rolodex::ui::controller::ContactListController;
use rolodex::ui::haptics::Haptics;
use rolodex::ui::scrubber::{IndexScrubber, ScrubberHost, ScrubberIntent};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::sync::mpsc;

pub fn keys(labels: &[&str]) -> Vec<GroupKey> {
    labels.iter().map(|label| GroupKey::from(*label)).collect()
}

pub fn contacts(names: &[&str]) -> Vec<Contact> {
    names.iter().map(|name| Contact::named(*name)).collect()
}

pub fn names(contacts: &[Contact]) -> Vec<&str> {
    contacts.iter().map(|contact| contact.name.as_str()).collect()
}

/// Records every host effect the scrubber performs.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub scrolls: Vec<GroupKey>,
    pub pulses: Vec<HapticIntensity>,
}

impl ScrubberHost for RecordingHost {
    fn scroll_to_anchor(&mut self, key: &GroupKey) {
        self.scrolls.push(key.clone());
    }

    fn pulse_haptic(&mut self, intensity: HapticIntensity) {
        self.pulses.push(intensity);
    }
}

/// Scrubber with `labels` as keys, one cell per row, column sized to fit.
pub fn scrubber_with_keys(labels: &[&str]) -> IndexScrubber {
    let mut scrubber = IndexScrubber::new(&ScrubberConfig::default());
    let mut host = RecordingHost::default();
    scrubber.dispatch(
        ScrubberIntent::SetKeys { keys: keys(labels) },
        &mut host,
    );
    scrubber.dispatch(
        ScrubberIntent::Resize {
            column_height: labels.len() as f32,
        },
        &mut host,
    );
    scrubber
}

/// Pointer position at the center of row `index` for a column sized by
/// [`scrubber_with_keys`].
pub fn row_center(index: usize) -> f32 {
    index as f32 + 0.5
}

/// Haptics that count pulses into a shared cell.
#[derive(Debug, Clone, Default)]
pub struct CountingHaptics {
    pub pulses: Arc<Mutex<usize>>,
}

impl Haptics for CountingHaptics {
    fn pulse(&mut self, _intensity: HapticIntensity) {
        *self.pulses.lock() += 1;
    }
}

/// Controller wired to a request channel the test can inspect.
pub fn controller() -> (
    ContactListController,
    mpsc::UnboundedReceiver<FetchRequest>,
    CountingHaptics,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    let haptics = CountingHaptics::default();
    let controller =
        ContactListController::new(&ScrubberConfig::default(), tx, Box::new(haptics.clone()));
    (controller, rx, haptics)
}

/// Write `content` to `name` inside a fresh temp dir.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    (dir, path)
}

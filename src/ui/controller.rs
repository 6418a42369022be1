//! Contact list screen controller.
//!
//! Ties the load state, grouping, section list and scrubber together:
//! requests contacts on first appearance, regroups whenever the displayed
//! value changes, keeps the scrubber's keys in step with the sections, and
//! routes scrubber selections into `SectionList::scroll_to_anchor`.

use std::time::Instant;

use crate::config::{HapticIntensity, ScrubberConfig};
use crate::contacts::{
    group_contacts, Contact, ContactGroup, FetchError, FetchOutcome, FetchRequest,
    FetchRequestSender, GroupKey,
};
use crate::ui::haptics::Haptics;
use crate::ui::loadable::{LoadIntent, LoadReducer, LoadState, LoadView, Loadable};
use crate::ui::mvi::Reducer;
use crate::ui::scrubber::{HideTimer, IndexScrubber, ScrubberHost, ScrubberIntent, ScrubberState};
use crate::ui::section_list::SectionList;

/// What the list screen shows right now.
#[derive(Debug)]
pub enum ContactListView<'a> {
    /// Not requested yet.
    Blank,
    /// First load in progress.
    Spinner,
    /// Grouped contacts; `refreshing` overlays a loading indicator.
    Sections {
        list: &'a SectionList,
        scrubber: &'a ScrubberState,
        refreshing: bool,
    },
    /// Fetch failed; offer retry.
    Error(&'a FetchError),
}

/// Adapter handing the scrubber its host capabilities.
struct ListHost<'a> {
    list: &'a mut SectionList,
    haptics: &'a mut dyn Haptics,
}

impl ScrubberHost for ListHost<'_> {
    fn scroll_to_anchor(&mut self, key: &GroupKey) {
        self.list.scroll_to_anchor(key);
    }

    fn pulse_haptic(&mut self, intensity: HapticIntensity) {
        self.haptics.pulse(intensity);
    }
}

pub struct ContactListController {
    load: LoadState<Vec<Contact>>,
    groups: Vec<ContactGroup>,
    list: SectionList,
    scrubber: IndexScrubber,
    haptics: Box<dyn Haptics>,
    fetch: FetchRequestSender,
    appeared: bool,
}

impl ContactListController {
    pub fn new(
        config: &ScrubberConfig,
        fetch: FetchRequestSender,
        haptics: Box<dyn Haptics>,
    ) -> Self {
        Self {
            load: LoadState::default(),
            groups: Vec::new(),
            list: SectionList::default(),
            scrubber: IndexScrubber::new(config),
            haptics,
            fetch,
            appeared: false,
        }
    }

    pub fn load_state(&self) -> &LoadState<Vec<Contact>> {
        &self.load
    }

    pub fn groups(&self) -> &[ContactGroup] {
        &self.groups
    }

    pub fn list(&self) -> &SectionList {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut SectionList {
        &mut self.list
    }

    pub fn scrubber(&self) -> &ScrubberState {
        self.scrubber.state()
    }

    /// Called when the screen is shown. Requests once, the first time only.
    pub fn on_appear(&mut self) {
        if self.appeared {
            return;
        }
        self.appeared = true;
        if self.load.is_not_requested() {
            self.request();
        }
    }

    /// Start a fetch unless one is already in flight.
    ///
    /// Returns true if a new fetch was started.
    pub fn request(&mut self) -> bool {
        let before = self.load.generation();
        self.dispatch_load(LoadIntent::Request);
        let generation = self.load.generation();

        if generation == before {
            tracing::debug!(generation, "Load already in flight, request ignored");
            return false;
        }

        tracing::info!(generation, "Requesting contacts");
        if self.fetch.send(FetchRequest { generation }).is_err() {
            tracing::warn!(generation, "Fetch worker is gone");
        }
        true
    }

    /// User-initiated retry from the error surface.
    pub fn retry(&mut self) -> bool {
        matches!(self.load.phase(), Loadable::Failed(_)) && self.request()
    }

    /// Reload while keeping the current contacts on screen.
    pub fn refresh(&mut self) -> bool {
        matches!(self.load.phase(), Loadable::Loaded(_)) && self.request()
    }

    pub fn on_fetch_outcome(&mut self, outcome: FetchOutcome) {
        let FetchOutcome { generation, result } = outcome;
        if self.load.in_flight() != Some(generation) {
            tracing::debug!(
                generation,
                latest = self.load.generation(),
                "Discarding stale fetch result"
            );
            return;
        }

        let intent = match result {
            Ok(value) => LoadIntent::Succeeded { generation, value },
            Err(error) => LoadIntent::Failed { generation, error },
        };
        self.dispatch_load(intent);
    }

    fn dispatch_load(&mut self, intent: LoadIntent<Vec<Contact>>) {
        let before = self.load.phase().value().cloned();
        self.load = LoadReducer::reduce(std::mem::take(&mut self.load), intent);
        if self.load.phase().value() != before.as_ref() {
            self.regroup();
        }
    }

    fn regroup(&mut self) {
        self.groups = self
            .load
            .phase()
            .value()
            .map(|contacts| group_contacts(contacts))
            .unwrap_or_default();
        self.list.set_groups(&self.groups);
        let keys = self.groups.iter().map(|group| group.key.clone()).collect();
        self.dispatch_scrubber(ScrubberIntent::SetKeys { keys });
    }

    /// Lay out the list viewport and the scrubber column.
    pub fn resize(&mut self, list_rows: u16, column_height: u16) {
        self.list.set_viewport(list_rows as usize);
        self.dispatch_scrubber(ScrubberIntent::Resize {
            column_height: column_height as f32,
        });
    }

    pub fn pointer_down(&mut self, y: f32) -> Option<HideTimer> {
        self.dispatch_scrubber(ScrubberIntent::PointerDown { y })
    }

    pub fn pointer_move(&mut self, y: f32) -> Option<HideTimer> {
        self.dispatch_scrubber(ScrubberIntent::PointerMove { y })
    }

    pub fn pointer_up(&mut self, at: Instant) -> Option<HideTimer> {
        self.dispatch_scrubber(ScrubberIntent::PointerUp { at })
    }

    pub fn tap(&mut self, index: usize, at: Instant) -> Option<HideTimer> {
        self.dispatch_scrubber(ScrubberIntent::Tap { index, at })
    }

    /// Tap the scrubber row for `key`, if there is one.
    pub fn jump_to_key(&mut self, key: &GroupKey, at: Instant) -> Option<HideTimer> {
        let index = self
            .scrubber
            .state()
            .keys()
            .iter()
            .position(|candidate| candidate == key)?;
        self.tap(index, at)
    }

    pub fn hide_timer_fired(&mut self, token: u64, at: Instant) {
        self.dispatch_scrubber(ScrubberIntent::HideTimerFired { token, at });
    }

    fn dispatch_scrubber(&mut self, intent: ScrubberIntent) -> Option<HideTimer> {
        let mut host = ListHost {
            list: &mut self.list,
            haptics: self.haptics.as_mut(),
        };
        self.scrubber.dispatch(intent, &mut host)
    }

    pub fn view(&self) -> ContactListView<'_> {
        match self.load.view() {
            LoadView::Blank => ContactListView::Blank,
            LoadView::Spinner => ContactListView::Spinner,
            LoadView::Content { refreshing, .. } => ContactListView::Sections {
                list: &self.list,
                scrubber: self.scrubber.state(),
                refreshing,
            },
            LoadView::Error(error) => ContactListView::Error(error),
        }
    }
}

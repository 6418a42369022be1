//! Interaction state for the scrubber.

use std::time::{Duration, Instant};

use crate::contacts::GroupKey;
use crate::ui::mvi::UiState;

use super::layout::ScrubberLayout;

/// Default bubble auto-hide delay.
pub const DEFAULT_HIDE_DELAY: Duration = Duration::from_millis(250);

/// Pending bubble auto-hide.
///
/// Only the most recently scheduled token can hide the bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideTimer {
    pub token: u64,
    pub deadline: Instant,
}

/// Scrubber interaction state.
///
/// `active_key` is `None` until the first interaction lands on a row, and
/// again once the key it named disappears from the key list.
/// `bubble_visible` implies `active_key.is_some()`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrubberState {
    pub(super) keys: Vec<GroupKey>,
    pub(super) row_height: f32,
    pub(super) row_gap: f32,
    pub(super) column_height: f32,
    pub(super) hide_delay: Duration,
    pub(super) active_key: Option<GroupKey>,
    pub(super) bubble_visible: bool,
    pub(super) dragging: bool,
    pub(super) hide_timer: Option<HideTimer>,
    pub(super) last_token: u64,
}

impl Default for ScrubberState {
    fn default() -> Self {
        Self::new(1.0, 0.0, DEFAULT_HIDE_DELAY)
    }
}

impl UiState for ScrubberState {}

impl ScrubberState {
    pub fn new(row_height: f32, row_gap: f32, hide_delay: Duration) -> Self {
        Self {
            keys: Vec::new(),
            row_height,
            row_gap,
            column_height: 0.0,
            hide_delay,
            active_key: None,
            bubble_visible: false,
            dragging: false,
            hide_timer: None,
            last_token: 0,
        }
    }

    pub fn keys(&self) -> &[GroupKey] {
        &self.keys
    }

    pub fn layout(&self) -> ScrubberLayout {
        ScrubberLayout::new(
            self.row_height,
            self.row_gap,
            self.column_height,
            self.keys.len(),
        )
    }

    pub fn active_key(&self) -> Option<&GroupKey> {
        self.active_key.as_ref()
    }

    /// Row index of the active key, if it is still in the key list.
    pub fn active_index(&self) -> Option<usize> {
        let active = self.active_key.as_ref()?;
        self.keys.iter().position(|key| key == active)
    }

    pub fn is_selected(&self, key: &GroupKey) -> bool {
        self.active_key.as_ref() == Some(key)
    }

    pub fn bubble_visible(&self) -> bool {
        self.bubble_visible
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn hide_timer(&self) -> Option<HideTimer> {
        self.hide_timer
    }

    pub fn hide_delay(&self) -> Duration {
        self.hide_delay
    }
}

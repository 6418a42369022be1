use std::time::Duration;

use crate::config::{HapticIntensity, ScrubberConfig};
use crate::contacts::GroupKey;
use crate::ui::mvi::Reducer;

use super::intent::ScrubberIntent;
use super::reducer::ScrubberReducer;
use super::state::{HideTimer, ScrubberState};

/// Capabilities the scrubber needs from whoever hosts it.
pub trait ScrubberHost {
    /// Scroll the list so the section anchored at `key` is at the top.
    fn scroll_to_anchor(&mut self, key: &GroupKey);

    /// Fire-and-forget tactile feedback. Failures are ignored.
    fn pulse_haptic(&mut self, intensity: HapticIntensity);
}

/// Scrubber state plus the side effects of its transitions.
///
/// Every change of the active key produces exactly one `scroll_to_anchor`
/// and one haptic pulse; dwelling on a row produces nothing.
#[derive(Debug, Clone)]
pub struct IndexScrubber {
    state: ScrubberState,
    haptics: Option<HapticIntensity>,
}

impl Default for IndexScrubber {
    fn default() -> Self {
        Self::new(&ScrubberConfig::default())
    }
}

impl IndexScrubber {
    pub fn new(config: &ScrubberConfig) -> Self {
        Self {
            state: ScrubberState::new(
                config.row_height,
                config.row_gap,
                Duration::from_millis(config.bubble_hide_delay_ms),
            ),
            haptics: config.haptics.then_some(config.haptic_intensity),
        }
    }

    pub fn state(&self) -> &ScrubberState {
        &self.state
    }

    /// Run `intent` through the reducer and perform host effects.
    ///
    /// Returns the hide timer if this dispatch armed a new one; the caller
    /// must deliver `HideTimerFired` for it once its delay has elapsed.
    pub fn dispatch(
        &mut self,
        intent: ScrubberIntent,
        host: &mut dyn ScrubberHost,
    ) -> Option<HideTimer> {
        let previous_key = self.state.active_key.clone();
        let previous_token = self.state.hide_timer.map(|timer| timer.token);

        self.state = ScrubberReducer::reduce(std::mem::take(&mut self.state), intent);

        if self.state.active_key != previous_key {
            if let Some(key) = &self.state.active_key {
                tracing::debug!(key = %key, "Scrubber key changed");
                host.scroll_to_anchor(key);
                if let Some(intensity) = self.haptics {
                    host.pulse_haptic(intensity);
                }
            }
        }

        self.state
            .hide_timer
            .filter(|timer| Some(timer.token) != previous_token)
    }
}

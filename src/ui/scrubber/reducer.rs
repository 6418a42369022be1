//! Reducer for the scrubber.

use std::collections::HashSet;
use std::time::Instant;

use crate::ui::mvi::Reducer;

use super::intent::ScrubberIntent;
use super::layout::HitTest;
use super::state::{HideTimer, ScrubberState};

/// Reducer for scrubber state transitions.
///
/// Pure function. Scrolling, haptics and arming the real timer happen in
/// [`IndexScrubber::dispatch`](super::IndexScrubber::dispatch) by comparing
/// the state before and after.
pub struct ScrubberReducer;

impl Reducer for ScrubberReducer {
    type State = ScrubberState;
    type Intent = ScrubberIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ScrubberIntent::SetKeys { keys } => {
                debug_assert!(
                    keys.iter().collect::<HashSet<_>>().len() == keys.len(),
                    "scrubber keys must be unique"
                );
                state.keys = keys;
                let still_present = state
                    .active_key
                    .as_ref()
                    .is_some_and(|active| state.keys.contains(active));
                if !still_present {
                    state.active_key = None;
                    state.bubble_visible = false;
                    state.hide_timer = None;
                }
                state
            }

            ScrubberIntent::Resize { column_height } => {
                state.column_height = column_height;
                state
            }

            ScrubberIntent::PointerDown { y } | ScrubberIntent::PointerMove { y } => {
                state.dragging = true;
                state.hide_timer = None;
                if let HitTest::Row(index) = state.layout().hit_test(y) {
                    let candidate = &state.keys[index];
                    if state.active_key.as_ref() != Some(candidate) {
                        state.active_key = Some(candidate.clone());
                    }
                }
                state.bubble_visible = state.active_key.is_some();
                state
            }

            ScrubberIntent::PointerUp { at } => {
                if !state.dragging {
                    return state;
                }
                state.dragging = false;
                show_then_schedule_hide(state, at)
            }

            ScrubberIntent::Tap { index, at } => {
                let Some(key) = state.keys.get(index).cloned() else {
                    return state;
                };
                state.dragging = false;
                state.active_key = Some(key);
                show_then_schedule_hide(state, at)
            }

            ScrubberIntent::HideTimerFired { token, at } => {
                let due = state
                    .hide_timer
                    .is_some_and(|timer| timer.token == token && at >= timer.deadline);
                if due && !state.dragging {
                    state.bubble_visible = false;
                    state.hide_timer = None;
                }
                state
            }
        }
    }
}

/// Show the bubble and replace any pending hide with a fresh one.
fn show_then_schedule_hide(mut state: ScrubberState, at: Instant) -> ScrubberState {
    if state.active_key.is_none() {
        state.bubble_visible = false;
        state.hide_timer = None;
        return state;
    }
    state.bubble_visible = true;
    state.last_token += 1;
    state.hide_timer = Some(HideTimer {
        token: state.last_token,
        deadline: at + state.hide_delay,
    });
    state
}

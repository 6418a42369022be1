//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Pure state transition for one piece of screen state.
///
/// Implementations never scroll, pulse, spawn fetches or arm timers. Callers
/// take the current state with `std::mem::take`, reduce it, and act on the
/// difference between the old and new snapshots.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// `(State, Intent) -> State`. Intents that do not apply in the current
    /// state return it unchanged.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

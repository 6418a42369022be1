//! Intents for the scrubber.

use std::time::Instant;

use crate::contacts::GroupKey;
use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the scrubber.
///
/// Pointer positions are vertical offsets from the top of the column.
#[derive(Debug, Clone)]
pub enum ScrubberIntent {
    /// The group key sequence changed. Keys must be unique.
    SetKeys { keys: Vec<GroupKey> },

    /// The column was laid out with a new height.
    Resize { column_height: f32 },

    /// Pointer pressed on the column.
    PointerDown { y: f32 },

    /// Pointer moved while pressed.
    PointerMove { y: f32 },

    /// Pointer released; starts the bubble auto-hide.
    PointerUp { at: Instant },

    /// Discrete tap on row `index` (also used for keyboard jumps).
    Tap { index: usize, at: Instant },

    /// The hide timer with `token` fired.
    HideTimerFired { token: u64, at: Instant },
}

impl Intent for ScrubberIntent {}

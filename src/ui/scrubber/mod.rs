//! Side index ("scrubber") for jump-scrolling a sectioned list.
//!
//! A fixed-height column with one row per group key. Dragging along the
//! column selects the key under the pointer, scrolls the host list to that
//! section, pulses haptics on each change, and shows an enlarged preview
//! (the bubble) that hides itself after a debounce delay once the
//! interaction ends.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `layout.rs` - Row geometry and hit-testing
//! - `state.rs` - Interaction state (active key, bubble, hide timer)
//! - `intent.rs` - Pointer, tap, key-list and timer events
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `component.rs` - Dispatch plus host side effects
//! - `widget.rs` - Rendering

mod component;
mod intent;
mod layout;
mod reducer;
mod state;
mod widget;

pub use component::{IndexScrubber, ScrubberHost};
pub use intent::ScrubberIntent;
pub use layout::{HitTest, ScrubberLayout};
pub use reducer::ScrubberReducer;
pub use state::{HideTimer, ScrubberState, DEFAULT_HIDE_DELAY};
pub use widget::{bubble_rect, render_bubble, ScrubberWidget, BUBBLE_HEIGHT, BUBBLE_WIDTH};

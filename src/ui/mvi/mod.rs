//! Model-View-Intent (MVI) primitives.
//!
//! Every piece of interactive state in the list screen (the load state
//! machine, the scrubber) changes only through a reducer:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: owned, cloneable snapshot with everything the view needs
//! - **Intent**: pointer events, fetch completions, timer firings
//! - **Reducer**: pure `(State, Intent) -> State`; effects (scrolling, haptics,
//!   starting fetches) are performed by the caller after comparing states

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;

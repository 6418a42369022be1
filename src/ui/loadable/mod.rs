//! Load lifecycle of an asynchronously fetched collection.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - `Loadable<T>` variants plus the generation token
//! - `intent.rs` - Request / fetch completion events
//! - `reducer.rs` - State transitions (pure, no side effects)
//!
//! Starting the actual fetch is the caller's job: after dispatching
//! `LoadIntent::Request`, compare [`LoadState::generation`] before and after.
//! A changed generation means exactly one new fetch must be started, tagged
//! with the new generation.

mod intent;
mod reducer;
mod state;

pub use intent::LoadIntent;
pub use reducer::LoadReducer;
pub use state::{LoadState, LoadView, Loadable};

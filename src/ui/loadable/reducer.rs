//! Reducer for the load lifecycle.

use std::marker::PhantomData;

use crate::ui::mvi::Reducer;

use super::intent::LoadIntent;
use super::state::{LoadState, Loadable};

/// Reducer for load lifecycle transitions.
///
/// - `Request` while a fetch is in flight is a no-op (at most one outstanding
///   fetch). From `Loaded(v)` it moves to `Loading { previous: Some(v) }`,
///   from any other variant to `Loading { previous: None }`.
/// - Completions apply only while loading and only when their generation
///   matches the latest request.
pub struct LoadReducer<T>(PhantomData<T>);

impl<T: Clone + PartialEq + Send + 'static> Reducer for LoadReducer<T> {
    type State = LoadState<T>;
    type Intent = LoadIntent<T>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let LoadState { phase, generation } = state;

        match intent {
            LoadIntent::Request => match phase {
                Loadable::Loading { previous } => LoadState {
                    phase: Loadable::Loading { previous },
                    generation,
                },
                Loadable::Loaded(value) => LoadState {
                    phase: Loadable::Loading {
                        previous: Some(value),
                    },
                    generation: generation + 1,
                },
                Loadable::NotRequested | Loadable::Failed(_) => LoadState {
                    phase: Loadable::Loading { previous: None },
                    generation: generation + 1,
                },
            },

            LoadIntent::Succeeded {
                generation: tag,
                value,
            } => match phase {
                Loadable::Loading { .. } if tag == generation => LoadState {
                    phase: Loadable::Loaded(value),
                    generation,
                },
                other => LoadState {
                    phase: other,
                    generation,
                },
            },

            LoadIntent::Failed {
                generation: tag,
                error,
            } => match phase {
                Loadable::Loading { .. } if tag == generation => LoadState {
                    phase: Loadable::Failed(error),
                    generation,
                },
                other => LoadState {
                    phase: other,
                    generation,
                },
            },
        }
    }
}

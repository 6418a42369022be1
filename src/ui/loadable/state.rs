//! State for the load lifecycle.

use crate::contacts::FetchError;
use crate::ui::mvi::UiState;

/// Lifecycle of one asynchronously fetched value.
#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    /// No fetch has been initiated.
    NotRequested,

    /// A fetch is in flight. `previous` keeps the last good value on refresh.
    Loading { previous: Option<T> },

    /// The last fetch succeeded.
    Loaded(T),

    /// The last fetch failed.
    Failed(FetchError),
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Loadable::NotRequested
    }
}

impl<T> Loadable<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    /// The value to display, if any (loaded, or stale while refreshing).
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            Self::Loading { previous } => previous.as_ref(),
            Self::NotRequested | Self::Failed(_) => None,
        }
    }
}

/// `Loadable<T>` plus the generation of the latest accepted request.
///
/// Generations start at 0 (nothing requested) and increase by one for each
/// accepted `Request`. Completions tagged with any other generation are stale.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadState<T> {
    pub(super) phase: Loadable<T>,
    pub(super) generation: u64,
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self {
            phase: Loadable::NotRequested,
            generation: 0,
        }
    }
}

impl<T: Clone + PartialEq + Send + 'static> UiState for LoadState<T> {}

/// What the screen should show for a given load state.
#[derive(Debug, PartialEq)]
pub enum LoadView<'a, T> {
    /// Nothing yet; the first appearance triggers the request.
    Blank,
    /// Loading indicator only.
    Spinner,
    /// Content, with a loading indicator overlaid while `refreshing`.
    Content { value: &'a T, refreshing: bool },
    /// Error surface with a retry action.
    Error(&'a FetchError),
}

impl<T> LoadState<T> {
    pub fn phase(&self) -> &Loadable<T> {
        &self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Generation of the outstanding fetch, if one is in flight.
    pub fn in_flight(&self) -> Option<u64> {
        self.phase.is_loading().then_some(self.generation)
    }

    pub fn is_not_requested(&self) -> bool {
        matches!(self.phase, Loadable::NotRequested)
    }

    /// Pure mapping from the current variant to what gets rendered.
    pub fn view(&self) -> LoadView<'_, T> {
        match &self.phase {
            Loadable::NotRequested => LoadView::Blank,
            Loadable::Loading { previous: None } => LoadView::Spinner,
            Loadable::Loading {
                previous: Some(value),
            } => LoadView::Content {
                value,
                refreshing: true,
            },
            Loadable::Loaded(value) => LoadView::Content {
                value,
                refreshing: false,
            },
            Loadable::Failed(error) => LoadView::Error(error),
        }
    }
}

use proptest::prelude::*;
use rolodex::contacts::FetchError;
use rolodex::ui::loadable::{LoadIntent, LoadReducer, LoadState, LoadView, Loadable};
use rolodex::ui::mvi::Reducer;

type State = LoadState<Vec<&'static str>>;

fn reduce(state: State, intent: LoadIntent<Vec<&'static str>>) -> State {
    LoadReducer::reduce(state, intent)
}

fn offline() -> FetchError {
    FetchError::unavailable("offline")
}

#[test]
fn fail_then_retry_then_succeed() {
    let state = State::default();
    assert_eq!(state.view(), LoadView::Blank);

    let state = reduce(state, LoadIntent::Request);
    assert_eq!(state.phase(), &Loadable::Loading { previous: None });
    assert_eq!(state.view(), LoadView::Spinner);

    let state = reduce(
        state,
        LoadIntent::Failed {
            generation: 1,
            error: offline(),
        },
    );
    assert_eq!(state.phase(), &Loadable::Failed(offline()));
    assert_eq!(state.view(), LoadView::Error(&offline()));

    let state = reduce(state, LoadIntent::Request);
    assert_eq!(state.phase(), &Loadable::Loading { previous: None });
    assert_eq!(state.generation(), 2);

    let state = reduce(
        state,
        LoadIntent::Succeeded {
            generation: 2,
            value: vec!["Ann"],
        },
    );
    assert_eq!(state.phase(), &Loadable::Loaded(vec!["Ann"]));
    assert_eq!(
        state.view(),
        LoadView::Content {
            value: &vec!["Ann"],
            refreshing: false
        }
    );
}

#[test]
fn refresh_carries_previous_value() {
    let state = reduce(State::default(), LoadIntent::Request);
    let state = reduce(
        state,
        LoadIntent::Succeeded {
            generation: 1,
            value: vec!["Ann", "Bob"],
        },
    );

    let state = reduce(state, LoadIntent::Request);
    assert_eq!(
        state.phase(),
        &Loadable::Loading {
            previous: Some(vec!["Ann", "Bob"])
        }
    );
    assert_eq!(
        state.view(),
        LoadView::Content {
            value: &vec!["Ann", "Bob"],
            refreshing: true
        }
    );
}

#[test]
fn request_while_loading_keeps_generation() {
    let state = reduce(State::default(), LoadIntent::Request);
    let again = reduce(state.clone(), LoadIntent::Request);
    assert_eq!(again, state);
    assert_eq!(again.in_flight(), Some(1));
}

#[test]
fn stale_completion_is_ignored() {
    let state = reduce(State::default(), LoadIntent::Request);
    let state = reduce(
        state,
        LoadIntent::Failed {
            generation: 1,
            error: offline(),
        },
    );
    let state = reduce(state, LoadIntent::Request);

    // Late success from the first request.
    let state = reduce(
        state,
        LoadIntent::Succeeded {
            generation: 1,
            value: vec!["Stale"],
        },
    );
    assert_eq!(state.phase(), &Loadable::Loading { previous: None });
    assert_eq!(state.in_flight(), Some(2));
}

#[derive(Debug, Clone)]
enum Step {
    Request,
    Succeed { lag: u64 },
    Fail { lag: u64 },
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Request),
        (0u64..3).prop_map(|lag| Step::Succeed { lag }),
        (0u64..3).prop_map(|lag| Step::Fail { lag }),
    ]
}

proptest! {
    /// Generation only moves on accepted requests, so a changed generation
    /// is the single signal to start a fetch.
    #[test]
    fn at_most_one_fetch_in_flight(steps in prop::collection::vec(arb_step(), 0..40)) {
        let mut state = State::default();
        let mut started = 0u64;

        for step in steps {
            let before = state.clone();
            let intent = match step {
                Step::Request => LoadIntent::Request,
                Step::Succeed { lag } => LoadIntent::Succeeded {
                    generation: state.generation().saturating_sub(lag),
                    value: vec!["Ann"],
                },
                Step::Fail { lag } => LoadIntent::Failed {
                    generation: state.generation().saturating_sub(lag),
                    error: offline(),
                },
            };
            state = reduce(state, intent);

            if state.generation() != before.generation() {
                prop_assert!(before.in_flight().is_none());
                prop_assert_eq!(state.generation(), before.generation() + 1);
                started += 1;
            }
            prop_assert_eq!(state.generation(), started);

            if let (Loadable::Loading { previous }, false) =
                (state.phase(), before.phase().is_loading())
            {
                match before.phase() {
                    Loadable::Loaded(value) => prop_assert_eq!(previous.as_ref(), Some(value)),
                    _ => prop_assert!(previous.is_none()),
                }
            }
        }
    }
}

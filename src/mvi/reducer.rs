use super::intent::Intent;
use super::state::UiState;

/// Transforms state in response to intents.
///
/// `reduce` must be pure: (State, Intent) -> State. Anything that suspends
/// (network I/O) happens outside and is fed back in as another intent.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

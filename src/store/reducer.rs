use tracing::debug;

use crate::catalog::default_regions;
use crate::mvi::Reducer;
use crate::store::filter;
use crate::store::intent::PokedexIntent;
use crate::store::state::{LoadStatus, PokedexState};

pub struct PokedexReducer;

impl Reducer for PokedexReducer {
    type State = PokedexState;
    type Intent = PokedexIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PokedexIntent::LoadStarted => {
                state.status = LoadStatus::Loading;
                state
            }
            PokedexIntent::LoadSucceeded { pokemon } => {
                state.all_pokemon = pokemon;
                state.regions = default_regions();
                state.status = LoadStatus::Loaded;
                recompute(state)
            }
            PokedexIntent::LoadFailed { message } => {
                state.status = LoadStatus::Failed { message };
                state
            }
            PokedexIntent::SetRegion { region } => {
                state.selected_region = region;
                recompute(state)
            }
            PokedexIntent::SetSearch { query } => {
                state.search_query = query;
                recompute(state)
            }
            PokedexIntent::SetPage { page } => {
                state.current_page = page;
                state
            }
            PokedexIntent::ApplyFilters => recompute(state),
        }
    }
}

fn recompute(mut state: PokedexState) -> PokedexState {
    state.filtered_pokemon = filter::apply_filters(
        &state.all_pokemon,
        &state.regions,
        &state.selected_region,
        &state.search_query,
    );
    state.current_page = 1;
    debug!(
        region = %state.selected_region,
        query = %state.search_query,
        matched = state.filtered_pokemon.len(),
        "filters applied"
    );
    state
}

//! The catalog store: loading status, filter criteria and paging.
//!
//! [`PokedexStore`] owns a [`PokedexState`] and the [`CatalogLoader`]. All
//! synchronous operations go through [`PokedexReducer`]; the only operation
//! that suspends is [`PokedexStore::fetch_all_pokemon`].

pub mod filter;
mod intent;
mod reducer;
mod state;

pub use intent::PokedexIntent;
pub use reducer::PokedexReducer;
pub use state::{LoadStatus, PokedexState};

use tracing::{error, info};

use crate::catalog::CatalogLoader;
use crate::config::ApiConfig;
use crate::error::{FetchError, FETCH_FAILURE_MESSAGE};
use crate::mvi::Reducer;

/// Fixed page size.
pub const ITEMS_PER_PAGE: usize = 20;

/// Session-scoped store handed to the presentation layer.
pub struct PokedexStore {
    state: PokedexState,
    loader: CatalogLoader,
}

impl PokedexStore {
    /// Builds a store with an empty catalog.
    ///
    /// # Errors
    /// Fails only if the HTTP client cannot be constructed.
    pub fn new(api: &ApiConfig) -> Result<Self, FetchError> {
        Ok(Self::with_loader(CatalogLoader::new(api)?))
    }

    pub fn with_loader(loader: CatalogLoader) -> Self {
        Self {
            state: PokedexState::default(),
            loader,
        }
    }

    pub fn state(&self) -> &PokedexState {
        &self.state
    }

    pub fn dispatch(&mut self, intent: PokedexIntent) {
        let state = std::mem::take(&mut self.state);
        self.state = PokedexReducer::reduce(state, intent);
    }

    /// Loads the full catalog.
    ///
    /// Failures are absorbed: they are logged and surfaced only through
    /// [`PokedexState::error`]. A failed load keeps the previous catalog.
    pub async fn fetch_all_pokemon(&mut self) {
        self.dispatch(PokedexIntent::LoadStarted);

        match self.loader.load_catalog().await {
            Ok(pokemon) => {
                info!(count = pokemon.len(), "catalog loaded");
                self.dispatch(PokedexIntent::LoadSucceeded { pokemon });
            }
            Err(err) => {
                error!(kind = err.kind(), error = %err, "error fetching catalog");
                self.dispatch(PokedexIntent::LoadFailed {
                    message: FETCH_FAILURE_MESSAGE.to_string(),
                });
            }
        }
    }

    pub fn set_region_filter(&mut self, region: impl Into<String>) {
        self.dispatch(PokedexIntent::SetRegion {
            region: region.into(),
        });
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.dispatch(PokedexIntent::SetSearch {
            query: query.into(),
        });
    }

    pub fn set_page(&mut self, page: usize) {
        self.dispatch(PokedexIntent::SetPage { page });
    }

    pub fn apply_filters(&mut self) {
        self.dispatch(PokedexIntent::ApplyFilters);
    }
}

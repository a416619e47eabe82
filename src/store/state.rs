use crate::catalog::{Pokemon, Region, ALL_REGIONS};
use crate::mvi::UiState;
use crate::store::filter;
use crate::store::ITEMS_PER_PAGE;

/// Progress of the catalog fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed { message: String },
}

/// Everything the presentation layer reads.
///
/// `filtered_pokemon` is recomputed by the reducer whenever the catalog or
/// the criteria change; the page window and page count are derived on each
/// call.
#[derive(Debug, Clone, PartialEq)]
pub struct PokedexState {
    pub(crate) all_pokemon: Vec<Pokemon>,
    pub(crate) filtered_pokemon: Vec<Pokemon>,
    pub(crate) regions: Vec<Region>,
    pub(crate) selected_region: String,
    pub(crate) search_query: String,
    pub(crate) status: LoadStatus,
    pub(crate) current_page: usize,
}

impl Default for PokedexState {
    fn default() -> Self {
        Self {
            all_pokemon: Vec::new(),
            filtered_pokemon: Vec::new(),
            regions: Vec::new(),
            selected_region: ALL_REGIONS.to_string(),
            search_query: String::new(),
            status: LoadStatus::Idle,
            current_page: 1,
        }
    }
}

impl UiState for PokedexState {}

impl PokedexState {
    pub fn all_pokemon(&self) -> &[Pokemon] {
        &self.all_pokemon
    }

    pub fn filtered_pokemon(&self) -> &[Pokemon] {
        &self.filtered_pokemon
    }

    /// The current page window of the filtered list.
    pub fn displayed_pokemon(&self) -> &[Pokemon] {
        filter::page_slice(&self.filtered_pokemon, self.current_page, ITEMS_PER_PAGE)
    }

    pub fn total_pages(&self) -> usize {
        filter::total_pages(self.filtered_pokemon.len(), ITEMS_PER_PAGE)
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn selected_region(&self) -> &str {
        &self.selected_region
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Loading)
    }

    /// User-facing message of the last failed load, cleared when the next
    /// load starts.
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed { message } => Some(message),
            _ => None,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        ITEMS_PER_PAGE
    }

    /// Detail lookup by catalog id.
    pub fn find_pokemon(&self, id: u32) -> Option<&Pokemon> {
        // ids are dense and 1-based, so try the direct index before scanning
        let direct = usize::try_from(id)
            .ok()
            .and_then(|i| i.checked_sub(1))
            .and_then(|i| self.all_pokemon.get(i))
            .filter(|p| p.id == id);
        direct.or_else(|| self.all_pokemon.iter().find(|p| p.id == id))
    }
}

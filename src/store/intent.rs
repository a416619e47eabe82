use crate::catalog::Pokemon;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum PokedexIntent {
    /// A fetch was issued. Clears any previous error.
    LoadStarted,
    /// The fetch completed; replaces the catalog and installs the regions.
    LoadSucceeded { pokemon: Vec<Pokemon> },
    /// The fetch failed; the catalog is left as it was.
    LoadFailed { message: String },
    SetRegion { region: String },
    SetSearch { query: String },
    /// No bounds check; out-of-range pages render empty.
    SetPage { page: usize },
    /// Recompute the filtered list with the current criteria.
    ApplyFilters,
}

impl Intent for PokedexIntent {}

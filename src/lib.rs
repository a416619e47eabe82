//! Fetch-once, filter-and-paginate-locally store for the Pokémon catalog.
//!
//! The catalog is downloaded in a single request from PokeAPI, numbered
//! positionally, and then narrowed by region and search text entirely in
//! memory. See [`store::PokedexStore`] for the entry point.

pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod mvi;
pub mod store;

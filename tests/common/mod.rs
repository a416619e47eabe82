//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use pokedex::catalog::Pokemon;
use pokedex::config::ApiConfig;
use pokedex::mvi::Reducer;
use pokedex::store::{PokedexIntent, PokedexReducer, PokedexState, PokedexStore};

/// Build a listing body like PokeAPI's `/pokemon?limit=N` response.
pub fn listing_json(names: &[String]) -> String {
    let results: Vec<serde_json::Value> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            serde_json::json!({
                "name": name,
                "url": format!("https://pokeapi.co/api/v2/pokemon/{}/", i + 1),
            })
        })
        .collect();

    serde_json::json!({
        "count": names.len(),
        "next": null,
        "previous": null,
        "results": results,
    })
    .to_string()
}

/// `n` synthetic names `mon-1 ..= mon-n`.
pub fn synthetic_names(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("mon-{}", i)).collect()
}

/// A numbered catalog, as the loader would produce it.
pub fn catalog_of(names: &[String]) -> Vec<Pokemon> {
    names
        .iter()
        .zip(1u32..)
        .map(|(name, id)| Pokemon {
            id,
            name: name.clone(),
            url: format!("https://pokeapi.co/api/v2/pokemon/{}/", id),
        })
        .collect()
}

/// Reducer-level state with `names` loaded.
pub fn loaded_state(names: &[String]) -> PokedexState {
    PokedexReducer::reduce(
        PokedexState::default(),
        PokedexIntent::LoadSucceeded {
            pokemon: catalog_of(names),
        },
    )
}

/// A store whose loader points at `base_url`.
pub fn store_for(base_url: &str, limit: u32) -> PokedexStore {
    let api = ApiConfig {
        base_url: base_url.to_string(),
        limit,
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    };
    PokedexStore::new(&api).expect("Failed to build store")
}
